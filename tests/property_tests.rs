use proptest::prelude::*;
use skatefit::config::{DeckStrategy, EngineParams, TightnessRule};
use skatefit::engine::compute;
use skatefit::profile::{BoardFeel, Experience, Flexibility, RiderProfile, RidingStyle, Terrain};

// --- STRATEGIES ---

fn arb_experience() -> impl Strategy<Value = Experience> {
    prop_oneof![
        Just(Experience::Beginner),
        Just(Experience::Intermediate),
        Just(Experience::Comfortable),
        Just(Experience::Advanced),
    ]
}

fn arb_style() -> impl Strategy<Value = RidingStyle> {
    prop_oneof![
        Just(RidingStyle::Street),
        Just(RidingStyle::Park),
        Just(RidingStyle::Cruising),
        Just(RidingStyle::Longboard),
        Just(RidingStyle::Mixed),
    ]
}

fn arb_terrain() -> impl Strategy<Value = Terrain> {
    prop_oneof![Just(Terrain::Smooth), Just(Terrain::Rough), Just(Terrain::Mixed)]
}

fn arb_flex() -> impl Strategy<Value = Option<Flexibility>> {
    prop_oneof![
        Just(None),
        Just(Some(Flexibility::Low)),
        Just(Some(Flexibility::Medium)),
        Just(Some(Flexibility::High)),
    ]
}

fn arb_feel() -> impl Strategy<Value = Option<BoardFeel>> {
    prop_oneof![
        Just(None),
        Just(Some(BoardFeel::Light)),
        Just(Some(BoardFeel::Durable)),
        Just(Some(BoardFeel::Grippy)),
    ]
}

prop_compose! {
    fn arb_profile()(
        height_cm in 100.0..220.0f64,
        weight_kg in 25.0..160.0f64,
        shoe_size_eu in 30.0..52.0f64,
        experience in arb_experience(),
        style in arb_style(),
        terrain in arb_terrain(),
        stability in 1u8..=10,
        flexibility in arb_flex(),
        board_feel in arb_feel(),
    ) -> RiderProfile {
        RiderProfile {
            height_cm,
            weight_kg,
            shoe_size_eu,
            experience: Some(experience),
            riding_style: Some(style),
            terrain: Some(terrain),
            stability_preference: Some(stability),
            flexibility,
            board_feel,
        }
    }
}

fn arb_params() -> impl Strategy<Value = EngineParams> {
    (
        prop_oneof![Just(DeckStrategy::Continuous), Just(DeckStrategy::Banded)],
        prop_oneof![
            Just(TightnessRule::ResponseLevel),
            Just(TightnessRule::WeightBand)
        ],
    )
        .prop_map(|(deck_strategy, tightness_rule)| EngineParams {
            deck_strategy,
            tightness_rule,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_hardness_always_clamped(profile in arb_profile(), params in arb_params()) {
        let rec = compute(&profile, &params);
        let spec = rec.spec().expect("generated profiles are complete");
        let h = spec.wheels.hardness.value();
        prop_assert!((78..=101).contains(&h), "hardness {} out of range", h);
    }

    #[test]
    fn test_banded_width_clamped_to_eighths(profile in arb_profile()) {
        let params = EngineParams { deck_strategy: DeckStrategy::Banded, ..Default::default() };
        let rec = compute(&profile, &params);
        let w = rec.spec().unwrap().deck.width;
        prop_assert!((7.75..=10.0).contains(&w), "width {} out of range", w);
        prop_assert_eq!((w * 8.0).fract(), 0.0);
    }

    #[test]
    fn test_banded_wheelbase_comes_from_band_table(profile in arb_profile()) {
        let params = EngineParams { deck_strategy: DeckStrategy::Banded, ..Default::default() };
        let deck = compute(&profile, &params).spec().unwrap().deck;
        prop_assert!(
            [13.5, 14.25, 15.0].contains(&deck.wheelbase),
            "wheelbase {} not a band value",
            deck.wheelbase
        );
        let offset = deck.length - deck.wheelbase;
        prop_assert!(offset == 18.0 || offset == 20.0, "length offset {}", offset);
    }

    #[test]
    fn test_trucks_match_deck(profile in arb_profile(), params in arb_params()) {
        let rec = compute(&profile, &params);
        let spec = rec.spec().unwrap();
        prop_assert_eq!(spec.trucks.width, spec.deck.width);
    }

    #[test]
    fn test_compute_deterministic(profile in arb_profile(), params in arb_params()) {
        prop_assert_eq!(compute(&profile, &params), compute(&profile, &params));
    }

    #[test]
    fn test_missing_terrain_is_always_incomplete(profile in arb_profile(), params in arb_params()) {
        let profile = RiderProfile { terrain: None, ..profile };
        prop_assert!(!compute(&profile, &params).is_complete());
    }
}
