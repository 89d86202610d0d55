mod common;

use common::{rider, street_profile};
use rstest::rstest;
use skatefit::config::EngineParams;
use skatefit::engine::types::{Concave, Risers};
use skatefit::engine::{build_spec, compute_default};
use skatefit::explain::{component_notes, explain, Component, ExplanationFragment, Topic};
use skatefit::profile::{BoardFeel, Flexibility, RiderProfile, RidingStyle, Terrain};

fn fragment(fragments: &[ExplanationFragment], topic: Topic) -> &ExplanationFragment {
    fragments
        .iter()
        .find(|f| f.topic == topic)
        .expect("fragment should be present")
}

#[test]
fn test_minimal_profile_fragment_order() {
    let r = rider(&street_profile());
    let spec = build_spec(&r, &EngineParams::default());
    let topics: Vec<Topic> = explain(&r, &spec).iter().map(|f| f.topic).collect();
    assert_eq!(
        topics,
        vec![
            Topic::CenterOfGravity,
            Topic::RotationalPhysics,
            Topic::RollingDynamics,
            Topic::Biomechanics,
            Topic::Experience,
        ]
    );
}

#[test]
fn test_full_profile_fragment_order() {
    let profile = RiderProfile {
        weight_kg: 110.0,
        flexibility: Some(Flexibility::High),
        board_feel: Some(BoardFeel::Durable),
        ..street_profile()
    };
    let r = rider(&profile);
    let spec = *compute_default(&profile).spec().unwrap();
    let fragments = explain(&r, &spec);
    let topics: Vec<Topic> = fragments.iter().map(|f| f.topic).collect();
    assert_eq!(
        topics,
        vec![
            Topic::CenterOfGravity,
            Topic::RotationalPhysics,
            Topic::RollingDynamics,
            Topic::LoadDistribution,
            Topic::Biomechanics,
            Topic::Experience,
            Topic::Flexibility,
            Topic::BoardFeel,
        ]
    );

    let load = &fragments[3];
    assert_eq!(load.label, "Load Distribution");
    assert!(load.text.contains("110.0kg / 243 lbs"), "{}", load.text);

    let feel = &fragments[7];
    assert!(feel.text.contains("8-ply Maple + Fiberglass Laminate"));
    assert!(feel.text.contains("Heavy (8-9 lbs)"));
}

#[test]
fn test_values_are_substituted() {
    let r = rider(&street_profile());
    let spec = build_spec(&r, &EngineParams::default());
    let fragments = explain(&r, &spec);

    assert!(fragments[0].text.contains("8.1\" deck width"));
    assert!(fragments[0].text.contains("medium concave"));
    assert!(fragments[1].text.contains("26\" wheelbase"));
    assert!(fragments[2].text.contains("50mm wheels with 99A"));
    assert!(fragments[2].text.contains("smooth terrain"));
    assert!(fragments[3].text.contains("177.8cm / 5'10\""));
}

#[test]
fn test_component_notes_cover_each_card() {
    let r = rider(&street_profile());
    let spec = build_spec(&r, &EngineParams::default());
    let notes = component_notes(&r, &spec);
    let components: Vec<Component> = notes.iter().map(|n| n.component).collect();
    assert_eq!(
        components,
        vec![
            Component::Deck,
            Component::Trucks,
            Component::Wheels,
            Component::Hardware
        ]
    );
    assert!(notes[0].text.contains("flip tricks"));
    assert!(notes[1].text.contains("Low trucks"));
    assert!(notes[3].text.contains("ABEC 5"));
    assert!(notes[3].text.contains("without risers"));
}

#[test]
fn test_flexibility_text_follows_style_override() {
    let profile = RiderProfile {
        riding_style: Some(RidingStyle::Cruising),
        flexibility: Some(Flexibility::High),
        ..street_profile()
    };
    let r = rider(&profile);
    let spec = build_spec(&r, &EngineParams::default());
    assert_eq!(spec.deck.concave, Concave::Mellow);

    let fragments = explain(&r, &spec);
    let text = &fragment(&fragments, Topic::Flexibility).text;
    assert!(text.contains("mellow concave"), "{}", text);
    assert!(!text.contains("deep"), "{}", text);
}

#[rstest]
// Large cruiser wheels take the clearance risers before the feel rule.
#[case(RidingStyle::Cruising, Terrain::Smooth, BoardFeel::Durable, Risers::StandardEighth)]
#[case(RidingStyle::Park, Terrain::Rough, BoardFeel::Grippy, Risers::StandardEighth)]
#[case(RidingStyle::Street, Terrain::Smooth, BoardFeel::Durable, Risers::HardEighth)]
#[case(RidingStyle::Street, Terrain::Smooth, BoardFeel::Grippy, Risers::SoftSixteenth)]
fn test_board_feel_text_names_selected_risers(
    #[case] style: RidingStyle,
    #[case] terrain: Terrain,
    #[case] feel: BoardFeel,
    #[case] expected: Risers,
) {
    let profile = RiderProfile {
        riding_style: Some(style),
        terrain: Some(terrain),
        board_feel: Some(feel),
        ..street_profile()
    };
    let r = rider(&profile);
    let spec = build_spec(&r, &EngineParams::default());
    assert_eq!(spec.hardware.risers, expected);

    let fragments = explain(&r, &spec);
    let text = &fragment(&fragments, Topic::BoardFeel).text;
    assert!(text.contains(&expected.to_string()), "{}", text);
    for other in [Risers::SoftSixteenth, Risers::HardEighth, Risers::StandardEighth] {
        if other != expected {
            assert!(!text.contains(&other.to_string()), "{}", text);
        }
    }
}

#[test]
fn test_board_feel_text_without_risers() {
    let profile = RiderProfile {
        board_feel: Some(BoardFeel::Light),
        ..street_profile()
    };
    let r = rider(&profile);
    let spec = build_spec(&r, &EngineParams::default());
    let fragments = explain(&r, &spec);
    assert!(fragment(&fragments, Topic::BoardFeel).text.contains("no risers"));
}
