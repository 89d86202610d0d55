mod common;

use common::{profile_with, street_profile};
use rstest::rstest;
use skatefit::config::EngineParams;
use skatefit::engine::types::{
    BearingRating, Concave, ContactPatch, Construction, Durometer, HardwareLength, Responsiveness,
    Risers, SetupWeight, Tightness, TruckHeight,
};
use skatefit::engine::{compute, compute_default, Recommendation};
use skatefit::profile::{Experience, RiderProfile, RidingStyle, Terrain};

#[test]
fn test_reference_street_rider() {
    let rec = compute_default(&street_profile());
    let spec = rec.spec().expect("complete profile");

    assert_eq!(spec.deck.width, 8.1);
    assert_eq!(spec.deck.length, 40.0);
    assert_eq!(spec.deck.wheelbase, 26.0);
    assert_eq!(spec.deck.concave, Concave::Medium);
    assert_eq!(spec.deck.construction, Construction::Standard);

    assert_eq!(spec.trucks.width, spec.deck.width);
    assert_eq!(spec.trucks.height, TruckHeight::Low);
    assert_eq!(spec.trucks.tightness, Tightness::Medium);
    assert_eq!(spec.trucks.responsiveness, Responsiveness::Standard);

    assert_eq!(spec.wheels.diameter_mm, 50);
    assert_eq!(spec.wheels.hardness, Durometer(99));
    assert_eq!(spec.wheels.contact_patch, ContactPatch::Narrow);

    assert_eq!(spec.hardware.bearing_rating, BearingRating::Abec5);
    assert_eq!(spec.hardware.risers, Risers::None);
    assert_eq!(spec.hardware.hardware_length, HardwareLength::OneInch);
    assert_eq!(spec.hardware.bushing_durometer, Durometer(91));
    assert_eq!(spec.hardware.setup_weight, SetupWeight::Medium);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(10)]
fn test_heavy_rider_gets_reinforced_deck_and_firm_bushings(#[case] stability: u8) {
    let profile = RiderProfile {
        weight_kg: 110.0,
        stability_preference: Some(stability),
        ..street_profile()
    };
    let rec = compute_default(&profile);
    let spec = rec.spec().unwrap();
    assert_eq!(spec.deck.construction, Construction::Reinforced);
    assert_eq!(spec.hardware.bushing_durometer, Durometer(94));
}

#[rstest]
#[case(Experience::Beginner)]
#[case(Experience::Intermediate)]
#[case(Experience::Comfortable)]
#[case(Experience::Advanced)]
fn test_longboard_is_high_and_abec7(#[case] experience: Experience) {
    let profile = RiderProfile {
        experience: Some(experience),
        ..profile_with(RidingStyle::Longboard, Terrain::Smooth, 70.0)
    };
    let spec = *compute_default(&profile).spec().unwrap();
    assert_eq!(spec.trucks.height, TruckHeight::High);
    assert_eq!(spec.hardware.bearing_rating, BearingRating::Abec7);
}

#[rstest]
#[case::no_height(RiderProfile { height_cm: 0.0, ..street_profile() })]
#[case::no_weight(RiderProfile { weight_kg: 0.0, ..street_profile() })]
#[case::no_shoe(RiderProfile { shoe_size_eu: 0.0, ..street_profile() })]
#[case::negative_height(RiderProfile { height_cm: -170.0, ..street_profile() })]
#[case::nan_weight(RiderProfile { weight_kg: f64::NAN, ..street_profile() })]
#[case::no_experience(RiderProfile { experience: None, ..street_profile() })]
#[case::no_style(RiderProfile { riding_style: None, ..street_profile() })]
#[case::no_terrain(RiderProfile { terrain: None, ..street_profile() })]
#[case::empty(RiderProfile::default())]
fn test_incomplete_profiles(#[case] profile: RiderProfile) {
    assert_eq!(compute_default(&profile), Recommendation::Incomplete);
}

#[test]
fn test_optional_fields_do_not_block_computation() {
    let profile = RiderProfile {
        stability_preference: None,
        flexibility: None,
        board_feel: None,
        ..street_profile()
    };
    assert!(compute_default(&profile).is_complete());
}

#[test]
fn test_compute_is_deterministic() {
    let profile = profile_with(RidingStyle::Cruising, Terrain::Rough, 93.4);
    let params = EngineParams::default();
    let first = compute(&profile, &params);
    for _ in 0..10 {
        assert_eq!(compute(&profile, &params), first);
    }
}

#[test]
fn test_recommendation_json_shape() {
    let complete = serde_json::to_value(compute_default(&street_profile())).unwrap();
    assert_eq!(complete["status"], "complete");
    assert_eq!(complete["spec"]["wheels"]["hardness"], "99A");
    assert_eq!(complete["spec"]["trucks"]["tightness"], "medium");

    let incomplete = serde_json::to_value(compute_default(&RiderProfile::default())).unwrap();
    assert_eq!(incomplete["status"], "incomplete");
}
