#![allow(dead_code)]

use skatefit::profile::{Experience, Rider, RiderProfile, RidingStyle, Terrain};

/// 5'10", 176 lbs, US 9 men's, intermediate street skater.
pub fn street_profile() -> RiderProfile {
    RiderProfile {
        height_cm: 177.8,
        weight_kg: 79.8,
        shoe_size_eu: 42.0,
        experience: Some(Experience::Intermediate),
        riding_style: Some(RidingStyle::Street),
        terrain: Some(Terrain::Smooth),
        stability_preference: Some(5),
        flexibility: None,
        board_feel: None,
    }
}

pub fn profile_with(style: RidingStyle, terrain: Terrain, weight_kg: f64) -> RiderProfile {
    RiderProfile {
        riding_style: Some(style),
        terrain: Some(terrain),
        weight_kg,
        ..street_profile()
    }
}

pub fn rider(profile: &RiderProfile) -> Rider {
    profile.to_rider().expect("test profile should be complete")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
