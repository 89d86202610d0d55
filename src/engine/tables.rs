//! Categorical lookup tables used by the selectors.
//!
//! Each table is a total function over its key enum so every rule can be
//! audited and tested on its own.

use super::types::{Responsiveness, Tightness, TruckHeight};
use crate::profile::{BoardFeel, Experience, RidingStyle};

/// Deck width by EU shoe size, 35 through 50.
pub const SHOE_WIDTH_TABLE: [(u8, f64); 16] = [
    (35, 7.5),
    (36, 7.6),
    (37, 7.7),
    (38, 7.8),
    (39, 7.9),
    (40, 8.0),
    (41, 8.1),
    (42, 8.2),
    (43, 8.3),
    (44, 8.4),
    (45, 8.5),
    (46, 8.6),
    (47, 8.7),
    (48, 8.8),
    (49, 8.9),
    (50, 9.0),
];

/// Base width for an EU shoe size rounded to the nearest whole size.
pub fn shoe_width(shoe_size_eu: f64) -> Option<f64> {
    let size = shoe_size_eu.round();
    SHOE_WIDTH_TABLE
        .iter()
        .find(|(eu, _)| *eu as f64 == size)
        .map(|(_, width)| *width)
}

pub fn style_width_adjustment(style: RidingStyle) -> f64 {
    match style {
        RidingStyle::Street => -0.1,
        RidingStyle::Park => 0.1,
        RidingStyle::Cruising => 0.2,
        RidingStyle::Longboard => 0.5,
        RidingStyle::Mixed => 0.0,
    }
}

pub fn experience_width_adjustment(experience: Experience) -> f64 {
    match experience {
        Experience::Beginner => 0.2,
        Experience::Intermediate => 0.0,
        Experience::Comfortable => 0.05,
        Experience::Advanced => -0.1,
    }
}

/// Inches added to the height-derived deck length.
pub fn style_length_offset(style: RidingStyle) -> f64 {
    match style {
        RidingStyle::Street => -2.0,
        RidingStyle::Park => 0.0,
        RidingStyle::Cruising => 3.0,
        RidingStyle::Longboard => 15.0,
        RidingStyle::Mixed => 1.0,
    }
}

/// Banded sizing: `(wheelbase, length offset over wheelbase)` in inches.
pub fn style_wheelbase_band(style: RidingStyle) -> (f64, f64) {
    match style {
        RidingStyle::Street => (13.5, 18.0),
        RidingStyle::Park | RidingStyle::Mixed => (14.25, 18.0),
        RidingStyle::Cruising | RidingStyle::Longboard => (15.0, 20.0),
    }
}

pub fn style_truck_height(style: RidingStyle) -> TruckHeight {
    match style {
        RidingStyle::Street => TruckHeight::Low,
        RidingStyle::Cruising | RidingStyle::Longboard => TruckHeight::High,
        RidingStyle::Park | RidingStyle::Mixed => TruckHeight::Mid,
    }
}

/// Tighter trucks turn less readily, so responsiveness runs the other way.
pub fn tightness_responsiveness(tightness: Tightness) -> Responsiveness {
    match tightness {
        Tightness::Loose => Responsiveness::High,
        Tightness::MediumLoose => Responsiveness::Responsive,
        Tightness::Medium => Responsiveness::Standard,
        Tightness::MediumTight => Responsiveness::Controlled,
        Tightness::Tight => Responsiveness::Smooth,
    }
}

pub fn style_base_diameter(style: RidingStyle) -> i32 {
    match style {
        RidingStyle::Street => 52,
        RidingStyle::Park => 56,
        RidingStyle::Cruising => 60,
        RidingStyle::Longboard => 70,
        RidingStyle::Mixed => 55,
    }
}

pub fn style_base_hardness(style: RidingStyle) -> i32 {
    match style {
        RidingStyle::Street => 99,
        RidingStyle::Park => 97,
        RidingStyle::Cruising => 85,
        RidingStyle::Longboard => 80,
        RidingStyle::Mixed => 92,
    }
}

pub fn board_feel_diameter_adjustment(feel: BoardFeel, diameter: i32) -> i32 {
    match feel {
        BoardFeel::Light => -2,
        BoardFeel::Grippy if diameter < 56 => 2,
        BoardFeel::Grippy | BoardFeel::Durable => 0,
    }
}
