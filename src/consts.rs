/// Centimeters per foot.
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453592;

/// Stability preference assumed when the rider leaves the slider untouched.
pub const DEFAULT_STABILITY: u8 = 5;

/// Valid stability preference range (1 = maneuverable, 10 = stable).
pub const STABILITY_MIN: u8 = 1;
pub const STABILITY_MAX: u8 = 10;

/// Riders above this weight always get reinforced decks and hard risers.
pub const HEAVY_RIDER_KG: f64 = 100.0;

/// Above this weight wheels run harder and the load note is emitted.
pub const LOAD_NOTE_KG: f64 = 80.0;

/// Below this weight wheels run softer.
pub const LIGHT_RIDER_KG: f64 = 60.0;

/// Bushing bands.
pub const FIRM_BUSHING_KG: f64 = 90.0;
pub const SOFT_BUSHING_KG: f64 = 60.0;

/// Deck width used when the shoe size falls outside the sizing table.
pub const DEFAULT_DECK_WIDTH: f64 = 8.0;

/// Banded deck width limits.
pub const BANDED_WIDTH_MIN: f64 = 7.75;
pub const BANDED_WIDTH_MAX: f64 = 10.0;

/// Wheel hardness limits (durometer A scale).
pub const HARDNESS_MIN: i32 = 78;
pub const HARDNESS_MAX: i32 = 101;

/// Wheels larger than this need risers for clearance.
pub const RISER_CLEARANCE_MM: u32 = 56;
