use crate::consts::{DEFAULT_STABILITY, STABILITY_MAX, STABILITY_MIN};
use crate::error::{SfResult, SkateFitError};
use crate::units::NormalizedMeasurements;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

macro_rules! rider_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ValueEnum,
            Serialize,
            Deserialize,
            EnumIter,
            EnumString,
            Display,
        )]
        #[serde(rename_all = "snake_case")]
        #[strum(serialize_all = "snake_case", ascii_case_insensitive)]
        pub enum $name {
            $($variant),+
        }
    };
}

rider_enum!(Experience {
    Beginner,
    Intermediate,
    Comfortable,
    Advanced,
});

rider_enum!(RidingStyle {
    Street,
    Park,
    Cruising,
    Longboard,
    Mixed,
});

rider_enum!(Terrain { Smooth, Rough, Mixed });

rider_enum!(
    /// How far the rider's ankles and knees comfortably flex.
    Flexibility { Low, Medium, High }
);

rider_enum!(
    /// What the rider wants the board to feel like underfoot.
    BoardFeel { Light, Durable, Grippy }
);

/// Raw rider input as collected from the form.
///
/// Every field may be missing; [`RiderProfile::to_rider`] decides whether
/// there is enough to compute a recommendation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub shoe_size_eu: f64,
    pub experience: Option<Experience>,
    pub riding_style: Option<RidingStyle>,
    pub terrain: Option<Terrain>,
    pub stability_preference: Option<u8>,
    pub flexibility: Option<Flexibility>,
    pub board_feel: Option<BoardFeel>,
}

impl RiderProfile {
    pub fn from_measurements(m: NormalizedMeasurements) -> Self {
        Self {
            height_cm: m.height_cm,
            weight_kg: m.weight_kg,
            shoe_size_eu: m.shoe_size_eu,
            ..Default::default()
        }
    }

    /// Loads a saved profile. Zero measurements mean "not entered yet";
    /// negative ones are rejected.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&content)?;

        for (name, value) in [
            ("height_cm", profile.height_cm),
            ("weight_kg", profile.weight_kg),
            ("shoe_size_eu", profile.shoe_size_eu),
        ] {
            if value < 0.0 {
                return Err(SkateFitError::Validation(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(profile)
    }

    pub fn is_complete(&self) -> bool {
        is_positive(self.height_cm)
            && is_positive(self.weight_kg)
            && is_positive(self.shoe_size_eu)
            && self.experience.is_some()
            && self.riding_style.is_some()
            && self.terrain.is_some()
    }

    /// Validates the profile. Returns `None` when a required field is missing.
    pub fn to_rider(&self) -> Option<Rider> {
        if !self.is_complete() {
            return None;
        }

        let raw = self.stability_preference.unwrap_or(DEFAULT_STABILITY);
        let stability = raw.clamp(STABILITY_MIN, STABILITY_MAX);
        if stability != raw {
            warn!("Stability preference {} clamped to {}", raw, stability);
        }

        Some(Rider {
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            shoe_size_eu: self.shoe_size_eu,
            experience: self.experience?,
            riding_style: self.riding_style?,
            terrain: self.terrain?,
            stability,
            flexibility: self.flexibility,
            board_feel: self.board_feel,
        })
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// A complete, validated rider. All selectors take this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub shoe_size_eu: f64,
    pub experience: Experience,
    pub riding_style: RidingStyle,
    pub terrain: Terrain,
    /// 1 (maneuverable) ..= 10 (stable)
    pub stability: u8,
    pub flexibility: Option<Flexibility>,
    pub board_feel: Option<BoardFeel>,
}
