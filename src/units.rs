use crate::consts::{CM_PER_FOOT, CM_PER_INCH, KG_PER_LB};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[strum(serialize = "cm")]
    Cm,
    #[strum(serialize = "ft-in")]
    FtIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[strum(serialize = "kg")]
    Kg,
    #[strum(serialize = "lbs")]
    Lbs,
}

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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ShoeRegion {
    Us,
    Uk,
    Eu,
    Cn,
    Jp,
    Br,
}

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
pub enum ShoeGender {
    Men,
    Women,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightInput {
    Centimeters(f64),
    FeetInches { feet: f64, inches: f64 },
}

impl HeightInput {
    /// Builds the height input from the form's unit toggle. `inches` is only
    /// read for feet+inches entry.
    pub fn from_unit(unit: HeightUnit, primary: f64, inches: f64) -> Self {
        match unit {
            HeightUnit::Cm => Self::Centimeters(primary),
            HeightUnit::FtIn => Self::FeetInches {
                feet: primary,
                inches,
            },
        }
    }

    pub fn to_cm(self) -> f64 {
        match self {
            Self::Centimeters(cm) => cm,
            Self::FeetInches { feet, inches } => feet * CM_PER_FOOT + inches * CM_PER_INCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInput {
    Kilograms(f64),
    Pounds(f64),
}

impl WeightInput {
    pub fn from_unit(unit: WeightUnit, value: f64) -> Self {
        match unit {
            WeightUnit::Kg => Self::Kilograms(value),
            WeightUnit::Lbs => Self::Pounds(value),
        }
    }

    pub fn to_kg(self) -> f64 {
        match self {
            Self::Kilograms(kg) => kg,
            Self::Pounds(lbs) => lbs * KG_PER_LB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoeSizeInput {
    pub value: f64,
    pub region: ShoeRegion,
    pub gender: ShoeGender,
}

impl ShoeSizeInput {
    pub fn to_eu(self) -> f64 {
        match eu_offset(self.region, self.gender) {
            Some(offset) => self.value + offset,
            None => {
                trace!(
                    "No EU conversion for {} {}; passing size {} through",
                    self.region,
                    self.gender,
                    self.value
                );
                self.value
            }
        }
    }
}

/// Additive offset from a regional shoe scale to EU.
///
/// Pairs missing from the table have no known conversion and return `None`.
pub fn eu_offset(region: ShoeRegion, gender: ShoeGender) -> Option<f64> {
    use ShoeGender::*;
    use ShoeRegion::*;
    match (region, gender) {
        (Eu, _) => Some(0.0),
        (Us, Men) => Some(32.5),
        (Us, Women) => Some(30.5),
        (Uk, Men) => Some(33.0),
        (Cn, _) | (Jp, _) => Some(-18.0),
        (Br, Men) => Some(4.0),
        (Br, Women) => Some(2.0),
        (Uk, Women) => None,
    }
}

/// Canonical measurements the engine works in. No rounding is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedMeasurements {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub shoe_size_eu: f64,
}

pub fn normalize(
    height: HeightInput,
    weight: WeightInput,
    shoe: ShoeSizeInput,
) -> NormalizedMeasurements {
    NormalizedMeasurements {
        height_cm: height.to_cm(),
        weight_kg: weight.to_kg(),
        shoe_size_eu: shoe.to_eu(),
    }
}

/// Parses a raw form field. Anything that is not a finite, non-negative
/// number reads as zero so it fails the completeness check downstream
/// instead of reaching the engine as NaN.
pub fn parse_measurement(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Splits a height into whole feet and rounded inches for display.
pub fn cm_to_feet_inches(cm: f64) -> (u32, u32) {
    let total_inches = cm / CM_PER_INCH;
    let mut feet = (total_inches / 12.0).floor() as u32;
    let mut inches = (total_inches - feet as f64 * 12.0).round() as u32;
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    (feet, inches)
}
