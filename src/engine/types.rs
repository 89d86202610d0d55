use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Concave {
    Mellow,
    Medium,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Construction {
    #[strum(to_string = "7-ply Maple")]
    Standard,
    #[strum(to_string = "8-ply Maple + Fiberglass Laminate")]
    Reinforced,
    #[strum(to_string = "7-ply Maple + Grip Enhancement")]
    GripEnhanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// inches
    pub width: f64,
    /// inches
    pub length: f64,
    /// inches
    pub wheelbase: f64,
    pub concave: Concave,
    pub construction: Construction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum TruckHeight {
    Low,
    Mid,
    High,
}

/// Five-point tightness scale, ordered loosest to tightest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Tightness {
    Loose,
    #[strum(to_string = "Medium-Loose")]
    MediumLoose,
    Medium,
    #[strum(to_string = "Medium-Tight")]
    MediumTight,
    Tight,
}

impl Tightness {
    pub fn looser(self) -> Self {
        match self {
            Self::Loose | Self::MediumLoose => Self::Loose,
            Self::Medium => Self::MediumLoose,
            Self::MediumTight => Self::Medium,
            Self::Tight => Self::MediumTight,
        }
    }
}

/// Ordered calmest to liveliest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Responsiveness {
    Smooth,
    Controlled,
    Standard,
    Responsive,
    High,
}

impl Responsiveness {
    /// One step closer to `Standard`; `Standard` stays put.
    pub fn toward_standard(self) -> Self {
        match self {
            Self::Smooth => Self::Controlled,
            Self::Controlled | Self::Standard | Self::Responsive => Self::Standard,
            Self::High => Self::Responsive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    /// inches, always equal to the deck width
    pub width: f64,
    pub height: TruckHeight,
    pub tightness: Tightness,
    pub responsiveness: Responsiveness,
}

/// Shore A hardness, printed and serialized as `"99A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Durometer(pub u8);

impl Durometer {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Durometer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A", self.0)
    }
}

impl FromStr for Durometer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches(['A', 'a']);
        digits
            .parse::<u8>()
            .map(Durometer)
            .map_err(|_| format!("Invalid durometer '{}'", s))
    }
}

impl Serialize for Durometer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Durometer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ContactPatch {
    Narrow,
    Medium,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSpec {
    pub diameter_mm: u32,
    pub hardness: Durometer,
    pub contact_patch: ContactPatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum BearingRating {
    #[strum(to_string = "ABEC 5")]
    Abec5,
    #[strum(to_string = "ABEC 7")]
    Abec7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Risers {
    #[strum(to_string = "None")]
    None,
    #[strum(to_string = "1/16\" Soft Risers")]
    SoftSixteenth,
    #[strum(to_string = "1/8\" Hard Risers")]
    HardEighth,
    #[strum(to_string = "1/8\" Standard Risers")]
    StandardEighth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum HardwareLength {
    #[strum(to_string = "1\"")]
    OneInch,
    #[strum(to_string = "1.125\"")]
    OneAndEighth,
    #[strum(to_string = "1.25\"")]
    OneAndQuarter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SetupWeight {
    #[strum(to_string = "Light (6-7 lbs)")]
    Light,
    #[strum(to_string = "Medium (7-8 lbs)")]
    Medium,
    #[strum(to_string = "Heavy (8-9 lbs)")]
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareSpec {
    pub bearing_rating: BearingRating,
    pub hardware_length: HardwareLength,
    pub risers: Risers,
    pub bushing_durometer: Durometer,
    pub setup_weight: SetupWeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSpec {
    pub deck: DeckSpec,
    pub trucks: TruckSpec,
    pub wheels: WheelSpec,
    pub hardware: HardwareSpec,
}
