use crate::profile::{BoardFeel, Experience, Flexibility, RiderProfile, RidingStyle, Terrain};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Reference riders used for the preset comparison report.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum RiderPreset {
    StreetBeginner,
    StreetTech,
    ParkRegular,
    CampusCruiser,
    DownhillLongboard,
    HeavyCommuter,
    YouthAllRounder,
}

impl RiderPreset {
    pub fn profile(&self) -> RiderProfile {
        let base = |height_cm, weight_kg, shoe_size_eu| RiderProfile {
            height_cm,
            weight_kg,
            shoe_size_eu,
            ..Default::default()
        };

        match self {
            Self::StreetBeginner => RiderProfile {
                experience: Some(Experience::Beginner),
                riding_style: Some(RidingStyle::Street),
                terrain: Some(Terrain::Smooth),
                stability_preference: Some(7),
                ..base(170.0, 62.0, 41.0)
            },
            Self::StreetTech => RiderProfile {
                experience: Some(Experience::Advanced),
                riding_style: Some(RidingStyle::Street),
                terrain: Some(Terrain::Smooth),
                stability_preference: Some(3),
                flexibility: Some(Flexibility::High),
                board_feel: Some(BoardFeel::Light),
                ..base(177.8, 72.0, 43.0)
            },
            Self::ParkRegular => RiderProfile {
                experience: Some(Experience::Comfortable),
                riding_style: Some(RidingStyle::Park),
                terrain: Some(Terrain::Mixed),
                stability_preference: Some(5),
                flexibility: Some(Flexibility::Medium),
                ..base(182.0, 78.0, 44.0)
            },
            Self::CampusCruiser => RiderProfile {
                experience: Some(Experience::Intermediate),
                riding_style: Some(RidingStyle::Cruising),
                terrain: Some(Terrain::Rough),
                stability_preference: Some(6),
                board_feel: Some(BoardFeel::Grippy),
                ..base(165.0, 58.0, 38.0)
            },
            Self::DownhillLongboard => RiderProfile {
                experience: Some(Experience::Advanced),
                riding_style: Some(RidingStyle::Longboard),
                terrain: Some(Terrain::Smooth),
                stability_preference: Some(9),
                flexibility: Some(Flexibility::Low),
                ..base(185.0, 85.0, 45.0)
            },
            Self::HeavyCommuter => RiderProfile {
                experience: Some(Experience::Beginner),
                riding_style: Some(RidingStyle::Mixed),
                terrain: Some(Terrain::Rough),
                stability_preference: Some(8),
                board_feel: Some(BoardFeel::Durable),
                ..base(188.0, 110.0, 47.0)
            },
            Self::YouthAllRounder => RiderProfile {
                experience: Some(Experience::Beginner),
                riding_style: Some(RidingStyle::Mixed),
                terrain: Some(Terrain::Mixed),
                stability_preference: Some(5),
                ..base(148.0, 42.0, 36.0)
            },
        }
    }
}

/// All presets in declaration order.
pub fn get_all_presets() -> Vec<(RiderPreset, RiderProfile)> {
    RiderPreset::iter().map(|p| (p, p.profile())).collect()
}
