use super::tables;
use super::types::{ContactPatch, Durometer, WheelSpec};
use crate::consts::{HARDNESS_MAX, HARDNESS_MIN, LIGHT_RIDER_KG, LOAD_NOTE_KG};
use crate::profile::{BoardFeel, Rider, Terrain};

pub fn select_wheels(rider: &Rider) -> WheelSpec {
    let diameter = wheel_diameter(rider);
    WheelSpec {
        diameter_mm: diameter,
        hardness: wheel_hardness(rider),
        contact_patch: contact_patch(diameter),
    }
}

pub fn wheel_diameter(rider: &Rider) -> u32 {
    let mut diameter = tables::style_base_diameter(rider.riding_style);

    diameter += match rider.terrain {
        Terrain::Rough => 4,
        Terrain::Smooth => -2,
        Terrain::Mixed => 0,
    };

    if let Some(feel) = rider.board_feel {
        diameter += tables::board_feel_diameter_adjustment(feel, diameter);
    }

    diameter.max(0) as u32
}

pub fn wheel_hardness(rider: &Rider) -> Durometer {
    let mut hardness = tables::style_base_hardness(rider.riding_style);

    if rider.terrain == Terrain::Rough {
        hardness -= 5;
    }
    if rider.weight_kg > LOAD_NOTE_KG {
        hardness += 2;
    } else if rider.weight_kg < LIGHT_RIDER_KG {
        hardness -= 2;
    }

    hardness = match rider.board_feel {
        Some(BoardFeel::Light) => hardness + 2,
        Some(BoardFeel::Grippy) => hardness - 5,
        Some(BoardFeel::Durable) => hardness.clamp(95, 99),
        None => hardness,
    };

    Durometer(hardness.clamp(HARDNESS_MIN, HARDNESS_MAX) as u8)
}

pub fn contact_patch(diameter_mm: u32) -> ContactPatch {
    if diameter_mm < 60 {
        ContactPatch::Narrow
    } else if diameter_mm < 65 {
        ContactPatch::Medium
    } else {
        ContactPatch::Wide
    }
}
