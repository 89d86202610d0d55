use super::types::{
    BearingRating, DeckSpec, Durometer, HardwareLength, HardwareSpec, Risers, SetupWeight,
    WheelSpec,
};
use crate::consts::{FIRM_BUSHING_KG, HEAVY_RIDER_KG, RISER_CLEARANCE_MM, SOFT_BUSHING_KG};
use crate::profile::{BoardFeel, Experience, Rider, RidingStyle};

// Bolt length follows the riser stack; deck construction does not change it.
pub fn select_hardware(rider: &Rider, _deck: &DeckSpec, wheels: &WheelSpec) -> HardwareSpec {
    let (risers, hardware_length) = select_risers(rider, wheels);

    HardwareSpec {
        bearing_rating: select_bearing(rider),
        hardware_length,
        risers,
        bushing_durometer: select_bushing(rider.weight_kg, rider.stability),
        setup_weight: estimate_setup_weight(rider.board_feel),
    }
}

pub fn select_bearing(rider: &Rider) -> BearingRating {
    let speed_style = matches!(
        rider.riding_style,
        RidingStyle::Longboard | RidingStyle::Cruising
    );
    let experienced = matches!(
        rider.experience,
        Experience::Comfortable | Experience::Advanced
    );
    let light_feel = rider.board_feel == Some(BoardFeel::Light);

    if speed_style || experienced || light_feel {
        BearingRating::Abec7
    } else {
        BearingRating::Abec5
    }
}

/// First matching rule wins.
pub fn select_risers(rider: &Rider, wheels: &WheelSpec) -> (Risers, HardwareLength) {
    if wheels.diameter_mm > RISER_CLEARANCE_MM {
        (Risers::StandardEighth, HardwareLength::OneAndQuarter)
    } else if rider.board_feel == Some(BoardFeel::Durable) || rider.weight_kg > HEAVY_RIDER_KG {
        (Risers::HardEighth, HardwareLength::OneAndQuarter)
    } else if rider.board_feel == Some(BoardFeel::Grippy) {
        (Risers::SoftSixteenth, HardwareLength::OneAndEighth)
    } else {
        (Risers::None, HardwareLength::OneInch)
    }
}

pub fn select_bushing(weight_kg: f64, stability: u8) -> Durometer {
    if weight_kg > FIRM_BUSHING_KG || stability <= 3 {
        Durometer(94)
    } else if weight_kg < SOFT_BUSHING_KG && stability >= 7 {
        Durometer(87)
    } else {
        Durometer(91)
    }
}

pub fn estimate_setup_weight(board_feel: Option<BoardFeel>) -> SetupWeight {
    match board_feel {
        Some(BoardFeel::Light) => SetupWeight::Light,
        Some(BoardFeel::Durable) => SetupWeight::Heavy,
        Some(BoardFeel::Grippy) | None => SetupWeight::Medium,
    }
}
