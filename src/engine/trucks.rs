use super::tables;
use super::types::{DeckSpec, Responsiveness, Tightness, TruckSpec};
use crate::config::TightnessRule;
use crate::profile::{BoardFeel, Experience, Flexibility, Rider, RidingStyle};

pub fn select_trucks(rider: &Rider, deck: &DeckSpec, rule: TightnessRule) -> TruckSpec {
    let base = match rule {
        TightnessRule::ResponseLevel => response_level_tightness(rider.stability),
        TightnessRule::WeightBand => weight_band_tightness(rider.weight_kg, rider.stability),
    };
    let tightness = correct_for_experience(base, rider.experience, rider.stability);

    TruckSpec {
        // Axles only sit flush when the hanger matches the deck.
        width: deck.width,
        height: tables::style_truck_height(rider.riding_style),
        tightness,
        responsiveness: select_responsiveness(
            tightness,
            rider.flexibility,
            rider.board_feel,
            rider.riding_style,
        ),
    }
}

pub fn response_level_tightness(stability: u8) -> Tightness {
    let response_level = 11 - stability.min(10) as i32;
    match response_level {
        i32::MIN..=3 => Tightness::Loose,
        4..=5 => Tightness::MediumLoose,
        6..=7 => Tightness::Medium,
        8..=9 => Tightness::MediumTight,
        _ => Tightness::Tight,
    }
}

pub fn weight_band_tightness(weight_kg: f64, stability: u8) -> Tightness {
    if weight_kg > 80.0 {
        if stability > 6 {
            Tightness::MediumTight
        } else {
            Tightness::Tight
        }
    } else if weight_kg < 60.0 {
        if stability < 4 {
            Tightness::Loose
        } else {
            Tightness::MediumLoose
        }
    } else if stability > 7 {
        Tightness::MediumTight
    } else if stability < 3 {
        Tightness::MediumLoose
    } else {
        Tightness::Medium
    }
}

fn correct_for_experience(
    tightness: Tightness,
    experience: Experience,
    stability: u8,
) -> Tightness {
    match experience {
        Experience::Beginner => tightness.max(Tightness::Medium),
        Experience::Advanced if tightness == Tightness::Medium && stability < 5 => {
            tightness.looser()
        }
        _ => tightness,
    }
}

pub fn select_responsiveness(
    tightness: Tightness,
    flexibility: Option<Flexibility>,
    board_feel: Option<BoardFeel>,
    style: RidingStyle,
) -> Responsiveness {
    let mut responsiveness = match flexibility {
        Some(Flexibility::Low) => Responsiveness::Smooth,
        Some(Flexibility::High) => Responsiveness::High,
        Some(Flexibility::Medium) | None => tables::tightness_responsiveness(tightness),
    };

    if board_feel == Some(BoardFeel::Durable) || style == RidingStyle::Longboard {
        responsiveness = responsiveness.toward_standard();
    }
    responsiveness
}
