use super::tables;
use super::types::{Concave, Construction, DeckSpec};
use crate::config::DeckStrategy;
use crate::consts::{
    BANDED_WIDTH_MAX, BANDED_WIDTH_MIN, DEFAULT_DECK_WIDTH, DEFAULT_STABILITY, HEAVY_RIDER_KG,
};
use crate::profile::{BoardFeel, Flexibility, Rider, RidingStyle};
use crate::units::{eu_offset, ShoeGender, ShoeRegion};
use crate::util::{round_eighth, round_tenth};
use tracing::trace;

pub fn size_deck(rider: &Rider, strategy: DeckStrategy) -> DeckSpec {
    let (width, length, wheelbase) = match strategy {
        DeckStrategy::Continuous => continuous_dimensions(rider),
        DeckStrategy::Banded => banded_dimensions(rider),
    };

    DeckSpec {
        width,
        length,
        wheelbase,
        concave: select_concave(rider.flexibility, rider.riding_style),
        construction: select_construction(rider.board_feel, rider.weight_kg),
    }
}

/// Width in inches before style/experience adjustments.
pub fn continuous_base_width(shoe_size_eu: f64) -> f64 {
    tables::shoe_width(shoe_size_eu).unwrap_or_else(|| {
        trace!(
            "Shoe size {} outside sizing table, using {}\"",
            shoe_size_eu,
            DEFAULT_DECK_WIDTH
        );
        DEFAULT_DECK_WIDTH
    })
}

fn continuous_dimensions(rider: &Rider) -> (f64, f64, f64) {
    let width = continuous_base_width(rider.shoe_size_eu)
        + tables::style_width_adjustment(rider.riding_style)
        + tables::experience_width_adjustment(rider.experience);

    let length = rider.height_cm * 0.18 + 10.0 + tables::style_length_offset(rider.riding_style);

    // Taken from the unrounded length.
    let stability_shift = (rider.stability as f64 - DEFAULT_STABILITY as f64) * 0.5;
    let wheelbase = length * 0.65 + stability_shift;

    (round_tenth(width), round_tenth(length), round_tenth(wheelbase))
}

fn banded_dimensions(rider: &Rider) -> (f64, f64, f64) {
    let us_offset = eu_offset(ShoeRegion::Us, ShoeGender::Men).unwrap_or(0.0);
    let us_size = rider.shoe_size_eu - us_offset;

    let mut width = if us_size < 8.0 {
        7.875
    } else if us_size < 10.0 {
        8.25
    } else {
        9.0
    };

    if rider.height_cm > 180.0 {
        width += 0.5;
    } else if rider.height_cm >= 163.0 {
        width += 0.25;
    }

    width += tables::style_width_adjustment(rider.riding_style);
    let width = round_eighth(width.clamp(BANDED_WIDTH_MIN, BANDED_WIDTH_MAX));

    // Band wheelbases are exact; only width is rounded.
    let (wheelbase, length_offset) = tables::style_wheelbase_band(rider.riding_style);
    (width, wheelbase + length_offset, wheelbase)
}

pub fn select_concave(flexibility: Option<Flexibility>, style: RidingStyle) -> Concave {
    let from_flex = match flexibility {
        Some(Flexibility::Low) => Concave::Mellow,
        Some(Flexibility::Medium) | None => Concave::Medium,
        Some(Flexibility::High) => Concave::Deep,
    };

    match style {
        RidingStyle::Street if from_flex == Concave::Mellow => Concave::Medium,
        RidingStyle::Cruising => Concave::Mellow,
        _ => from_flex,
    }
}

pub fn select_construction(board_feel: Option<BoardFeel>, weight_kg: f64) -> Construction {
    if weight_kg > HEAVY_RIDER_KG {
        return Construction::Reinforced;
    }
    match board_feel {
        Some(BoardFeel::Light) | None => Construction::Standard,
        Some(BoardFeel::Durable) => Construction::Reinforced,
        Some(BoardFeel::Grippy) => Construction::GripEnhanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_raises_mellow_concave() {
        assert_eq!(
            select_concave(Some(Flexibility::Low), RidingStyle::Street),
            Concave::Medium
        );
        assert_eq!(
            select_concave(Some(Flexibility::High), RidingStyle::Street),
            Concave::Deep
        );
    }

    #[test]
    fn cruising_is_always_mellow() {
        assert_eq!(
            select_concave(Some(Flexibility::High), RidingStyle::Cruising),
            Concave::Mellow
        );
    }

    #[test]
    fn heavy_rider_overrides_board_feel() {
        assert_eq!(
            select_construction(Some(BoardFeel::Light), 101.0),
            Construction::Reinforced
        );
        assert_eq!(
            select_construction(Some(BoardFeel::Grippy), 100.0),
            Construction::GripEnhanced
        );
    }
}
