pub mod deck;
pub mod hardware;
pub mod tables;
pub mod trucks;
pub mod types;
pub mod wheels;

pub use self::types::{DeckSpec, EquipmentSpec, HardwareSpec, TruckSpec, WheelSpec};
use crate::config::EngineParams;
use crate::profile::{Rider, RiderProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a computation. `Incomplete` means the form does not hold enough
/// input yet; callers show a placeholder, never a stale spec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "spec", rename_all = "snake_case")]
pub enum Recommendation {
    Complete(EquipmentSpec),
    Incomplete,
}

impl Recommendation {
    pub fn spec(&self) -> Option<&EquipmentSpec> {
        match self {
            Self::Complete(spec) => Some(spec),
            Self::Incomplete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

pub fn compute(profile: &RiderProfile, params: &EngineParams) -> Recommendation {
    match profile.to_rider() {
        Some(rider) => Recommendation::Complete(build_spec(&rider, params)),
        None => {
            debug!("Profile incomplete, skipping computation");
            Recommendation::Incomplete
        }
    }
}

pub fn compute_default(profile: &RiderProfile) -> Recommendation {
    compute(profile, &EngineParams::default())
}

/// Runs the selector pipeline for a validated rider.
pub fn build_spec(rider: &Rider, params: &EngineParams) -> EquipmentSpec {
    let deck = deck::size_deck(rider, params.deck_strategy);
    debug!(
        "Deck ({}): {}\" x {}\", wheelbase {}\", {} concave",
        params.deck_strategy, deck.width, deck.length, deck.wheelbase, deck.concave
    );

    let trucks = trucks::select_trucks(rider, &deck, params.tightness_rule);
    debug!(
        "Trucks: {} height, {} ({})",
        trucks.height, trucks.tightness, trucks.responsiveness
    );

    let wheels = wheels::select_wheels(rider);
    debug!(
        "Wheels: {}mm {} {}",
        wheels.diameter_mm, wheels.hardness, wheels.contact_patch
    );

    let hardware = hardware::select_hardware(rider, &deck, &wheels);
    debug!(
        "Hardware: {}, risers {}, bolts {}, bushings {}",
        hardware.bearing_rating,
        hardware.risers,
        hardware.hardware_length,
        hardware.bushing_durometer
    );

    EquipmentSpec {
        deck,
        trucks,
        wheels,
        hardware,
    }
}
