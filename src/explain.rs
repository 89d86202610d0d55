//! Presentation-ready text for a computed spec.
//!
//! Pure templating over the same enums the selectors use; nothing here
//! changes a recommendation.

use crate::consts::LOAD_NOTE_KG;
use crate::engine::types::{Concave, Construction, Responsiveness, Risers};
use crate::engine::EquipmentSpec;
use crate::profile::{BoardFeel, Experience, Flexibility, Rider, RidingStyle};
use crate::units::{cm_to_feet_inches, kg_to_lbs};
use crate::util::format_inches;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    #[strum(to_string = "Center of Gravity")]
    CenterOfGravity,
    #[strum(to_string = "Rotational Physics")]
    RotationalPhysics,
    #[strum(to_string = "Rolling Dynamics")]
    RollingDynamics,
    #[strum(to_string = "Load Distribution")]
    LoadDistribution,
    Biomechanics,
    Experience,
    Flexibility,
    #[strum(to_string = "Board Feel")]
    BoardFeel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationFragment {
    pub topic: Topic,
    pub label: String,
    pub text: String,
}

impl ExplanationFragment {
    fn new(topic: Topic, text: String) -> Self {
        Self {
            topic,
            label: topic.to_string(),
            text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Deck,
    Trucks,
    Wheels,
    Hardware,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentNote {
    pub component: Component,
    pub text: String,
}

/// Builds the narrative in its fixed order. Load, flexibility and board-feel
/// fragments only appear when they apply.
pub fn explain(rider: &Rider, spec: &EquipmentSpec) -> Vec<ExplanationFragment> {
    let mut out = Vec::with_capacity(8);

    out.push(ExplanationFragment::new(
        Topic::CenterOfGravity,
        format!(
            "Your {} deck width lowers your center of gravity relative to your shoe size, \
             improving balance and control. {}",
            format_inches(spec.deck.width),
            concave_text(spec.deck.concave)
        ),
    ));

    out.push(ExplanationFragment::new(
        Topic::RotationalPhysics,
        format!(
            "The {} wheelbase creates optimal moment of inertia - longer for stability, \
             shorter for quick turns. {} trucks: {}",
            format_inches(spec.deck.wheelbase),
            spec.trucks.tightness,
            responsiveness_text(spec.trucks.responsiveness)
        ),
    ));

    out.push(ExplanationFragment::new(
        Topic::RollingDynamics,
        format!(
            "{}mm wheels with {} hardness minimize rolling resistance while maximizing grip \
             for {} terrain.",
            spec.wheels.diameter_mm, spec.wheels.hardness, rider.terrain
        ),
    ));

    if rider.weight_kg > LOAD_NOTE_KG {
        out.push(ExplanationFragment::new(
            Topic::LoadDistribution,
            format!(
                "Your weight ({:.1}kg / {:.0} lbs) requires {} trucks to maintain proper load \
                 distribution and prevent speed wobbles.",
                rider.weight_kg,
                kg_to_lbs(rider.weight_kg),
                spec.trucks.tightness.to_string().to_lowercase()
            ),
        ));
    }

    let (feet, inches) = cm_to_feet_inches(rider.height_cm);
    out.push(ExplanationFragment::new(
        Topic::Biomechanics,
        format!(
            "Setup optimized for your height ({:.1}cm / {}'{}\") ensures natural stance width \
             and efficient power transfer.",
            rider.height_cm, feet, inches
        ),
    ));

    out.push(ExplanationFragment::new(
        Topic::Experience,
        experience_text(rider.experience).to_string(),
    ));

    if let Some(flex) = rider.flexibility {
        out.push(ExplanationFragment::new(
            Topic::Flexibility,
            format!(
                "{} Your setup uses a {} concave with {} truck response.",
                flexibility_text(flex),
                spec.deck.concave.to_string().to_lowercase(),
                spec.trucks.responsiveness.to_string().to_lowercase()
            ),
        ));
    }

    if let Some(feel) = rider.board_feel {
        out.push(ExplanationFragment::new(
            Topic::BoardFeel,
            format!(
                "{} Construction: {}, {}, estimated setup weight {}.",
                board_feel_text(feel),
                spec.deck.construction,
                risers_text(spec.hardware.risers),
                spec.hardware.setup_weight
            ),
        ));
    }

    out
}

/// One short paragraph per component card.
pub fn component_notes(rider: &Rider, spec: &EquipmentSpec) -> Vec<ComponentNote> {
    let deck = &spec.deck;
    let mut deck_text = format!(
        "Width {} matches your shoe size for optimal foot placement. ",
        format_inches(deck.width)
    );
    match rider.riding_style {
        RidingStyle::Street => deck_text
            .push_str("Narrower deck chosen for easier flip tricks and technical maneuvers."),
        RidingStyle::Cruising => {
            deck_text.push_str("Wider deck provides more stability and comfort for cruising.")
        }
        _ => deck_text.push_str(&format!(
            "Length {} provides good balance for your height and riding style.",
            format_inches(deck.length)
        )),
    }
    if deck.construction == Construction::Reinforced {
        deck_text.push_str(" Reinforced layup carries the extra load without losing pop.");
    }

    let trucks_text = format!(
        "{} trucks chosen for your riding style. {} tightness recommended based on your weight \
         ({:.1}kg) and stability preference.",
        spec.trucks.height, spec.trucks.tightness, rider.weight_kg
    );

    let wheels_text = format!(
        "{}mm wheels balance speed and maneuverability for {}. {} hardness provides optimal \
         grip for {} terrain.",
        spec.wheels.diameter_mm, rider.riding_style, spec.wheels.hardness, rider.terrain
    );

    let hw = &spec.hardware;
    let mut hardware_text = format!(
        "{} bearings provide good performance for your riding style. {} hardware ensures \
         proper assembly",
        hw.bearing_rating, hw.hardware_length
    );
    if hw.risers == Risers::None {
        hardware_text.push_str(" without risers.");
    } else {
        hardware_text.push_str(&format!(" with {}.", hw.risers));
    }
    hardware_text.push_str(&format!(" {} bushings.", hw.bushing_durometer));

    vec![
        ComponentNote {
            component: Component::Deck,
            text: deck_text,
        },
        ComponentNote {
            component: Component::Trucks,
            text: trucks_text,
        },
        ComponentNote {
            component: Component::Wheels,
            text: wheels_text,
        },
        ComponentNote {
            component: Component::Hardware,
            text: hardware_text,
        },
    ]
}

fn concave_text(concave: Concave) -> &'static str {
    match concave {
        Concave::Mellow => {
            "A mellow concave keeps the surface flat and forgiving for relaxed foot placement."
        }
        Concave::Medium => {
            "A medium concave gives your feet a defined pocket without locking them in."
        }
        Concave::Deep => {
            "A deep concave wraps your feet for sharp board feedback and locked-in flicks."
        }
    }
}

fn responsiveness_text(r: Responsiveness) -> &'static str {
    match r {
        Responsiveness::Smooth => "smooth, damped steering that holds a line at speed.",
        Responsiveness::Controlled => "controlled steering that resists twitchy input.",
        Responsiveness::Standard => "standard steering that balances carving and stability.",
        Responsiveness::Responsive => "responsive steering that answers small weight shifts.",
        Responsiveness::High => "highly responsive steering for tight, quick turns.",
    }
}

fn experience_text(e: Experience) -> &'static str {
    match e {
        Experience::Beginner => {
            "As a beginner, the extra width and firmer trucks give you a stable platform \
             while you build balance."
        }
        Experience::Intermediate => {
            "At an intermediate level, the setup stays neutral so you can progress in any \
             direction."
        }
        Experience::Comfortable => {
            "Since you are comfortable on a board, the setup leans toward speed and precision."
        }
        Experience::Advanced => {
            "As an advanced rider, the narrower sizing and looser trucks trade forgiveness for \
             control."
        }
    }
}

fn flexibility_text(f: Flexibility) -> &'static str {
    match f {
        Flexibility::Low => {
            "With limited flexibility, the board should ease strain on ankles and knees."
        }
        Flexibility::Medium => "Average flexibility works with a balanced foot pocket.",
        Flexibility::High => "High flexibility lets you take more feedback through your feet.",
    }
}

fn board_feel_text(feel: BoardFeel) -> &'static str {
    match feel {
        BoardFeel::Light => {
            "You asked for a light board: harder wheels and faster bearings keep it nimble."
        }
        BoardFeel::Durable => {
            "You asked for durability: the deck and mounting are chosen to take abuse."
        }
        BoardFeel::Grippy => "You asked for grip: softer wheels put more rubber on the ground.",
    }
}

fn risers_text(risers: Risers) -> String {
    match risers {
        Risers::None => "no risers".to_string(),
        other => other.to_string(),
    }
}
