use crate::reports;
use clap::Args;
use serde::Serialize;
use skatefit::config::{Config, EngineParams};
use skatefit::engine::{self, Recommendation};
use skatefit::error::SfResult;
use skatefit::explain::{self, ComponentNote, ExplanationFragment};
use skatefit::profile::{BoardFeel, Experience, Flexibility, RiderProfile, RidingStyle, Terrain};
use skatefit::units::{
    normalize, parse_measurement, HeightInput, HeightUnit, ShoeGender, ShoeRegion, ShoeSizeInput,
    WeightInput, WeightUnit,
};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub config: Config,

    /// Read the rider profile from a JSON file instead of the flags below.
    #[arg(long)]
    pub profile: Option<String>,

    /// Height in cm, or whole feet with --height-unit ft-in.
    #[arg(long, default_value = "")]
    pub height: String,
    /// Inches part of the height for --height-unit ft-in.
    #[arg(long, default_value = "0")]
    pub inches: String,
    #[arg(long, value_enum, default_value_t = HeightUnit::Cm)]
    pub height_unit: HeightUnit,

    #[arg(long, default_value = "")]
    pub weight: String,
    #[arg(long, value_enum, default_value_t = WeightUnit::Kg)]
    pub weight_unit: WeightUnit,

    #[arg(long, default_value = "")]
    pub shoe: String,
    #[arg(long, value_enum, default_value_t = ShoeRegion::Eu)]
    pub shoe_region: ShoeRegion,
    #[arg(long, value_enum, default_value_t = ShoeGender::Men)]
    pub shoe_gender: ShoeGender,

    #[arg(long, value_enum)]
    pub experience: Option<Experience>,
    #[arg(long, value_enum)]
    pub style: Option<RidingStyle>,
    #[arg(long, value_enum)]
    pub terrain: Option<Terrain>,
    /// 1 = maneuverable, 10 = stable.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub stability: Option<u8>,
    #[arg(long, value_enum)]
    pub flexibility: Option<Flexibility>,
    #[arg(long, value_enum)]
    pub board_feel: Option<BoardFeel>,

    /// Print JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl RecommendArgs {
    pub fn to_profile(&self) -> SfResult<RiderProfile> {
        if let Some(path) = &self.profile {
            info!("📂 Loading rider profile: {}", path);
            return RiderProfile::load_from_file(path);
        }

        let measurements = normalize(
            HeightInput::from_unit(
                self.height_unit,
                parse_measurement(&self.height),
                parse_measurement(&self.inches),
            ),
            WeightInput::from_unit(self.weight_unit, parse_measurement(&self.weight)),
            ShoeSizeInput {
                value: parse_measurement(&self.shoe),
                region: self.shoe_region,
                gender: self.shoe_gender,
            },
        );
        debug!("Normalized measurements: {:?}", measurements);

        Ok(RiderProfile {
            experience: self.experience,
            riding_style: self.style,
            terrain: self.terrain,
            stability_preference: self.stability,
            flexibility: self.flexibility,
            board_feel: self.board_feel,
            ..RiderProfile::from_measurements(measurements)
        })
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    recommendation: &'a Recommendation,
    explanations: Vec<ExplanationFragment>,
    notes: Vec<ComponentNote>,
}

pub fn run(args: RecommendArgs, params: &EngineParams) -> SfResult<()> {
    let profile = args.to_profile()?;

    // to_rider logs clamping, so it runs once per command.
    let (recommendation, explanations, notes) = match profile.to_rider() {
        Some(rider) => {
            let spec = engine::build_spec(&rider, params);
            (
                Recommendation::Complete(spec),
                explain::explain(&rider, &spec),
                explain::component_notes(&rider, &spec),
            )
        }
        None => {
            debug!("Profile incomplete, skipping computation");
            (Recommendation::Incomplete, Vec::new(), Vec::new())
        }
    };

    if args.json {
        let report = JsonReport {
            recommendation: &recommendation,
            explanations,
            notes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match recommendation.spec() {
        Some(spec) => {
            reports::print_spec_tables(spec);
            reports::print_component_notes(&notes);
            reports::print_explanations(&explanations);
        }
        None => reports::print_placeholder(),
    }
    Ok(())
}
