use crate::reports;
use clap::Args;
use skatefit::config::{Config, EngineParams};
use skatefit::engine::{self, EquipmentSpec};
use skatefit::error::SfResult;
use skatefit::presets::get_all_presets;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only show presets whose name contains this text.
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Also write the comparison table to a CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: PresetsArgs, params: &EngineParams) -> SfResult<()> {
    let mut results: Vec<(String, EquipmentSpec)> = Vec::new();

    info!("🛹 === PRESET COMPARISON ({}) === 🛹", params.deck_strategy);
    for (preset, profile) in get_all_presets() {
        let name = preset.to_string();
        if let Some(ref filter) = args.preset {
            if !name.contains(&filter.to_lowercase()) {
                continue;
            }
        }

        if let Some(spec) = engine::compute(&profile, params).spec() {
            results.push((name, *spec));
        }
    }

    reports::print_preset_report(&results);

    if let Some(path) = &args.csv {
        reports::export_preset_csv(path, &results)?;
        info!("💾 Wrote {} presets to {}", results.len(), path);
    }
    Ok(())
}
