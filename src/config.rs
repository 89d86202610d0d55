use crate::error::{SfResult, SkateFitError};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub engine: EngineParams,
}

/// Deck sizing algorithm. The two disagree for the same rider, so exactly
/// one is applied per computation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeckStrategy {
    /// Shoe-size table plus style and experience offsets, 0.1" steps.
    #[default]
    Continuous,
    /// US shoe bands plus height bands, 1/8" steps, fixed wheelbases.
    Banded,
}

/// Truck tightness rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TightnessRule {
    /// `11 - stability` mapped onto the five-point scale.
    #[default]
    ResponseLevel,
    /// Rider weight bands nudged by stability preference.
    WeightBand,
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineParams {
    #[arg(long, value_enum, default_value_t = DeckStrategy::Continuous)]
    pub deck_strategy: DeckStrategy,

    #[arg(long, value_enum, default_value_t = TightnessRule::ResponseLevel)]
    pub tightness_rule: TightnessRule,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SkateFitError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl EngineParams {
    /// Overwrites fields the user typed on the command line, leaving
    /// file-provided values for everything that only has a clap default.
    pub fn merge_from_cli(&mut self, cli: &EngineParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(deck_strategy, "deck_strategy");
        update_if_present!(tightness_rule, "tightness_rule");
    }
}
