use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use skatefit::config::{Config, EngineParams};
use skatefit::error::SfResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with engine parameters; explicit flags override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Recommend(cmd::recommend::RecommendArgs),
    Presets(cmd::presets::PresetsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Recommend(args) => (args.config, matches.subcommand_matches("recommend")),
        Commands::Presets(args) => (args.config, matches.subcommand_matches("presets")),
    };

    let params = match resolve_params(cli.config.as_deref(), cli_config, sub_matches) {
        Ok(p) => p,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Recommend(args) => cmd::recommend::run(args, &params),
        Commands::Presets(args) => cmd::presets::run(args, &params),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_params(
    path: Option<&str>,
    cli_config: Config,
    sub_matches: Option<&ArgMatches>,
) -> SfResult<EngineParams> {
    let Some(path) = path else {
        return Ok(cli_config.engine);
    };

    info!("⚙️  Loading engine parameters from: {}", path);
    let mut params = Config::load_from_file(path)?.engine;
    if let Some(m) = sub_matches {
        params.merge_from_cli(&cli_config.engine, m);
    }
    Ok(params)
}
