//! mvcore - Model tier of a Model-View-Controller toolkit
//!
//! Entry point: loads configuration, sets up tracing, owns the model cores
//! for the lifetime of the process.

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mvcore_config::{Config, ConfigLoader, ConfigValidator, LogFormat, LoggingConfig};
use mvcore_core::ModelCores;

mod cli;
mod session;

use cli::{Cli, Commands};

/// Initialize tracing. `RUST_LOG` overrides the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match logging.format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// Build the cores host and pre-create the configured cores.
fn build_cores(config: &Config) -> Result<ModelCores, Box<dyn std::error::Error>> {
    let cores = ModelCores::with_policy(config.model.duplicate_policy);
    for key in &config.model.cores {
        cores.instance(key)?;
    }
    Ok(cores)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging);

    match cli.command {
        Some(Commands::Check) => {
            let result = ConfigValidator::validate(&config)?;
            for warning in &result.warnings {
                warn!(path = %warning.path, "{}", warning.message);
            }
            for err in &result.errors {
                error!(path = %err.path, "{}", err.message);
            }
            if !result.is_valid() {
                return Err(format!("{} configuration error(s)", result.errors.len()).into());
            }
            info!(config = %cli.config.display(), "Configuration is valid");
            Ok(())
        }
        command => {
            let core = match command {
                Some(Commands::Session { core }) => core,
                _ => "main".to_string(),
            };

            let cores = build_cores(&config)?;
            info!(cores = ?cores.keys(), policy = ?cores.policy(), "Model cores ready");

            let report = session::run(&cores, &core)?;
            for line in &report.lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
