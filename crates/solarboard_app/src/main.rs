mod shell;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use board_logging::board_info;
use clap::Parser;
use solarboard_data::{HttpProjectSource, ProjectSource, SnapshotProjectSource};

use shell::config::{AppConfig, Overrides, DEFAULT_CONFIG_FILENAME};
use shell::RunOptions;

/// Terminal dashboard for solar installation projects.
#[derive(Debug, Parser)]
#[command(name = "solarboard", version, about)]
struct Args {
    /// RON configuration file. A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,

    /// Base URL of the project API, e.g. http://localhost:5000/api.
    #[arg(long)]
    api_url: Option<String>,

    /// Serve data from a JSON snapshot instead of the API.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Role used for tab and action gating.
    #[arg(long)]
    role: Option<String>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long)]
    log_level: Option<String>,

    /// Render one frame after the initial load and exit.
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    config.apply_overrides(Overrides {
        api_url: args.api_url,
        snapshot: args.snapshot,
        role: args.role,
        log_level: args.log_level,
    });

    shell::logging::initialize(config.log_destination, config.log_level()?, &config.log_file);
    let role = config.role()?;

    let source: Arc<dyn ProjectSource> = match &config.snapshot {
        Some(path) => {
            board_info!("Using snapshot {:?}", path);
            Arc::new(
                SnapshotProjectSource::from_path(path)
                    .with_context(|| format!("failed to load snapshot {:?}", path))?,
            )
        }
        None => {
            board_info!("Using API at {}", config.api.base_url);
            Arc::new(
                HttpProjectSource::new(config.api.settings())
                    .context("failed to configure the HTTP client")?,
            )
        }
    };

    let once_timeout = Duration::from_secs(
        config.api.connect_timeout_secs + config.api.request_timeout_secs + 5,
    );
    shell::run(
        source,
        RunOptions {
            role,
            once: args.once,
            once_timeout,
        },
    )
}
