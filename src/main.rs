//! Command-line front end for the salary department.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use salary_department::cli::{Args, run};
use salary_department::config::ConfigLoader;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load_or_default(args.config.as_deref())
        .context("failed to load settings")?
        .into_config();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_file = args.data_file(&config);
    debug!(data_file = %data_file.display(), "Using work type file");

    let stdout = std::io::stdout();
    run(args.command, &data_file, &config, &mut stdout.lock())
}
