//! Covstat - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use covstat::{run, run_stats, Args, Command};
use covstat_common::{init_logging, LoggingConfig};
use covstat_config::ConfigLoader;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    config
        .validate_all()
        .context("invalid command line override")?;

    init_logging(&LoggingConfig::from(&config.logging))
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    info!(version = env!("CARGO_PKG_VERSION"), "starting covstat");

    match args.command {
        Some(Command::Stats) => {
            let body = run_stats(&config).context("statistics query failed")?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        None => {
            let (output, written) = run(&config, &args).context("dashboard run failed")?;
            info!(
                records = output.records.len(),
                files = written.len(),
                "finished"
            );
        }
    }

    Ok(())
}
