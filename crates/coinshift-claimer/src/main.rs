/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: One claim pass over every configured account
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coinshift_claimer::{AccountOutcome, ClaimConfig, ClaimPipeline};

#[derive(Parser, Debug)]
#[command(name = "coinshift-claimer", version, about = "Coinshift campaign claim runner")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", default_value = "config.yaml")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting coinshift-claimer"
    );

    let config = load_config(&args.config_path)?;
    info!(account_count = config.accounts.len(), "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let pipeline = ClaimPipeline::new();
    let reports = pipeline.run(&config.accounts).await;

    let completed = reports.iter().filter(|report| report.is_completed()).count();
    for report in &reports {
        match &report.outcome {
            AccountOutcome::Completed { user_id, activities } => {
                let claimed = activities
                    .iter()
                    .filter(|activity| activity.outcome.is_ok())
                    .count();
                info!(
                    account = report.index + 1,
                    address = report.address.as_deref().unwrap_or("unknown"),
                    user_id = %user_id,
                    claimed,
                    attempted = activities.len(),
                    "summary"
                );
            }
            AccountOutcome::Failed { step, error } => {
                warn!(
                    account = report.index + 1,
                    address = report.address.as_deref().unwrap_or("unknown"),
                    step = %step,
                    error = %error,
                    "summary"
                );
            }
        }
    }

    info!(
        completed,
        failed = reports.len() - completed,
        "all accounts processed"
    );

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<ClaimConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    ClaimConfig::from_file(path_str).context("load config")
}
