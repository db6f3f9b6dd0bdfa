// File: monitor/src/main.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use monitor::health::{CheckReporter, TracingReporter};
use monitor::{AlertService, ConfigManager, HealthMonitor, HealthScheduler};

#[derive(Parser, Debug)]
#[command(version, about = "Celestia DA node sync and balance monitor")]
struct Args {
    /// Directory holding main.toml and secrets.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Run a single health cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::from_default_env()
        .add_directive("monitor=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Start celestia-node-monitor");

    info!("Loading config from {}", args.config_dir.display());
    let config_manager =
        ConfigManager::new(args.config_dir.to_string_lossy().into_owned()).await?;
    let config = config_manager.get_current_config();

    info!(
        "Standard consensus rpc is {}",
        config.node.standard_consensus_rpc
    );
    let node_urls: Vec<&str> = config.node.apis.iter().map(|api| api.url.as_str()).collect();
    info!("Nodes to check: {}", node_urls.join(", "));
    info!(
        "Will alert when node balance is less than {} utia",
        config.node.minimum_balance
    );

    let reporter: Arc<dyn CheckReporter> = Arc::new(TracingReporter);
    let health_monitor = Arc::new(HealthMonitor::new(&config, reporter)?);

    let alert_service = Arc::new(AlertService::from_config(&config)?);
    if !alert_service.is_enabled() {
        warn!("Discord webhook not configured, alerts will only be logged");
        warn!("Set discord_webhook in config/secrets.toml or the DISCORD_WEBHOOK environment variable");
    }

    let scheduler = HealthScheduler::new(
        health_monitor,
        alert_service,
        config.targets(),
        config.check_interval(),
    );

    if args.once {
        scheduler.run_cycle().await;
        return Ok(());
    }

    tokio::select! {
        _ = scheduler.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
