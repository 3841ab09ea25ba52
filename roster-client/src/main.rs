use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use roster_client::{
    app::{self, AppConfig},
    cli::{self, DialoguerConfirmer},
    infra::{AutoConfirm, Confirmer},
};
use roster_config::{ClientConfig, ConfigLoader};

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Manage users of a REST user backend")]
struct Args {
    /// Base URL of the user backend (e.g. http://localhost:5000)
    #[arg(long)]
    api_url: Option<String>,

    /// Users per page (1-100)
    #[arg(long)]
    per_page: Option<u32>,

    /// Request timeout, e.g. "10s" or "1500ms"
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Delete without asking for confirmation
    #[arg(long, short = 'y')]
    yes: bool,

    /// Use an in-memory backend with sample users
    #[arg(long)]
    demo: bool,

    /// Environment file read before the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("roster_client", LevelFilter::Debug)
        .init();
}

fn resolve_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ConfigLoader::new()
        .with_env_file(args.env_file.clone())
        .load()
        .context("failed to load configuration")?;

    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(per_page) = args.per_page {
        config.per_page = per_page;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout = timeout;
    }
    config.validate().context("invalid configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let config = resolve_config(&args)?;
    log::info!(
        "Using backend {} ({} per page, timeout {})",
        config.api_url,
        config.per_page,
        humantime::format_duration(config.request_timeout)
    );

    let confirmer: Arc<dyn Confirmer> = if args.yes {
        Arc::new(AutoConfirm(true))
    } else {
        Arc::new(DialoguerConfirmer)
    };
    let app_config = AppConfig::new(config).with_test_stubs(args.demo);
    let mut runtime =
        app::runtime_boot(&app_config, confirmer).context("failed to start client")?;

    cli::run(&mut runtime).await
}
