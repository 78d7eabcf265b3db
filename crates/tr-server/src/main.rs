//! The `trend-report` binary: HTTP service or one-shot generation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tr_config::{resolve_config, Config, ConfigPaths};
use tr_report::generate;
use tr_server::{build_router, build_state};

#[derive(Parser)]
#[command(
    name = "trend-report",
    about = "Trend data report service and generator",
    version
)]
struct Cli {
    /// Path to a config file. Falls back to the XDG location when unset.
    #[arg(long, env = "TREND_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP report service.
    Serve,

    /// Generate a report once and write it to a file.
    Generate {
        /// Output path, overriding the configured default.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, code = e.code(), "fatal error");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> tr_common::Result<()> {
    let paths = ConfigPaths {
        explicit: cli.config,
    };
    let config = resolve_config(&paths)?;

    match cli.command {
        Command::Serve => serve(&config).await,
        Command::Generate { output } => generate_to_file(&config, output),
    }
}

async fn serve(config: &Config) -> tr_common::Result<()> {
    let router = build_router(build_state(config));
    let listener = tokio::net::TcpListener::bind(config.server.bind.as_str()).await?;
    info!(bind = %config.server.bind, "report service listening");
    axum::serve(listener, router).await?;
    Ok(())
}

fn generate_to_file(config: &Config, output: Option<PathBuf>) -> tr_common::Result<()> {
    let state = build_state(config);
    match generate(state.source.as_ref(), &state.theme)? {
        Some(document) => {
            let path = output.unwrap_or_else(|| config.report.output.clone());
            std::fs::write(&path, &document.bytes)?;
            info!(path = %path.display(), pages = document.pages, "report written");
        }
        None => info!("no data available; no report written"),
    }
    Ok(())
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
