//! Receipt points server.
//!
//! Usage:
//!   receipt-points [--config config/service.yaml] [--host 0.0.0.0] [--port 8000]

use std::path::PathBuf;

use clap::Parser;
use receipt_points::api::{AppState, run_server};
use receipt_points::config::ConfigLoader;
use receipt_points::logging::init_logging;

#[derive(Parser)]
#[command(name = "receipt-points")]
#[command(about = "Receipt processing and loyalty points API")]
#[command(version)]
struct Cli {
    /// Configuration file path; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to, overriding the configuration file
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on, overriding the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    }
    .with_overrides(cli.host, cli.port);

    init_logging(loader.logging())?;

    run_server(loader.server(), AppState::in_memory()).await
}
