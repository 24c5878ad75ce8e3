//! `longest-pair` CLI: run the upload service or analyze a file locally.
//!
//! ## Usage
//!
//! ```sh
//! # Serve the HTTP API with the default configuration
//! longest-pair serve
//!
//! # Serve with a configuration file, overriding the bind address
//! longest-pair serve --config service.yaml --bind 0.0.0.0:8080
//!
//! # Analyze a file (reads stdin if -i is omitted)
//! longest-pair analyze -i employees.txt --pattern dd/MM/yyyy
//!
//! # Print the full result as JSON
//! longest-pair analyze -i employees.txt --json
//! ```

use std::io::{self, Read};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use longest_pair::api::{AppState, create_router};
use longest_pair::calculation::{DEFAULT_DATE_PATTERN, process};
use longest_pair::config::{ConfigLoader, ServiceConfig};
use longest_pair::models::ProcessingResult;

#[derive(Parser)]
#[command(
    name = "longest-pair",
    version,
    about = "Find the pair of employees who worked together on common projects the longest"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP upload service
    Serve {
        /// YAML configuration file (built-in defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Address to listen on, overriding the configuration
        #[arg(long)]
        bind: Option<String>,
    },
    /// Process a work interval file and print the pairs and the longest pair
    Analyze {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Date pattern of the file, e.g. "dd/MM/yyyy"
        #[arg(short, long, default_value = DEFAULT_DATE_PATTERN)]
        pattern: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind } => serve(config.as_deref(), bind).await,
        Commands::Analyze {
            input,
            pattern,
            json,
        } => analyze(input.as_deref(), &pattern, json),
    }
}

async fn serve(config_path: Option<&Path>, bind: Option<String>) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .into_config(),
        None => ServiceConfig::default(),
    };
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind_address))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        address = %addr,
        default_pattern = %config.parser.date_pattern,
        max_upload_bytes = config.server.max_upload_bytes,
        allowed_origins = ?config.server.allowed_origins,
        "Listening for uploads"
    );

    let router = create_router(AppState::in_memory(config));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}

fn analyze(input: Option<&Path>, pattern: &str, json: bool) -> Result<()> {
    let raw = read_input(input)?;
    let result = process(&raw, pattern)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

/// Prints pairs longest first, then the summary line.
fn print_result(result: &ProcessingResult) {
    let mut pairs: Vec<_> = result.pairs.iter().collect();
    pairs.sort_by(|a, b| b.overlap_days.cmp(&a.overlap_days));

    println!(
        "{:<16} {:<16} {:<12} {:>11}",
        "Employee ID #1", "Employee ID #2", "Project ID", "Days worked"
    );
    for pair in pairs {
        println!(
            "{:<16} {:<16} {:<12} {:>11}",
            pair.employee_a, pair.employee_b, pair.project_id, pair.overlap_days
        );
    }
    println!();
    println!("{}", result.summary);
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
