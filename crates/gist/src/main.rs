//! gist - text store and extractive summarizer
//!
//! Main entry point for the gist CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod commands;

use commands::{start, status, summarize, texts};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// gist - store texts and summarize them by their most informative sentences
#[derive(Parser)]
#[command(name = "gist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Server URL (default: http://localhost:8080)
    #[arg(long, global = true, env = "GIST_SERVER_URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gist server
    Start(start::StartArgs),

    /// Show server status
    Status(status::StatusArgs),

    /// Manage stored texts
    Texts(texts::TextsArgs),

    /// Summarize a stored text, a file or inline text
    Summarize(summarize::SummarizeArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console (human-readable) always; rotating JSON file only for the server.
    let filter = if cli.verbose {
        "gist=debug,gist_server=debug,gist_core=debug,gist_nlp=debug,gist_config=debug,info"
    } else {
        "gist=info,gist_server=info,gist_core=info,warn"
    };

    use tracing_subscriber::prelude::*;
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::EnvFilter::new(filter));

    let _guard = if matches!(cli.command, Commands::Start(_)) {
        let file_appender = tracing_appender::rolling::daily(log_dir(), "gist.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::registry()
            .with(console_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_filter(tracing_subscriber::EnvFilter::new(
                        "gist=trace,gist_server=trace,gist_core=trace,gist_nlp=trace,gist_config=trace,info",
                    )),
            )
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry().with(console_layer).init();
        None
    };

    let server_url = cli
        .server
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let ctx = commands::Context {
        server_url,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Start(args) => start::run(args, &ctx).await,
        Commands::Status(args) => status::run(args, &ctx).await,
        Commands::Texts(args) => texts::run(args, &ctx).await,
        Commands::Summarize(args) => summarize::run(args, &ctx).await,
    }
}

/// Log directory: `<config dir>/logs`, else the platform cache dir, else `./logs`.
fn log_dir() -> PathBuf {
    gist_config::user_config_dir()
        .or_else(|| dirs::cache_dir().map(|d| d.join("gist")))
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
