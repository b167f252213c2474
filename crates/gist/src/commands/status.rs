//! Status command - shows server health.

use anyhow::Result;
use clap::Args;
use console::{Style, style};
use serde::Serialize;

use super::Context;
use crate::client::Client;

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show stored text count and pipeline
    #[arg(short, long)]
    pub detailed: bool,
}

/// Status response for JSON output.
#[derive(Debug, Serialize)]
struct StatusOutput {
    running: bool,
    version: Option<String>,
    texts: Option<usize>,
    pipeline: Option<String>,
    server_url: String,
}

/// Run the status command.
pub async fn run(args: StatusArgs, ctx: &Context) -> Result<()> {
    let client = Client::new(&ctx.server_url)?;
    let dim = Style::new().dim();

    match client.health().await {
        Ok(health) => {
            if ctx.json_output {
                let output = StatusOutput {
                    running: true,
                    version: Some(health.version),
                    texts: Some(health.texts),
                    pipeline: Some(health.pipeline),
                    server_url: ctx.server_url.clone(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            let green = Style::new().green();

            print_header(&dim);
            println!("  {:<9} {}", dim.apply_to("Status:"), green.apply_to("● running"));
            println!("  {:<9} {}", dim.apply_to("Version:"), health.version);
            println!("  {:<9} {}", dim.apply_to("Server:"), ctx.server_url);

            if args.detailed {
                println!("  {:<9} {}", dim.apply_to("Texts:"), health.texts);
                println!("  {:<9} {}", dim.apply_to("Pipeline:"), health.pipeline);
            }

            println!();
        }
        Err(e) => {
            if ctx.json_output {
                let output = StatusOutput {
                    running: false,
                    version: None,
                    texts: None,
                    pipeline: None,
                    server_url: ctx.server_url.clone(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            let red = Style::new().red();

            print_header(&dim);
            println!("  {:<9} {}", dim.apply_to("Status:"), red.apply_to("● not running"));
            println!("  {:<9} {}", dim.apply_to("Server:"), ctx.server_url);

            if ctx.verbose {
                println!();
                println!("  {:<9} {}", dim.apply_to("Error:"), e);
            }

            println!();
            println!("  {}", dim.apply_to("Start the server with: gist start"));
            println!();
        }
    }

    Ok(())
}

fn print_header(dim: &Style) {
    println!();
    println!("{}", style("gist server").bold());
    println!("{}", dim.apply_to("─".repeat(40)));
    println!();
}
