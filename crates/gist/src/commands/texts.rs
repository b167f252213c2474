//! Texts command - stored text management.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{Style, style};
use serde_json::Value;

use super::{Context, truncate};
use crate::client::Client;

/// Arguments for the texts command.
#[derive(Args, Debug)]
pub struct TextsArgs {
    #[command(subcommand)]
    pub command: TextsCommand,
}

#[derive(Subcommand, Debug)]
pub enum TextsCommand {
    /// List stored texts
    List {
        /// Maximum texts to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show a stored text
    Show {
        /// Text ID
        id: String,
    },

    /// Store a text
    Add {
        /// Text content
        text: String,

        /// Store under this ID (replaces an existing text); next numeric ID otherwise
        #[arg(long)]
        id: Option<String>,
    },

    /// Delete a stored text
    Delete {
        /// Text ID
        id: String,
    },
}

/// Run the texts command.
pub async fn run(args: TextsArgs, ctx: &Context) -> Result<()> {
    let client = Client::new(&ctx.server_url)?;
    let dim = Style::new().dim();
    let green = Style::new().green();

    match args.command {
        TextsCommand::List { limit } => {
            let texts = client.list_texts().await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&texts)?);
                return Ok(());
            }

            println!("{}", style("Texts").bold());
            println!("{}", dim.apply_to("─".repeat(50)));
            println!();

            if texts.is_empty() {
                println!("{}", dim.apply_to("No texts stored"));
            } else {
                for (id, text) in texts.iter().take(limit) {
                    println!(
                        "{} {}",
                        dim.apply_to(format!("[{}]", id)),
                        truncate(text, 60)
                    );
                }
                if texts.len() > limit {
                    println!();
                    println!(
                        "{}",
                        dim.apply_to(format!("... and {} more", texts.len() - limit))
                    );
                }
            }
        }
        TextsCommand::Show { id } => {
            let lookup = client.get_text(&id).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&lookup)?);
                return Ok(());
            }

            match lookup.text {
                Some(text) => {
                    println!("{}", style(format!("Text {}", id)).bold());
                    println!("{}", dim.apply_to("─".repeat(50)));
                    println!();
                    println!("{}", text);
                }
                None => {
                    let message = lookup
                        .message
                        .unwrap_or_else(|| format!("Text with ID {} not found", id));
                    println!("{}", dim.apply_to(message));
                }
            }
        }
        TextsCommand::Add { text, id } => {
            let stored = client.add_text(id.as_deref(), &text).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&stored)?);
                return Ok(());
            }

            let id = stored.text_id.as_ref().map(display_id).unwrap_or_default();
            println!("{} Text stored: {}", green.apply_to("✓"), dim.apply_to(id));
        }
        TextsCommand::Delete { id } => {
            let response = client.delete_text(&id).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.message);
            }
        }
    }

    Ok(())
}

/// Ids come back as JSON numbers or strings; show both without quotes.
fn display_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
