//! Summarize command - extractive summaries from the server or in process.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{ArgGroup, Args};
use console::Style;

use gist_config::GistConfig;
use gist_core::Summarizer;
use gist_nlp::{NlpConfig, RuleBasedPipeline};

use super::{Context, truncate};
use crate::client::{Client, SummaryResponse};

/// Arguments for the summarize command.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["id", "file", "text"]),
))]
pub struct SummarizeArgs {
    /// ID of a stored text
    pub id: Option<String>,

    /// Summarize the contents of a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Summarize inline text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Number of sentences in the summary
    #[arg(short = 'n', long)]
    pub sentences: Option<NonZeroUsize>,

    /// Run the summarizer in process instead of calling the server
    #[arg(long)]
    pub local: bool,
}

/// Run the summarize command.
pub async fn run(args: SummarizeArgs, ctx: &Context) -> Result<()> {
    let sentences = args.sentences.map(NonZeroUsize::get);

    let inline = match (&args.file, &args.text) {
        (Some(path), _) => Some(tokio::fs::read_to_string(path).await.map_err(|e| {
            anyhow::anyhow!("Failed to read {}: {}", path.display(), e)
        })?),
        (None, Some(text)) => Some(text.clone()),
        (None, None) => None,
    };

    let response = if args.local {
        let Some(text) = inline else {
            bail!("--local needs --file or --text; stored texts live on the server");
        };
        summarize_local(&text, sentences, ctx)
    } else {
        let client = Client::new(&ctx.server_url)?;
        match (&args.id, inline) {
            (_, Some(text)) => client.summarize_text(&text, sentences).await?,
            (Some(id), None) => client.summarize_stored(id, sentences).await?,
            (None, None) => bail!("Nothing to summarize"),
        }
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if let Some(message) = response.message {
        let dim = Style::new().dim();
        println!("{}", dim.apply_to(message));
    } else {
        println!("{}", response.summary);
    }
    Ok(())
}

/// Summarize with the rule-based pipeline, honoring `[summarizer]` and `[nlp]`.
fn summarize_local(text: &str, sentences: Option<usize>, ctx: &Context) -> SummaryResponse {
    let config = local_config();
    let summarizer = local_summarizer(&config);

    if ctx.verbose {
        let dim = Style::new().dim();
        for sentence in summarizer.rank(text) {
            eprintln!(
                "{} {}",
                dim.apply_to(format!(
                    "[{} = {} + {}]",
                    sentence.score, sentence.entities, sentence.noun_chunks
                )),
                truncate(&sentence.text, 60)
            );
        }
    }

    let count = sentences.unwrap_or(summarizer.default_sentences());
    SummaryResponse {
        summary: summarizer.summarize(text, count),
        message: None,
    }
}

/// Discovered config, or defaults when discovery fails.
fn local_config() -> GistConfig {
    let cwd = std::env::current_dir().ok();
    match gist_config::load_config(cwd.as_deref()) {
        Ok(loaded) => {
            for warning in &loaded.warnings {
                eprintln!("warning: {}", warning);
            }
            loaded.config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Config discovery failed; using defaults");
            GistConfig::new()
        }
    }
}

fn local_summarizer(config: &GistConfig) -> Summarizer {
    let pipeline = RuleBasedPipeline::with_config(NlpConfig {
        numeric_entities: config.nlp().numeric_entities,
    });
    let default_sentences = config.summarizer().default_sentences.max(1);
    Summarizer::new(Arc::new(pipeline)).with_default_sentences(default_sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_core::samples::DRONES;

    #[test]
    fn test_local_summarizer_uses_config() {
        let config = GistConfig::from_toml("[summarizer]\ndefault_sentences = 3").unwrap();
        let summarizer = local_summarizer(&config);
        assert_eq!(summarizer.default_sentences(), 3);
        assert_eq!(summarizer.pipeline_name(), "rule-based");
    }

    #[test]
    fn test_local_summary_is_top_ranked_sentences() {
        let summarizer = local_summarizer(&GistConfig::new());
        let ranked = summarizer.rank(DRONES);
        let expected = format!("{} {}", ranked[0].text, ranked[1].text);
        assert_eq!(summarizer.summarize(DRONES, 2), expected);
    }
}
