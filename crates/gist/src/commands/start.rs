//! Start command - launches the gist server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use gist_config::{self, GistConfig};
use gist_core::{MemoryTextStore, Summarizer, TextRepository};
use gist_nlp::{NlpConfig, RuleBasedPipeline};
use gist_server::{AppState, Server, ServerConfig};

use super::Context;

/// Arguments for the start command.
///
/// CLI arguments override config file values.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind to (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Path to config file (skips discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty store instead of the sample texts
    #[arg(long)]
    pub no_samples: bool,
}

/// Run the start command.
pub async fn run(args: StartArgs, ctx: &Context) -> Result<()> {
    let config = load(&args, ctx)?;
    let state = build_state(&config, &args)?;

    let server = Server::new(state);
    let addr = server.bind_address();

    println!("gist server starting on http://{}", addr);
    println!("Press Ctrl+C to stop");

    server.run().await?;

    if ctx.verbose {
        println!("Server stopped");
    }
    Ok(())
}

/// Load the config file or discover the layered config, then apply CLI overrides.
fn load(args: &StartArgs, ctx: &Context) -> Result<GistConfig> {
    let mut config = match &args.config {
        Some(path) => {
            if ctx.verbose {
                println!("Config: {}", path.display());
            }
            gist_config::load_config_file(path)?
        }
        None => {
            let cwd = std::env::current_dir().ok();
            let loaded = gist_config::load_config(cwd.as_deref())?;
            for warning in &loaded.warnings {
                eprintln!("warning: {}", warning);
            }
            if ctx.verbose {
                let sources = loaded.loaded_from();
                if sources.is_empty() {
                    println!("Config: defaults (no config files found)");
                }
                for path in sources {
                    println!("Config: {}", path.display());
                }
            }
            loaded.config
        }
    };

    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// CLI flags win over every config layer.
fn apply_overrides(config: &mut GistConfig, args: &StartArgs) {
    let mut server = config.server();
    if let Some(port) = args.port {
        server.port = port;
    }
    if let Some(bind) = &args.bind {
        server.bind = bind.clone();
    }
    config.server = Some(server);

    if args.no_samples {
        let mut store = config.store();
        store.load_samples = false;
        config.store = Some(store);
    }
}

/// Assemble store, pipeline and summarizer into server state.
fn build_state(config: &GistConfig, args: &StartArgs) -> Result<AppState> {
    let store: Arc<dyn TextRepository> = if config.store().load_samples {
        Arc::new(MemoryTextStore::with_samples())
    } else {
        Arc::new(MemoryTextStore::new())
    };
    tracing::debug!(
        texts = store.len(),
        no_samples = args.no_samples,
        "Text store ready"
    );

    let pipeline = RuleBasedPipeline::with_config(NlpConfig {
        numeric_entities: config.nlp().numeric_entities,
    });
    let summarizer = Summarizer::new(Arc::new(pipeline))
        .with_default_sentences(config.summarizer().default_sentences);

    let server_config = ServerConfig::from_section(&config.server())?;
    Ok(AppState::new(store, summarizer, server_config))
}
