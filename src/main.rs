//! tabbrief - summarize the active browser tab with a local language model.
//!
//! Main entry point for the tabbrief CLI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tabbrief_config::ConfigLoader;
use tabbrief_extract::ExtractionRelay;
use tabbrief_host_cdp::CdpScriptingHost;
use tabbrief_model_ollama::OllamaModel;
use tabbrief_protocols::{ExtractionRequest, StatusSink};
use tabbrief_summarize::Orchestrator;

/// tabbrief CLI.
#[derive(Parser)]
#[command(name = "tabbrief")]
#[command(about = "Summarize the active browser tab with a local language model")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the page's full visible text
    Page,

    /// Summarize the current text selection
    Selection,
}

/// Status lines go to stderr; stdout carries only the transcript.
struct StderrStatus;

impl StatusSink for StderrStatus {
    fn publish(&self, status: &str) {
        eprintln!("{status}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = PathBuf::from(ConfigLoader::expand_path(&cli.config.to_string_lossy()));
    let config = ConfigLoader::load(&config_path)?;
    debug!(path = %config_path.display(), "configuration loaded");

    let request = match cli.command {
        Commands::Page => ExtractionRequest::AllContent,
        Commands::Selection => ExtractionRequest::SelectedContent,
    };

    let host = Arc::new(CdpScriptingHost::new(
        config.browser.devtools_endpoint.clone(),
    ));
    let model = Arc::new(OllamaModel::new(
        config.model.endpoint.clone(),
        config.model.name.clone(),
    ));

    let orchestrator = Orchestrator::new(
        ExtractionRelay::new(host),
        model,
        Arc::new(StderrStatus),
    )
    .with_language(config.model.language.clone())
    .with_max_prompt_chars(config.model.max_prompt_chars);

    let report = orchestrator.run(request).await;
    println!("{}", report.transcript);

    Ok(())
}
