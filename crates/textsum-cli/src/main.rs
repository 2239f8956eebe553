use anyhow::Result;
use clap::Parser;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use textsum_core::AppConfig;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "textsum")]
#[command(author, version, about = "Summarize a text file with a hosted summarization model")]
struct Cli {
    /// Path of the text file to summarize
    #[arg(long = "input", value_name = "PATH")]
    input: Option<String>,

    /// Summary type: short, medium, bullet
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "short")]
    summary_type: String,

    /// Prompt language: spanish, english (overrides config)
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Model id on the inference router (overrides config)
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the prompt instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Fold per-invocation flags into the loaded configuration
    fn apply_to(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(language) = &self.language {
            config.prompt.language = language.parse()?;
        }
        if let Some(model) = &self.model {
            config.api.model = model.clone();
            config.api.endpoint = None;
        }
        if let Some(secs) = self.timeout {
            config.api.request_timeout_secs = secs;
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    // Initialize logging; stdout is reserved for the summary
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    cli.apply_to(&mut config)?;

    // Ctrl-C aborts the in-flight request
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
            let _ = shutdown_tx.send(true);
        }
    });

    let args = commands::summarize::Args {
        input: cli.input,
        summary_type: cli.summary_type,
        dry_run: cli.dry_run,
    };

    commands::summarize::run(&config, args, shutdown_rx).await
}
