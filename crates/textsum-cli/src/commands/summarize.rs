use anyhow::Result;
use tokio::sync::watch;
use tracing::debug;

use textsum_core::{
    ai::{build_prompt, Summarizer, SummaryStyle},
    source::{read_source, resolve_input_path},
    AppConfig,
};

pub struct Args {
    pub input: Option<String>,
    pub summary_type: String,
    pub dry_run: bool,
}

pub async fn run(config: &AppConfig, args: Args, shutdown: watch::Receiver<bool>) -> Result<()> {
    let path = resolve_input_path(args.input.as_deref())?;
    let text = read_source(&path)?;
    debug!(path = %path.display(), bytes = text.len(), "Loaded input");

    // The style is checked before any request setup, including the token lookup
    let style: SummaryStyle = args.summary_type.parse()?;

    if args.dry_run {
        println!("{}", build_prompt(&text, style, config.prompt.language));
        return Ok(());
    }

    let mut summarizer = Summarizer::new(config)?.with_shutdown(shutdown);
    let summary = summarizer.summarize(&text, style).await?;

    println!("{}", summary);

    Ok(())
}
