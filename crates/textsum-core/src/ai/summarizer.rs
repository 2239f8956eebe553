use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::watch;

use super::decoder::decode_summary;
use super::prompt::{build_prompt, Prompt, PromptLanguage};
use super::providers::{HfInferenceProvider, InferenceProvider};
use super::SummaryStyle;
use crate::config::AppConfig;
use crate::error::ErrorKind;
use crate::{Error, Result};

/// Progress of a single summarization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    PromptBuilt,
    Requested,
    ResponseReceived,
    Decoded,
    Failed(ErrorKind),
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Decoded | PipelineState::Failed(_))
    }
}

/// Summarizer that wraps the configured provider and drives one request through it
pub struct Summarizer {
    provider: Arc<dyn InferenceProvider>,
    language: PromptLanguage,
    shutdown: Option<watch::Receiver<bool>>,
    state: PipelineState,
}

impl Summarizer {
    /// Create a new summarizer based on configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let provider = HfInferenceProvider::new(config)?;
        Ok(Self::with_provider(Arc::new(provider), config.prompt.language))
    }

    pub fn with_provider(provider: Arc<dyn InferenceProvider>, language: PromptLanguage) -> Self {
        Self {
            provider,
            language,
            shutdown: None,
            state: PipelineState::Idle,
        }
    }

    /// Abort the in-flight request once `true` is sent on the channel
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Parse the style label, then summarize
    pub async fn run(&mut self, text: &str, style_label: &str) -> Result<String> {
        self.state = PipelineState::Idle;
        match style_label.parse::<SummaryStyle>() {
            Ok(style) => self.summarize(text, style).await,
            Err(e) => {
                self.transition(PipelineState::Failed(e.kind()));
                Err(e)
            }
        }
    }

    /// Build the prompt for `text`, send it and decode the answer
    pub async fn summarize(&mut self, text: &str, style: SummaryStyle) -> Result<String> {
        self.state = PipelineState::Idle;
        let prompt = build_prompt(text, style, self.language);
        self.transition(PipelineState::PromptBuilt);

        match self.request_and_decode(&prompt).await {
            Ok(summary) => {
                self.transition(PipelineState::Decoded);
                Ok(summary)
            }
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), error = %e, "Summarization failed");
                self.transition(PipelineState::Failed(e.kind()));
                Err(e)
            }
        }
    }

    async fn request_and_decode(&mut self, prompt: &Prompt) -> Result<String> {
        self.transition(PipelineState::Requested);
        let raw = send_or_cancel(self.provider.as_ref(), self.shutdown.as_mut(), prompt).await?;
        self.transition(PipelineState::ResponseReceived);
        decode_summary(&raw)
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::debug!(from = ?self.state, to = ?next, provider = self.provider.name(), "Pipeline transition");
        self.state = next;
    }
}

async fn send_or_cancel(
    provider: &dyn InferenceProvider,
    shutdown: Option<&mut watch::Receiver<bool>>,
    prompt: &Prompt,
) -> Result<Bytes> {
    let Some(shutdown) = shutdown else {
        return provider.send(prompt).await;
    };

    if *shutdown.borrow() {
        return Err(Error::Cancelled);
    }

    tokio::select! {
        result = provider.send(prompt) => result,
        _ = cancelled(shutdown) => {
            tracing::info!("Request cancelled by shutdown signal");
            Err(Error::Cancelled)
        }
    }
}

async fn cancelled(shutdown: &mut watch::Receiver<bool>) {
    if shutdown.wait_for(|stop| *stop).await.is_err() {
        // Sender dropped without signalling; nothing can cancel any more
        std::future::pending::<()>().await;
    }
}
