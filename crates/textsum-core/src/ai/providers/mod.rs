mod hf_inference;

pub use hf_inference::{HfInferenceProvider, SummarizationRequest};

use bytes::Bytes;

use super::Prompt;
use crate::Result;

/// Trait for inference backends that turn a prompt into a raw response body
///
/// Implementations make exactly one attempt per call and leave the body
/// uninterpreted; decoding belongs to the caller.
#[async_trait::async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Send the prompt and return the successful response body
    async fn send(&self, prompt: &Prompt) -> Result<Bytes>;
}
