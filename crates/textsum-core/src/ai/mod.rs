pub mod decoder;
pub mod prompt;
pub mod providers;
mod style;
mod summarizer;

pub use decoder::decode_summary;
pub use prompt::{build_prompt, Prompt, PromptLanguage};
pub use style::SummaryStyle;
pub use summarizer::{PipelineState, Summarizer};
