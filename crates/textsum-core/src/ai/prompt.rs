use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::SummaryStyle;
use crate::Error;

/// Language the instruction templates are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    #[serde(alias = "es")]
    Spanish,
    #[serde(alias = "en")]
    English,
}

impl FromStr for PromptLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spanish" | "es" => Ok(PromptLanguage::Spanish),
            "english" | "en" => Ok(PromptLanguage::English),
            other => Err(Error::Config(format!(
                "unknown prompt language '{other}' (expected spanish or english)"
            ))),
        }
    }
}

const SPANISH_SHORT: &str =
    "Por favor, resume el siguiente texto en 1 o 2 frases claras, informativas y precisas:\n\n";
const SPANISH_MEDIUM: &str = "Genera un resumen en un solo parrafo bien estructurado, \
incluye las ideas principales y no seas redundante:\n\n";
const SPANISH_BULLET: &str = "Extrae y presenta las ideas clave del siguiente texto en formato \
de lista de viñetas, usa frases breves y directas:\n\n";

const ENGLISH_SHORT: &str =
    "Please summarize the following text in 1 or 2 clear, informative and precise sentences:\n\n";
const ENGLISH_MEDIUM: &str = "Write a summary as a single well-structured paragraph, \
covering the main ideas without being redundant:\n\n";
const ENGLISH_BULLET: &str = "Extract the key ideas of the following text and present them \
as a bulleted list, using short and direct phrases:\n\n";

/// Fixed instruction text placed before the source text
pub fn instruction(style: SummaryStyle, language: PromptLanguage) -> &'static str {
    match (language, style) {
        (PromptLanguage::Spanish, SummaryStyle::Short) => SPANISH_SHORT,
        (PromptLanguage::Spanish, SummaryStyle::Medium) => SPANISH_MEDIUM,
        (PromptLanguage::Spanish, SummaryStyle::Bullet) => SPANISH_BULLET,
        (PromptLanguage::English, SummaryStyle::Short) => ENGLISH_SHORT,
        (PromptLanguage::English, SummaryStyle::Medium) => ENGLISH_MEDIUM,
        (PromptLanguage::English, SummaryStyle::Bullet) => ENGLISH_BULLET,
    }
}

/// Instruction plus source text, ready to be sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the prompt for `text`; the source text is appended untouched
pub fn build_prompt(text: &str, style: SummaryStyle, language: PromptLanguage) -> Prompt {
    let instruction = instruction(style, language);
    let mut prompt = String::with_capacity(instruction.len() + text.len());
    prompt.push_str(instruction);
    prompt.push_str(text);
    Prompt(prompt)
}
