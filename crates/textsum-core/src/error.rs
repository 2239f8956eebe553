use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("an input file is required (use --input <path>)")]
    MissingInputPath,

    #[error("Error reading file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid summary type '{0}'. Available: short, medium, bullet")]
    InvalidStyle(String),

    #[error("Error building request: {0}")]
    RequestConstruction(String),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    NonSuccessStatus { status: u16, body: String },

    #[error("Error parsing API response: {0}")]
    MalformedResponse(String),

    #[error("API returned an empty result")]
    EmptyResult,

    #[error("No summary_text found in the API response")]
    MissingSummaryField,

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless classification of an [`Error`], used to record where a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInputPath,
    FileRead,
    InvalidStyle,
    RequestConstruction,
    Transport,
    NonSuccessStatus,
    MalformedResponse,
    EmptyResult,
    MissingSummaryField,
    Timeout,
    Cancelled,
    Config,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInputPath => ErrorKind::MissingInputPath,
            Error::FileRead { .. } => ErrorKind::FileRead,
            Error::InvalidStyle(_) => ErrorKind::InvalidStyle,
            Error::RequestConstruction(_) => ErrorKind::RequestConstruction,
            Error::Transport(_) => ErrorKind::Transport,
            Error::NonSuccessStatus { .. } => ErrorKind::NonSuccessStatus,
            Error::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Error::EmptyResult => ErrorKind::EmptyResult,
            Error::MissingSummaryField => ErrorKind::MissingSummaryField,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::Config(_) | Error::UrlParse(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
