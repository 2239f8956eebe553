pub mod ai;
pub mod config;
pub mod error;
pub mod source;

pub use config::{ApiToken, AppConfig};
pub use error::{Error, ErrorKind, Result};
