use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Kind of summary requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryStyle {
    /// One or two precise sentences
    #[default]
    Short,
    /// A single well-structured paragraph
    Medium,
    /// A bulleted list of key ideas
    Bullet,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [SummaryStyle::Short, SummaryStyle::Medium, SummaryStyle::Bullet];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Short => "short",
            SummaryStyle::Medium => "medium",
            SummaryStyle::Bullet => "bullet",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels are matched exactly; "Short" or " short" are rejected.
impl FromStr for SummaryStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(SummaryStyle::Short),
            "medium" => Ok(SummaryStyle::Medium),
            "bullet" => Ok(SummaryStyle::Bullet),
            other => Err(Error::InvalidStyle(other.to_string())),
        }
    }
}
