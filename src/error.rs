// src/error.rs
use thiserror::Error;

/// Failure of a single scrape. Every variant is terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("unable to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unable to find {field}")]
    MissingField { field: &'static str },

    #[error("unable to find {field} attribute '{attribute}'")]
    MissingAttribute {
        field: &'static str,
        attribute: &'static str,
    },

    #[error("invalid {field} '{text}': {segments} segment(s)")]
    MalformedText {
        field: &'static str,
        text: String,
        segments: usize,
    },
}

impl ResumeError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Stable code reported to API clients
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "FETCH_ERROR",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            Self::MalformedText { .. } => "MALFORMED_TEXT",
        }
    }
}
