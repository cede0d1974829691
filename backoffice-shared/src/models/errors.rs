use serde::{Deserialize, Serialize};

/// Error body returned by the backend on a non-2xx response.
///
/// Backends differ in which field carries the human readable text, so all of
/// them are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Detailed message.
    #[serde(default)]
    pub message: Option<String>,
    /// Short reason phrase, e.g. `Unauthorized`.
    #[serde(default)]
    pub error: Option<String>,
    /// HTTP status echoed in the body.
    #[serde(default)]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Creates an error body carrying just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// The most specific non-empty text in the body.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|text| !text.trim().is_empty()))
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status, self.summary()) {
            (Some(status), Some(text)) => write!(f, "{status}: {text}"),
            (None, Some(text)) => f.write_str(text),
            (Some(status), None) => write!(f, "{status}"),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

impl std::error::Error for ErrorResponse {}
