use thiserror::Error;

/// Message surfaced when the service gives us nothing better.
pub const FALLBACK_MESSAGE: &str = "Unknown error";

/// Resolved destination as reported by the bypass service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub original_url: String,
    pub final_url: String,
    pub metadata: Option<PageMetadata>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The two ways an exchange can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The service answered with a non-success status.
    #[error("service rejected the request (status {status})")]
    Service { status: u16, message: Option<String> },
    /// The request never completed, or the response body could not be
    /// parsed. The detail is for logs only.
    #[error("transport failure: {detail}")]
    Transport { detail: String },
}

impl ResolveError {
    /// The message to show the user: the service's own wording when it
    /// provided any, else the fallback. Transport details are never shown.
    pub fn user_message(&self) -> &str {
        match self {
            ResolveError::Service {
                message: Some(message),
                ..
            } => message,
            ResolveError::Service { message: None, .. } | ResolveError::Transport { .. } => {
                FALLBACK_MESSAGE
            }
        }
    }
}
