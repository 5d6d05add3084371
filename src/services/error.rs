use thiserror::Error;

/// A provider lookup failed. Carries only the message that is safe to show
/// callers; the underlying cause is logged where it is raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExternalServiceFailure {
    message: &'static str,
}

impl ExternalServiceFailure {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

#[derive(Debug, Error)]
#[error("Failed to fetch direct image URL for reference: {reference}")]
pub struct PhotoResolutionError {
    pub reference: String,
    #[source]
    pub source: anyhow::Error,
}
