//! Error taxonomy for recommendation requests.
//!
//! ERROR HANDLING
//! ==============
//! Service and transport failures keep their detail for diagnostic logs but
//! collapse to a single fixed message in the UI. Blank queries are not errors;
//! they never reach this type.

/// The only failure text ever shown to users.
pub const FAILURE_MESSAGE: &str = "Failed to connect to the recommendation engine. Please try again later.";

/// Errors produced while talking to the recommendation service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecommendError {
    /// The service answered with a non-success HTTP status.
    #[error("recommendation service responded with status {status}")]
    Status { status: u16, body: String },

    /// The request could not be sent or the body could not be read.
    #[error("recommendation request failed: {0}")]
    Transport(String),

    /// The body was not a valid response document.
    #[error("recommendation response parse failed: {0}")]
    Decode(String),
}

impl RecommendError {
    /// User-facing text, identical for every variant.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }

    /// HTTP status when the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
