use snippy_core::errors::{ExError, ExErrorKind};
use thiserror::Error;

/// Result type alias using RelayError
pub type Result<T> = std::result::Result<T, RelayError>;

/// Failures while relaying a performance analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayError {
    /// Request body is not a valid `{code, language}` object
    #[error("Invalid analysis request: {0}")]
    InvalidRequest(String),

    /// Required setting is missing or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider could not be reached or the connection dropped
    #[error("Provider transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("Provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    /// Provider reported an error inside the event stream
    #[error("Provider stream error: {0}")]
    ProviderStream(String),

    /// Event payload could not be decoded
    #[error("Malformed provider event: {0}")]
    MalformedEvent(String),

    /// Listener could not be bound or the server stopped
    #[error("Server error: {0}")]
    Server(String),
}

impl From<RelayError> for ExError {
    fn from(err: RelayError) -> Self {
        let kind = match &err {
            RelayError::InvalidRequest(_) => ExErrorKind::InvalidInput,
            RelayError::Configuration(_) => ExErrorKind::Configuration,
            RelayError::Transport(_)
            | RelayError::ProviderStatus { .. }
            | RelayError::ProviderStream(_)
            | RelayError::MalformedEvent(_) => ExErrorKind::ExternalService,
            RelayError::Server(_) => ExErrorKind::Io,
        };
        ExError::new(kind).with_message(err.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}
