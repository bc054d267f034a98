use snippy_core_types::RequestId;
use thiserror::Error;

/// Result type alias using SnippyError
pub type Result<T> = std::result::Result<T, SnippyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable `ERR_*` code used in logs, CLI output and
/// HTTP error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidTitle,
    InvalidCode,
    NotFound,
    UnknownAction,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,
    Configuration,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::InvalidCode => "ERR_INVALID_CODE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnknownAction => "ERR_UNKNOWN_ACTION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus optional context. Domain enums (`SnippyError`,
/// the relay's `RelayError`) convert into this at logging and transport
/// boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a snippet id, an action name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for snippet operations
#[derive(Error, Debug, Clone)]
pub enum SnippyError {
    /// Title is empty or whitespace-only
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// Code body is empty
    #[error("Invalid code: {reason}")]
    InvalidCode { reason: String },

    /// No snippet with this id
    #[error("Snippet not found: {snippet_id}")]
    SnippetNotFound { snippet_id: i64 },

    /// Assistant asked for an action that is not registered
    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    /// Assistant action arguments did not match the action schema
    #[error("Invalid arguments for action {action}: {reason}")]
    InvalidArguments { action: String, reason: String },

    /// Durable slot failure (read/write/rename)
    #[error("Storage failure: {0}")]
    Storage(ExError),

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<SnippyError> for ExError {
    fn from(err: SnippyError) -> Self {
        match err {
            SnippyError::InvalidTitle { reason } => {
                ExError::new(ExErrorKind::InvalidTitle).with_message(reason)
            }
            SnippyError::InvalidCode { reason } => {
                ExError::new(ExErrorKind::InvalidCode).with_message(reason)
            }
            SnippyError::SnippetNotFound { snippet_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(snippet_id.to_string())
                .with_message("Snippet not found"),
            SnippyError::UnknownAction { name } => ExError::new(ExErrorKind::UnknownAction)
                .with_entity_id(name)
                .with_message("Action is not registered"),
            SnippyError::InvalidArguments { action, reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op(action)
                    .with_message(reason)
            }
            SnippyError::Storage(inner) => inner,
            SnippyError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            SnippyError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<ExError> for SnippyError {
    fn from(err: ExError) -> Self {
        SnippyError::Storage(err)
    }
}

/// Conversion from serde_json::Error to SnippyError
impl From<serde_json::Error> for SnippyError {
    fn from(err: serde_json::Error) -> Self {
        SnippyError::Serialization {
            message: err.to_string(),
        }
    }
}
