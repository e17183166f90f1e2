//! Error types for the CodeCommit model SDK.
//!
//! Two tiers exist. A whole call can fail, which surfaces as
//! [`Error::Service`] once a response body is decoded. A batch call can
//! partially fail, which is not an error at all: the batch result types carry
//! their own per-item error lists.

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for the SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A request failed client-side constraint checks
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A string did not match any member of a closed value set
    #[error("Unknown {kind} value: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The service rejected the whole call
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Typed service errors, grouped by the kind of failure the error code names.
///
/// The service reports every client fault with the same HTTP status, so the
/// category comes from the error code itself (see [`ServiceError::classify`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A named resource does not exist (`RepositoryDoesNotExistException`, ...).
    #[error("[{code}] {message}")]
    NotFound {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// The request collides with existing state (`BranchNameExistsException`,
    /// `ManualMergeRequiredException`, `RevisionNotCurrentException`, ...).
    #[error("[{code}] {message}")]
    Conflict {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// A parameter is missing or malformed (`Invalid*`, `*Required`).
    #[error("[{code}] {message}")]
    Validation {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// A quota or size limit was hit (`*LimitExceeded*`, `Maximum*`, `TooMany*`).
    #[error("[{code}] {message}")]
    LimitExceeded {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// The repository encryption key could not be used.
    #[error("[{code}] {message}")]
    Encryption {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Request rate exceeded.
    #[error("[{code}] {message}")]
    Throttling {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Server side failure (5xx) or an unrecognised error code.
    #[error("[{code}] {message}")]
    Server {
        code: String,
        message: String,
        request_id: Option<String>,
    },
}

impl ServiceError {
    /// Build a service error, choosing the category from the HTTP status and
    /// the error code.
    #[must_use]
    pub fn classify(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: Option<String>,
    ) -> Self {
        let code = code.into();
        let message = message.into();

        if status >= 500 {
            return Self::Server {
                code,
                message,
                request_id,
            };
        }

        let c = code.as_str();
        if status == 429 || c == "ThrottlingException" || c == "TooManyRequestsException" {
            Self::Throttling {
                code,
                message,
                request_id,
            }
        } else if c.starts_with("EncryptionKey") || c == "EncryptionIntegrityChecksFailedException"
        {
            Self::Encryption {
                code,
                message,
                request_id,
            }
        } else if c.ends_with("DoesNotExistException") || c.ends_with("NotFoundException") {
            Self::NotFound {
                code,
                message,
                request_id,
            }
        } else if c.contains("LimitExceeded")
            || c.contains("Exceeded")
            || c.starts_with("Maximum")
            || c.starts_with("TooMany")
            || c.starts_with("NumberOf")
            || c == "FileTooLargeException"
        {
            Self::LimitExceeded {
                code,
                message,
                request_id,
            }
        } else if c.starts_with("Invalid")
            || c.ends_with("RequiredException")
            || c.starts_with("Multiple")
            || c.starts_with("Same")
            || c == "BeforeCommitIdAndAfterCommitIdAreSameException"
            || c == "SourceAndDestinationAreSameException"
            || c == "FileContentAndSourceFileSpecifiedException"
            || c == "ReferenceTypeNotSupportedException"
            || c == "TagPolicyException"
        {
            Self::Validation {
                code,
                message,
                request_id,
            }
        } else if status >= 400 {
            Self::Conflict {
                code,
                message,
                request_id,
            }
        } else {
            Self::Server {
                code,
                message,
                request_id,
            }
        }
    }

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { code, .. }
            | Self::Conflict { code, .. }
            | Self::Validation { code, .. }
            | Self::LimitExceeded { code, .. }
            | Self::Encryption { code, .. }
            | Self::Throttling { code, .. }
            | Self::Server { code, .. } => code,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Validation { message, .. }
            | Self::LimitExceeded { message, .. }
            | Self::Encryption { message, .. }
            | Self::Throttling { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Get the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. }
            | Self::Conflict { request_id, .. }
            | Self::Validation { request_id, .. }
            | Self::LimitExceeded { request_id, .. }
            | Self::Encryption { request_id, .. }
            | Self::Throttling { request_id, .. }
            | Self::Server { request_id, .. } => request_id.as_deref(),
        }
    }

    /// Whether a transport may reasonably resend the same request.
    ///
    /// `ConcurrentReferenceUpdateException` and a temporarily unavailable
    /// encryption key are transient even though they are client-side codes.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Throttling { .. } | Self::Server { .. } => true,
            Self::Conflict { code, .. } => code == "ConcurrentReferenceUpdateException",
            Self::Encryption { code, .. } => code == "EncryptionKeyUnavailableException",
            _ => false,
        }
    }
}
