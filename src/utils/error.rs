use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("{message}")]
    UpstreamNotFoundError { message: String },

    #[error("{message}")]
    UpstreamProtocolError { message: String },

    #[error("{message}")]
    RequisitionNotFoundError { message: String },

    #[error("{message}")]
    UpstreamRequestError { message: String },

    #[error("Upstream call failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied something unusable.
    Input,
    /// The target application answered, but not the way we need.
    Upstream,
    Internal,
}

impl LookupError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn upstream_not_found(message: impl Into<String>) -> Self {
        Self::UpstreamNotFoundError {
            message: message.into(),
        }
    }

    pub fn upstream_protocol(message: impl Into<String>) -> Self {
        Self::UpstreamProtocolError {
            message: message.into(),
        }
    }

    /// HTTP status the failure is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } | Self::UpstreamNotFoundError { .. } => 422,
            Self::RequisitionNotFoundError { .. } => 404,
            Self::UpstreamProtocolError { .. } | Self::UpstreamRequestError { .. } => 500,
            _ => 500,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } | Self::UpstreamNotFoundError { .. } => {
                ErrorCategory::Input
            }
            Self::UpstreamProtocolError { .. }
            | Self::RequisitionNotFoundError { .. }
            | Self::UpstreamRequestError { .. }
            | Self::ApiError(_) => ErrorCategory::Upstream,
            Self::SerializationError(_) | Self::PatternError(_) | Self::ConfigError { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
