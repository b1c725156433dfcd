use thiserror::Error;

/// What a field failed at when a value object or entity was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    InvalidFormat,
    Required,
    TooLong,
    EmptyUpdate,
}

/// Local, synchronous rejection of input. Never produced by the network path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            reason: reason.into(),
        }
    }

    pub fn invalid_format(field: &str, reason: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::InvalidFormat, reason)
    }

    pub fn required(field: &str) -> Self {
        Self::new(
            field,
            ValidationErrorKind::Required,
            format!("{} is required", field),
        )
    }
}

/// Normalized failure of a single exchange with the Employee API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("API error: {status} - {body}")]
    Remote { status: u16, body: String },

    /// The request went out but no response came back.
    #[error("Network error: no response received ({message})")]
    Transport { message: String },

    /// The request could not be built or dispatched.
    #[error("Request error: {message}")]
    Request { message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Opaque failure raised by a repository that does not speak HTTP.
    #[error("{message}")]
    Repository { message: String },
}

impl EmployeeError {
    pub fn repository(message: impl Into<String>) -> Self {
        EmployeeError::Repository {
            message: message.into(),
        }
    }

    pub fn config(field: &str, message: impl Into<String>) -> Self {
        EmployeeError::Config {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            EmployeeError::Validation(_) | EmployeeError::Config { .. } => 2,
            EmployeeError::Api(ApiError::Remote { .. }) => 3,
            EmployeeError::Api(_) => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
