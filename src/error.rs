use std::fmt;

/// Custom error type for CircleCI operations
#[derive(Debug)]
pub enum CircleError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Project slug is not of the form `vcs_type/org/project`
    InvalidSlug(String),
    /// Failed to read the variables file
    EnvFile(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Interactive prompt failed
    Prompt(String),
}

/// Coarse classification of a failed remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resource does not exist (404)
    NotFound,
    /// The token is missing, invalid or lacks permissions (401, 403)
    Unauthorized,
    /// The API is throttling requests (429)
    RateLimited,
    /// Server-side or network failure that may succeed on a later run
    Transient,
    /// Anything else
    Unknown,
}

impl CircleError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CircleError::Api { status, .. } => ErrorKind::from_status(*status),
            CircleError::Http(e) => {
                if e.is_timeout() || e.is_connect() {
                    ErrorKind::Transient
                } else if let Some(status) = e.status() {
                    ErrorKind::from_status(status.as_u16())
                } else {
                    ErrorKind::Unknown
                }
            }
            _ => ErrorKind::Unknown,
        }
    }
}

impl ErrorKind {
    /// Map an HTTP status code to an error kind
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimited,
            500..=599 => ErrorKind::Transient,
            _ => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Unauthorized => write!(f, "unauthorized"),
            ErrorKind::RateLimited => write!(f, "rate limited"),
            ErrorKind::Transient => write!(f, "transient"),
            ErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircleError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CircleError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CircleError::InvalidSlug(slug) => write!(
                f,
                "Invalid project slug '{}'. Expected format: vcs_type/org/project",
                slug
            ),
            CircleError::EnvFile(msg) => write!(f, "{}", msg),
            CircleError::Json(msg) => write!(f, "JSON error: {}", msg),
            CircleError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CircleError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for CircleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CircleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CircleError {
    fn from(err: reqwest::Error) -> Self {
        CircleError::Http(err)
    }
}

impl From<serde_json::Error> for CircleError {
    fn from(err: serde_json::Error) -> Self {
        CircleError::Json(err.to_string())
    }
}

impl From<dialoguer::Error> for CircleError {
    fn from(err: dialoguer::Error) -> Self {
        CircleError::Prompt(err.to_string())
    }
}

impl From<std::io::Error> for CircleError {
    fn from(err: std::io::Error) -> Self {
        CircleError::Prompt(err.to_string())
    }
}

/// Result type alias for CircleCI operations
pub type Result<T> = std::result::Result<T, CircleError>;
