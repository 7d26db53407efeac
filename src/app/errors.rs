use crate::strapi::StrapiError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Client-side check failed; nothing was sent.
    Validation(String),
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// The bare message, without the variant prefix used by `Display`.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Config(message)
            | Self::Network(message)
            | Self::Timeout(message)
            | Self::Parse(message)
            | Self::Serialization(message)
            | Self::Http { message, .. } => message,
        }
    }

    /// Upstream status, if the error came from a non-2xx answer.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(formatter, "{message}"),
            Self::Config(message) => write!(formatter, "Config error: {message}"),
            Self::Network(message) => write!(formatter, "Network error: {message}"),
            Self::Timeout(message) => write!(formatter, "Timeout: {message}"),
            Self::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            Self::Parse(message) => write!(formatter, "Response error: {message}"),
            Self::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StrapiError> for AppError {
    fn from(err: StrapiError) -> Self {
        match err {
            StrapiError::Api { status, message } => Self::Http {
                status: status.as_u16(),
                message,
            },
            StrapiError::Transport(err) if err.is_timeout() => {
                Self::Timeout("Request timed out. Please try again.".to_string())
            }
            StrapiError::Transport(err) => {
                Self::Network(format!("Unable to reach the server: {err}"))
            }
            StrapiError::Decode(message) => Self::Parse(message),
            StrapiError::Url(err) => Self::Config(err.to_string()),
        }
    }
}
