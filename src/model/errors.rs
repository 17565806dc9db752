use serde::Serialize;
use thiserror::Error;

/// Why an upstream page could not be fetched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream timed out")]
    Timeout,

    #[error("upstream returned status {code}")]
    Status { code: u16 },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = e.status() {
            FetchError::Status {
                code: status.as_u16(),
            }
        } else {
            FetchError::Unreachable(e.to_string())
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Upstream(#[from] FetchError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body for router-level failures.
#[derive(Serialize, Clone, Debug)]
pub struct ServerError {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ServerError {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ServerError {
            ok: false,
            error: message.into(),
            path: None,
        }
    }

    pub fn not_found<S: Into<String>>(path: S) -> Self {
        ServerError {
            path: Some(path.into()),
            ..ServerError::with_message("Not found")
        }
    }
}

impl From<String> for ServerError {
    fn from(str: String) -> Self {
        ServerError::with_message(str)
    }
}

impl From<&str> for ServerError {
    fn from(str: &str) -> Self {
        ServerError::with_message(str)
    }
}
