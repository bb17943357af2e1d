/// Application-level errors
///
/// The `Display` output of every variant is short enough to be shown to the
/// user verbatim in the error banner.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{context} (HTTP {status})")]
    UnexpectedStatus { context: &'static str, status: u16 },

    #[error("{operation} timed out after {millis}ms")]
    Timeout { operation: &'static str, millis: u64 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// True for failures of the transport layer (unreachable backend, bad
    /// status, undecodable body). Everything the catalog returns falls here.
    pub fn is_transport(&self) -> bool {
        !matches!(self, AppError::InvalidInput(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
