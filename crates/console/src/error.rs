use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Session expired, please log in again")]
    Expired,
    /// The server refused the request and said why.
    #[error("{0}")]
    Rejected(String),
    /// Caught locally before anything was sent.
    #[error("{0}")]
    Invalid(String),
    #[error("a submission is already in flight")]
    Busy,
    #[error("no member named {0}")]
    Unknown(String),
    #[error("server unreachable: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
