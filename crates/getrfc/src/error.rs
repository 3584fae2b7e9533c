//! Error types for RFC fetching.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status.
    #[error("HTTP {status} {reason} for {url}")]
    Status {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body from {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("URL template has no `{{}}` placeholder: {0}")]
    InvalidTemplate(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
