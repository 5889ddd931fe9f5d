// Emby client errors

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Emby host is not configured; pass a host or set EMBY_HOST")]
    MissingHost,

    #[error("API key contains characters that are not valid in a header")]
    InvalidApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Emby returned HTTP {status} for {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },
}
