#[cfg(feature = "http-transport")]
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("provided host wasn't valid: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("access key contains characters that can't be sent in a header")]
    InvalidAccessKey,

    #[error("host must be a bare hostname or address, got '{0}'")]
    InvalidHost(String),

    #[error("underlying HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Failures reported by a transport. The endpoint layer passes these through untouched.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API returned {status_code} response with message: {message}")]
    Status { status_code: u16, message: String },

    #[error("VPSA rejected the request with status {status}: {message}")]
    Vpsa { status: i64, message: String },

    #[error("response body wasn't valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[cfg(feature = "http-transport")]
    #[error("access key can't be sent in a header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[cfg(feature = "http-transport")]
    #[error("request URL is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[cfg(feature = "http-transport")]
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
