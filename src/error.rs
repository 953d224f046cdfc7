use crate::api::ApiError;
use crate::config::ConfigError;
use crate::validators::InvalidArgument;

/// Everything an endpoint function can fail with. Argument problems are always reported before
/// any request leaves the process.
#[derive(Debug, thiserror::Error)]
pub enum ZadaraError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[cfg(feature = "http-transport")]
    #[error("unable to set up HTTP session: {0}")]
    Client(#[from] crate::api::ApiClientError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("unable to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ZadaraError {
    /// Whether the failure happened while checking arguments, meaning nothing was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ZadaraError::InvalidArgument(_))
    }
}

pub type ZadaraResult<T> = Result<T, ZadaraError>;
