mod access_key;
mod api_call;
mod dispatch;
mod error;
mod traits;

#[cfg(feature = "http-transport")]
mod session;

pub(crate) use access_key::AccessKey;
pub use api_call::{ApiCall, ApiOutput, HttpMethod, Parameters, ReturnType};
pub use dispatch::dispatch;
pub use error::ApiError;
pub use traits::{ApiRequest, Transport};

pub(crate) use traits::json_body;

#[cfg(feature = "http-transport")]
pub use error::ApiClientError;

#[cfg(feature = "http-transport")]
pub use session::Session;
