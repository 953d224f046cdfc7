use async_trait::async_trait;
use serde::Serialize;

use crate::api::client::{ApiCall, ApiError, ApiOutput, HttpMethod, Parameters, ReturnType};

/// Describes one REST endpoint: its fixed method, the path built from already validated
/// identifiers, and whatever parameters or body the endpoint takes. Implementors are constructed
/// only from validated input so producing the call itself can't fail on bad arguments.
pub trait ApiRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    /// VPSA Object Storage endpoints insist on an encrypted channel.
    const SECURE: bool = false;

    fn path(&self) -> String;

    fn parameters(&self) -> Parameters {
        Parameters::new()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        Ok(None)
    }
}

/// The session side of every call: performs the HTTP round trip and formats the answer according
/// to the call's [`ReturnType`]. Errors are whatever the transport or remote API reported.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call_api(&self, call: ApiCall) -> Result<ApiOutput, ApiError>;

    async fn get_api(
        &self,
        path: &str,
        parameters: Parameters,
        return_type: ReturnType,
    ) -> Result<ApiOutput, ApiError> {
        let call = ApiCall::new(HttpMethod::Get, path)
            .with_parameters(parameters)
            .with_return_type(return_type);

        self.call_api(call).await
    }
}

pub(crate) fn json_body<T: Serialize>(payload: &T) -> Result<Option<String>, serde_json::Error> {
    serde_json::to_string(payload).map(Some)
}
