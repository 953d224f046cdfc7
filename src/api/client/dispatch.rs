use crate::api::client::{ApiCall, ApiOutput, ApiRequest, ReturnType, Transport};
use crate::error::ZadaraResult;

/// The one path every endpoint function takes to the network. By the time a request value
/// exists its arguments have been validated, so this only assembles the call and hands it to
/// the transport, returning whatever comes back.
pub async fn dispatch<T, R>(
    transport: &T,
    request: &R,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput>
where
    T: Transport + ?Sized,
    R: ApiRequest,
{
    let call = ApiCall::new(R::METHOD, request.path())
        .with_parameters(request.parameters())
        .with_body(request.body()?)
        .with_secure(R::SECURE)
        .with_return_type(return_type);

    tracing::debug!(method = %call.method, path = %call.path, secure = call.secure, "dispatching request");

    let output = transport.call_api(call).await?;

    Ok(output)
}
