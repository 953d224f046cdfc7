//! VPSA Object Storage accounts. An account is a collection of containers, usually one per
//! tenant, and users are granted access per account. Accounts are addressed by their 32
//! character hex `id` as reported by [`get_all`].

mod cleanup_request;
mod create_request;
mod delete_request;
mod disable_request;
mod enable_request;
mod get_all_request;
mod get_request;
mod get_users_request;

use cleanup_request::CleanupRequest;
use create_request::CreateRequest;
use delete_request::DeleteRequest;
use disable_request::DisableRequest;
use enable_request::EnableRequest;
use get_all_request::GetAllRequest;
use get_request::GetRequest;
use get_users_request::GetUsersRequest;

use crate::api::client::{dispatch, ApiOutput, ReturnType, Transport};
use crate::error::ZadaraResult;
use crate::validators::{verify_force, verify_start_limit, AccountId, FieldValue};

pub async fn cleanup<T: Transport + ?Sized>(
    transport: &T,
    account_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = CleanupRequest::new(account_id.parse()?);
    dispatch(transport, &request, return_type).await
}

/// Creates an account labelled `name`, for example `accounting`.
pub async fn create<T: Transport + ?Sized>(
    transport: &T,
    name: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = CreateRequest::new(FieldValue::parse("name", name)?);
    dispatch(transport, &request, return_type).await
}

/// `force` is `"YES"` or `"NO"` in any case, `None` meaning `"NO"`. Without force the appliance
/// refuses the deletion on any warning instead of ignoring the non-critical ones.
pub async fn delete<T: Transport + ?Sized>(
    transport: &T,
    account_id: &str,
    force: Option<&str>,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let account_id: AccountId = account_id.parse()?;
    let force = force.map(verify_force).transpose()?.unwrap_or_default();

    let request = DeleteRequest::new(account_id, force);
    dispatch(transport, &request, return_type).await
}

pub async fn disable<T: Transport + ?Sized>(
    transport: &T,
    account_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = DisableRequest::new(account_id.parse()?);
    dispatch(transport, &request, return_type).await
}

pub async fn enable<T: Transport + ?Sized>(
    transport: &T,
    account_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = EnableRequest::new(account_id.parse()?);
    dispatch(transport, &request, return_type).await
}

pub async fn get<T: Transport + ?Sized>(
    transport: &T,
    account_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = GetRequest::new(account_id.parse()?);
    dispatch(transport, &request, return_type).await
}

pub async fn get_all<T: Transport + ?Sized>(
    transport: &T,
    start: Option<i64>,
    limit: Option<i64>,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = GetAllRequest::new(verify_start_limit(start, limit)?);
    dispatch(transport, &request, return_type).await
}

pub async fn get_all_users<T: Transport + ?Sized>(
    transport: &T,
    account_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = GetUsersRequest::new(account_id.parse()?);
    dispatch(transport, &request, return_type).await
}
