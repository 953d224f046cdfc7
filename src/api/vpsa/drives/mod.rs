//! Physical drives attached to a VPSA. Drives are addressed by their volume name, for example
//! `volume-00002a73`, as reported by [`get_all`].

mod cancel_shred_request;
mod get_all_request;
mod get_free_request;
mod get_request;
mod performance_request;
mod remove_request;
mod rename_request;
mod replace_request;
mod shred_request;

use cancel_shred_request::CancelShredRequest;
use get_all_request::GetAllRequest;
use get_free_request::GetFreeRequest;
use get_request::GetRequest;
use performance_request::PerformanceRequest;
use remove_request::RemoveRequest;
use rename_request::RenameRequest;
use replace_request::ReplaceRequest;
use shred_request::ShredRequest;

use crate::api::client::{dispatch, ApiOutput, ReturnType, Transport};
use crate::error::ZadaraResult;
use crate::validators::{verify_interval, verify_start_limit, DriveId, FieldValue};

/// Sampling interval used by [`performance`] when the caller has no preference.
pub const DEFAULT_PERFORMANCE_INTERVAL: i64 = 1;

pub async fn cancel_shred<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = CancelShredRequest::new(drive_id.parse()?);
    dispatch(transport, &request, return_type).await
}

pub async fn get<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = GetRequest::new(drive_id.parse()?);
    dispatch(transport, &request, return_type).await
}

/// Every drive attached to the VPSA. Without `start` or `limit` the appliance's own paging
/// defaults apply.
pub async fn get_all<T: Transport + ?Sized>(
    transport: &T,
    start: Option<i64>,
    limit: Option<i64>,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = GetAllRequest::new(verify_start_limit(start, limit)?);
    dispatch(transport, &request, return_type).await
}

pub async fn get_free<T: Transport + ?Sized>(
    transport: &T,
    start: Option<i64>,
    limit: Option<i64>,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = GetFreeRequest::new(verify_start_limit(start, limit)?);
    dispatch(transport, &request, return_type).await
}

/// Metering statistics for one drive, collected over `interval` seconds.
pub async fn performance<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    interval: i64,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let drive_id: DriveId = drive_id.parse()?;
    let interval = verify_interval(interval)?;

    let request = PerformanceRequest::new(drive_id, interval);
    dispatch(transport, &request, return_type).await
}

/// Only works on drives no RAID group is using.
pub async fn remove<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = RemoveRequest::new(drive_id.parse()?);
    dispatch(transport, &request, return_type).await
}

/// Changes the drive's display name. The volume name used to address it stays the same.
pub async fn rename<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    newname: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let drive_id: DriveId = drive_id.parse()?;
    let newname = FieldValue::parse("newname", newname)?;

    let request = RenameRequest::new(drive_id, newname);
    dispatch(transport, &request, return_type).await
}

/// Replaces `drive_id` inside its RAID group with the unallocated drive whose display name is
/// `toname`, for example `drive-000`.
pub async fn replace<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    toname: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let drive_id: DriveId = drive_id.parse()?;
    let toname = FieldValue::parse("toname", toname)?;

    let request = ReplaceRequest::new(drive_id, toname);
    dispatch(transport, &request, return_type).await
}

pub async fn shred<T: Transport + ?Sized>(
    transport: &T,
    drive_id: &str,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let request = ShredRequest::new(drive_id.parse()?);
    dispatch(transport, &request, return_type).await
}
