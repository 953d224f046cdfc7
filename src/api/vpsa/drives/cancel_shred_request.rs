use crate::api::client::{ApiRequest, HttpMethod};
use crate::validators::DriveId;

pub(crate) struct CancelShredRequest {
    drive_id: DriveId,
}

impl CancelShredRequest {
    pub(crate) fn new(drive_id: DriveId) -> Self {
        Self { drive_id }
    }
}

impl ApiRequest for CancelShredRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/api/drives/{}/cancel_shred.json", self.drive_id)
    }
}
