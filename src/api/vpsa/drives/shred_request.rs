use crate::api::client::{ApiRequest, HttpMethod};
use crate::validators::DriveId;

/// Starts wiping every block of an unallocated drive. Can take a long time to finish.
pub(crate) struct ShredRequest {
    drive_id: DriveId,
}

impl ShredRequest {
    pub(crate) fn new(drive_id: DriveId) -> Self {
        Self { drive_id }
    }
}

impl ApiRequest for ShredRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/api/drives/{}/shred.json", self.drive_id)
    }
}
