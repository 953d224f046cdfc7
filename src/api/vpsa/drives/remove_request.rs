use crate::api::client::{ApiRequest, HttpMethod};
use crate::validators::DriveId;

/// Detaches an unallocated drive from the VPSA.
pub(crate) struct RemoveRequest {
    drive_id: DriveId,
}

impl RemoveRequest {
    pub(crate) fn new(drive_id: DriveId) -> Self {
        Self { drive_id }
    }
}

impl ApiRequest for RemoveRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/api/drives/{}/remove.json", self.drive_id)
    }
}
