use serde::Serialize;

use crate::api::client::{json_body, ApiRequest, HttpMethod};
use crate::validators::{DriveId, FieldValue};

/// Swaps a RAID group member for an unallocated drive, the latter referenced by display name. The
/// appliance tells this apart from a rename by the `toname` key, both share the same action path.
#[derive(Serialize)]
pub(crate) struct ReplaceRequest {
    toname: FieldValue,

    #[serde(skip)]
    drive_id: DriveId,
}

impl ReplaceRequest {
    pub(crate) fn new(drive_id: DriveId, toname: FieldValue) -> Self {
        Self { toname, drive_id }
    }
}

impl ApiRequest for ReplaceRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }

    fn path(&self) -> String {
        format!("/api/drives/{}/rename.json", self.drive_id)
    }
}
