use serde::Serialize;

use crate::api::client::{json_body, ApiRequest, HttpMethod};
use crate::validators::{DriveId, FieldValue};

#[derive(Serialize)]
pub(crate) struct RenameRequest {
    newname: FieldValue,

    #[serde(skip)]
    drive_id: DriveId,
}

impl RenameRequest {
    pub(crate) fn new(drive_id: DriveId, newname: FieldValue) -> Self {
        Self { newname, drive_id }
    }
}

impl ApiRequest for RenameRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }

    fn path(&self) -> String {
        format!("/api/drives/{}/rename.json", self.drive_id)
    }
}
