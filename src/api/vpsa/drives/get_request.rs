use crate::api::client::ApiRequest;
use crate::validators::DriveId;

#[derive(Debug)]
pub(crate) struct GetRequest {
    drive_id: DriveId,
}

impl GetRequest {
    pub(crate) fn new(drive_id: DriveId) -> Self {
        GetRequest { drive_id }
    }
}

impl ApiRequest for GetRequest {
    fn path(&self) -> String {
        format!("/api/drives/{}.json", self.drive_id)
    }
}
