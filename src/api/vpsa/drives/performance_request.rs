use serde_json::Value;

use crate::api::client::{ApiRequest, Parameters};
use crate::validators::DriveId;

pub(crate) struct PerformanceRequest {
    drive_id: DriveId,
    interval: u32,
}

impl PerformanceRequest {
    pub(crate) fn new(drive_id: DriveId, interval: u32) -> Self {
        Self { drive_id, interval }
    }
}

impl ApiRequest for PerformanceRequest {
    fn parameters(&self) -> Parameters {
        Parameters::from([("interval".to_string(), Value::from(self.interval))])
    }

    fn path(&self) -> String {
        format!("/api/drives/{}/performance.json", self.drive_id)
    }
}
