use crate::api::client::{ApiRequest, Parameters};

/// Drives attached to the VPSA that no RAID group has claimed yet.
pub(crate) struct GetFreeRequest {
    pagination: Parameters,
}

impl GetFreeRequest {
    pub(crate) fn new(pagination: Parameters) -> Self {
        Self { pagination }
    }
}

impl ApiRequest for GetFreeRequest {
    fn parameters(&self) -> Parameters {
        self.pagination.clone()
    }

    fn path(&self) -> String {
        "/api/drives/free.json".to_string()
    }
}
