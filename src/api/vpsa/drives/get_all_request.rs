use crate::api::client::{ApiRequest, Parameters};

pub(crate) struct GetAllRequest {
    pagination: Parameters,
}

impl GetAllRequest {
    pub(crate) fn new(pagination: Parameters) -> Self {
        Self { pagination }
    }
}

impl ApiRequest for GetAllRequest {
    fn parameters(&self) -> Parameters {
        self.pagination.clone()
    }

    fn path(&self) -> String {
        "/api/drives.json".to_string()
    }
}
