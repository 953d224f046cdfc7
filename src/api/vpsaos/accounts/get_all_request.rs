use crate::api::client::{ApiRequest, Parameters};

pub(crate) struct GetAllRequest {
    pagination: Parameters,
}

impl GetAllRequest {
    pub(crate) fn new(pagination: Parameters) -> Self {
        Self { pagination }
    }
}

// Unlike the rest of the account endpoints the listing doesn't demand an encrypted channel.
impl ApiRequest for GetAllRequest {
    fn parameters(&self) -> Parameters {
        self.pagination.clone()
    }

    fn path(&self) -> String {
        "/api/zios/accounts.json".to_string()
    }
}
