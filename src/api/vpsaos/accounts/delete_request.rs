use serde::Serialize;

use crate::api::client::{json_body, ApiRequest, HttpMethod};
use crate::validators::{AccountId, Force};

#[derive(Debug, Serialize)]
pub(crate) struct DeleteRequest {
    force: Force,

    #[serde(skip)]
    account_id: AccountId,
}

impl DeleteRequest {
    pub(crate) fn new(account_id: AccountId, force: Force) -> Self {
        Self { force, account_id }
    }
}

impl ApiRequest for DeleteRequest {
    const METHOD: HttpMethod = HttpMethod::Delete;

    const SECURE: bool = true;

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }

    fn path(&self) -> String {
        format!("/api/zios/accounts/{}.json", self.account_id)
    }
}
