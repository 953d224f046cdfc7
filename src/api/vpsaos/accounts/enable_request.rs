use crate::api::client::{ApiRequest, HttpMethod};
use crate::validators::AccountId;

pub(crate) struct EnableRequest {
    account_id: AccountId,
}

impl EnableRequest {
    pub(crate) fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl ApiRequest for EnableRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    const SECURE: bool = true;

    fn path(&self) -> String {
        format!("/api/zios/accounts/{}/enable.json", self.account_id)
    }
}
