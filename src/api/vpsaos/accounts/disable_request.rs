use crate::api::client::{ApiRequest, HttpMethod};
use crate::validators::AccountId;

pub(crate) struct DisableRequest {
    account_id: AccountId,
}

impl DisableRequest {
    pub(crate) fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl ApiRequest for DisableRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    const SECURE: bool = true;

    fn path(&self) -> String {
        format!("/api/zios/accounts/{}/disable.json", self.account_id)
    }
}
