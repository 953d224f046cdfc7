use crate::api::client::ApiRequest;
use crate::validators::AccountId;

pub(crate) struct GetRequest {
    account_id: AccountId,
}

impl GetRequest {
    pub(crate) fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl ApiRequest for GetRequest {
    const SECURE: bool = true;

    fn path(&self) -> String {
        format!("/api/zios/accounts/{}.json", self.account_id)
    }
}
