use crate::api::client::ApiRequest;
use crate::validators::AccountId;

pub(crate) struct GetUsersRequest {
    account_id: AccountId,
}

impl GetUsersRequest {
    pub(crate) fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl ApiRequest for GetUsersRequest {
    const SECURE: bool = true;

    fn path(&self) -> String {
        format!("/api/zios/accounts/{}/users.json", self.account_id)
    }
}
