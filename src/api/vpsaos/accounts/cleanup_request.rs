use crate::api::client::{ApiRequest, HttpMethod};
use crate::validators::AccountId;

/// Removes what is left of an account after it was deleted, its containers and objects included.
pub(crate) struct CleanupRequest {
    account_id: AccountId,
}

impl CleanupRequest {
    pub(crate) fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl ApiRequest for CleanupRequest {
    const METHOD: HttpMethod = HttpMethod::Delete;

    const SECURE: bool = true;

    fn path(&self) -> String {
        format!("/api/zios/accounts/{}/cleanup.json", self.account_id)
    }
}
