use serde::Serialize;

use crate::api::client::{json_body, ApiRequest, HttpMethod};
use crate::validators::FieldValue;

#[derive(Debug, Serialize)]
pub(crate) struct CreateRequest {
    name: FieldValue,
}

impl CreateRequest {
    pub(crate) fn new(name: FieldValue) -> Self {
        Self { name }
    }
}

impl ApiRequest for CreateRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    const SECURE: bool = true;

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }

    fn path(&self) -> String {
        "/api/zios/accounts.json".to_string()
    }
}
