use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use zadarapy::api::{ApiCall, ApiError, ApiOutput, Transport};

/// Stands in for an appliance: remembers every call it receives and answers each with the same
/// canned response.
pub struct RecordingTransport {
    calls: Mutex<Vec<ApiCall>>,
    response: Result<Value, (u16, String)>,
}

impl RecordingTransport {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn failing(status_code: u16, message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Err((status_code, message.to_string())),
        }
    }

    pub fn last_call(&self) -> ApiCall {
        self.calls().pop().expect("no call was made")
    }

    pub fn new(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(response),
        }
    }

    pub fn ok() -> Self {
        Self::new(json!({"response": {"status": 0}}))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn call_api(&self, call: ApiCall) -> Result<ApiOutput, ApiError> {
        let return_type = call.return_type;
        self.calls.lock().unwrap().push(call);

        match &self.response {
            Ok(value) => Ok(ApiOutput::format(value.clone(), return_type)?),
            Err((status_code, message)) => Err(ApiError::Status {
                status_code: *status_code,
                message: message.clone(),
            }),
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
