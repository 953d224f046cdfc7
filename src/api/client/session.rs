use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

use crate::api::client::{
    AccessKey, ApiCall, ApiClientError, ApiError, ApiOutput, HttpMethod, Parameters, Transport,
};
use crate::config::SessionConfig;

const ACCESS_KEY_HEADER: &str = "X-Access-Key";

const LOGGED_BODY_LIMIT: usize = 500;

const TRACED_BODY_LIMIT: usize = 2000;

/// An HTTP session with one appliance. Every endpoint function takes one of these (or any other
/// [`Transport`]) and performs exactly one round trip through it.
#[derive(Clone, Debug)]
pub struct Session {
    client: Client,
    host: String,
    https: bool,
    key: AccessKey,
    port: Option<u16>,
}

impl Session {
    pub fn from_config(config: &SessionConfig) -> Result<Self, ApiClientError> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let client = default_reqwest_client(timeout)?;

        let session = Self {
            client,
            host: config.host.clone(),
            https: config.https,
            key: config.access_key().clone(),
            port: config.port,
        };

        session.validate()?;

        tracing::debug!(
            host = %session.host,
            port = ?session.port,
            https = session.https,
            key = %session.key.masked(),
            "created session"
        );

        Ok(session)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_https(&self) -> bool {
        self.https
    }

    /// A session for `host` over HTTPS on the standard port.
    pub fn new(host: &str, key: &str) -> Result<Self, ApiClientError> {
        Self::from_config(&SessionConfig::new(host, key))
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub(crate) fn request_url(
        &self,
        path: &str,
        parameters: &Parameters,
        secure: bool,
    ) -> Result<Url, url::ParseError> {
        let scheme = if self.https || secure { "https" } else { "http" };

        let authority = match self.port {
            Some(port) => format!("{}:{port}", self.host),
            None => self.host.clone(),
        };

        let mut url = Url::parse(&format!("{scheme}://{authority}"))?.join(path)?;

        if !parameters.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in parameters {
                query.append_pair(key, &query_value(value));
            }
        }

        Ok(url)
    }

    fn validate(&self) -> Result<(), ApiClientError> {
        if self.host.is_empty() || self.host.contains('/') {
            return Err(ApiClientError::InvalidHost(self.host.clone()));
        }

        self.request_url("/", &Parameters::new(), false)?;
        access_key_header(&self.key).map_err(|_| ApiClientError::InvalidAccessKey)?;

        Ok(())
    }
}

#[async_trait]
impl Transport for Session {
    async fn call_api(&self, call: ApiCall) -> Result<ApiOutput, ApiError> {
        let url = self.request_url(&call.path, &call.parameters, call.secure)?;
        tracing::debug!(method = %call.method, %url, "sending request");

        let mut request = self
            .client
            .request(reqwest_method(call.method), url)
            .header(ACCESS_KEY_HEADER, access_key_header(&self.key)?);

        if let Some(body) = call.body {
            tracing::trace!(%body, "request body");
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(%status, "received response");
        tracing::trace!(body = truncated(&text, TRACED_BODY_LIMIT), "response body");

        if !status.is_success() {
            tracing::warn!(%status, body = truncated(&text, LOGGED_BODY_LIMIT), "request failed");

            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|value| envelope_message(&value))
                .unwrap_or_else(|| truncated(&text, LOGGED_BODY_LIMIT).to_string());

            return Err(ApiError::Status {
                status_code: status.as_u16(),
                message,
            });
        }

        let value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        check_envelope(&value)?;

        Ok(ApiOutput::format(value, call.return_type)?)
    }
}

/// VPSA responses wrap their payload in `{"response": {"status": 0, ...}}` and report failures
/// with a non-zero status next to a message, even on an HTTP 200.
pub(crate) fn check_envelope(value: &Value) -> Result<(), ApiError> {
    let Some(status) = value.pointer("/response/status").and_then(Value::as_i64) else {
        return Ok(());
    };

    if status == 0 {
        return Ok(());
    }

    let message = envelope_message(value).unwrap_or_else(|| "no message provided".to_string());
    tracing::warn!(status, %message, "VPSA reported an error");

    Err(ApiError::Vpsa { status, message })
}

fn access_key_header(key: &AccessKey) -> Result<HeaderValue, reqwest::header::InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(key.expose())?;
    value.set_sensitive(true);
    Ok(value)
}

fn default_reqwest_client(timeout: Option<Duration>) -> Result<Client, ApiClientError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .default_headers(default_headers)
        .user_agent(crate::version::user_agent());

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

fn envelope_message(value: &Value) -> Option<String> {
    value
        .pointer("/response/message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Strings go on the wire as-is, everything else in its JSON form.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

fn truncated(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
