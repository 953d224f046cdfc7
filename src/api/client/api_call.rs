use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde_json::Value;

/// Query parameters of a call. Keys whose value was never supplied are simply absent, a `null`
/// never reaches the wire.
pub type Parameters = BTreeMap<String, Value>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HttpMethod {
    Delete,
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format selector. Only affects how a successful response is handed back, never what is
/// validated or sent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReturnType {
    #[default]
    Native,
    Json,
}

impl ReturnType {
    /// Interprets the loose string flag used by scripts and config files: exactly `"json"`
    /// selects JSON text, anything else (including nothing) the native structure.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("json") => ReturnType::Json,
            _ => ReturnType::Native,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutput {
    Value(Value),
    Json(String),
}

impl ApiOutput {
    pub fn as_json(&self) -> Option<&str> {
        match self {
            ApiOutput::Json(text) => Some(text),
            ApiOutput::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ApiOutput::Value(value) => Some(value),
            ApiOutput::Json(_) => None,
        }
    }

    pub fn format(value: Value, return_type: ReturnType) -> Result<Self, serde_json::Error> {
        match return_type {
            ReturnType::Native => Ok(ApiOutput::Value(value)),
            ReturnType::Json => Ok(ApiOutput::Json(serde_json::to_string(&value)?)),
        }
    }
}

/// Everything a transport needs to perform one request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    pub method: HttpMethod,
    pub path: String,
    pub parameters: Parameters,
    pub body: Option<String>,

    /// Forces an encrypted channel for this call even when the session defaults to plain HTTP.
    pub secure: bool,

    pub return_type: ReturnType,
}

impl ApiCall {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            parameters: Parameters::new(),
            body: None,
            secure: false,
            return_type: ReturnType::default(),
        }
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}
