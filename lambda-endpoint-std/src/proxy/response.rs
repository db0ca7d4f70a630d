use lambda_endpoint_core::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// What a handler passes to `create_response`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    /// JSON body; absent, `null`, `false`, `0` and `""` serialize as `{}`.
    pub body: Option<Value>,
    /// Response headers.
    pub headers: Option<HashMap<String, String>>,
}

impl ApiResponse {
    /// An empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// An API Gateway proxy-integration response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Serialized body.
    #[serde(default)]
    pub body: String,
}

impl ProxyResponse {
    /// Insert or replace a header.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Parse the body back into JSON.
    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Shape a handler payload into a `200` response.
pub fn build_result(payload: ApiResponse) -> ProxyResponse {
    let body = match payload.body {
        Some(body) if !is_empty_body(&body) => body,
        _ => Value::Object(Map::new()),
    };

    ProxyResponse {
        status_code: 200,
        headers: payload.headers.unwrap_or_default(),
        body: body.to_string(),
    }
}

/// Shape a validation failure into a `400` response.
pub fn build_error_result(error: &ValidationError) -> ProxyResponse {
    ProxyResponse {
        status_code: 400,
        headers: HashMap::new(),
        body: json!({ "error": error }).to_string(),
    }
}
