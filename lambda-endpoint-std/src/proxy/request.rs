use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// An API Gateway proxy-integration request as delivered by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    /// HTTP method, e.g. `POST`.
    pub http_method: String,
    /// Request path.
    pub path: String,
    /// Request headers.
    pub headers: Option<HashMap<String, String>>,
    /// Query string parameters; `null` when the request has none.
    pub query_string_parameters: Option<HashMap<String, String>>,
    /// Path parameters captured by the route.
    pub path_parameters: Option<HashMap<String, String>>,
    /// Raw request body.
    pub body: Option<String>,
    /// Whether `body` is base64 encoded.
    pub is_base64_encoded: bool,
    /// The resource template the route matched, e.g. `/items/{id}`.
    pub resource: String,
    /// Request metadata: request id, identity, authorizer output.
    pub request_context: Value,
    /// Stage variables of the deployment.
    pub stage_variables: Option<HashMap<String, String>>,
    /// Every other field of the event, e.g. the `multiValue*` maps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The adapted request that schemas validate and handlers receive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiEvent {
    /// HTTP method.
    pub method: String,
    /// Request path.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Path parameters.
    pub path_parameters: HashMap<String, String>,
    /// Parsed JSON body.
    pub body: Value,
    /// The resource template the route matched.
    pub resource: String,
    /// Request metadata as delivered by the platform.
    pub request_context: Value,
    /// Stage variables.
    pub stage_variables: HashMap<String, String>,
    /// Remaining event fields, keyed by their wire names.
    pub extra: Map<String, Value>,
}

impl ApiEvent {
    /// Look up a header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Look up a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// The authorizer output in the request context, if the route has one.
    pub fn authorizer(&self) -> Option<&Value> {
        self.request_context.get("authorizer")
    }

    /// Deserialize the body into a typed value.
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }
}

/// Failure to adapt a [`ProxyRequest`].
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The body is not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Adapt a proxy request: parse the body and default the optional maps.
///
/// An absent or empty body parses as `{}`.
pub fn modify_event(raw: ProxyRequest) -> Result<ApiEvent, ProxyError> {
    let body = match raw.body.as_deref() {
        Some(body) if !body.is_empty() => serde_json::from_str(body)?,
        _ => Value::Object(Map::new()),
    };

    Ok(ApiEvent {
        method: raw.http_method,
        path: raw.path,
        headers: raw.headers.unwrap_or_default(),
        query: raw.query_string_parameters.unwrap_or_default(),
        path_parameters: raw.path_parameters.unwrap_or_default(),
        body,
        resource: raw.resource,
        request_context: raw.request_context,
        stage_variables: raw.stage_variables.unwrap_or_default(),
        extra: raw.extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_modify_event_extracts_sections() {
        let raw: ProxyRequest = serde_json::from_value(json!({
            "httpMethod": "POST",
            "path": "/items",
            "queryStringParameters": { "q": "q" },
            "body": "{\"b\":\"b\"}",
            "headers": { "h": "h" }
        }))
        .unwrap();

        let event = modify_event(raw).unwrap();
        assert_eq!(event.method, "POST");
        assert_eq!(event.query_param("q"), Some("q"));
        assert_eq!(event.header("H"), Some("h"));
        assert_eq!(event.body, json!({ "b": "b" }));
    }

    #[test]
    fn test_missing_parts_default() {
        let raw: ProxyRequest = serde_json::from_value(json!({
            "queryStringParameters": null,
            "body": null
        }))
        .unwrap();

        let event = modify_event(raw).unwrap();
        assert!(event.query.is_empty());
        assert!(event.headers.is_empty());
        assert_eq!(event.body, json!({}));
    }

    #[test]
    fn test_modify_event_keeps_request_context() {
        let raw: ProxyRequest = serde_json::from_value(json!({
            "httpMethod": "GET",
            "path": "/x",
            "resource": "/x",
            "requestContext": {
                "requestId": "abc",
                "authorizer": { "claims": { "sub": "user-1" } }
            },
            "stageVariables": { "stage": "dev" },
            "multiValueHeaders": { "h": ["a", "b"] }
        }))
        .unwrap();

        let event = modify_event(raw).unwrap();
        assert_eq!(event.resource, "/x");
        assert_eq!(
            event.authorizer().map(|authorizer| &authorizer["claims"]["sub"]),
            Some(&json!("user-1"))
        );
        assert_eq!(event.request_context["requestId"], json!("abc"));
        assert_eq!(event.stage_variables.get("stage").map(String::as_str), Some("dev"));
        assert_eq!(event.extra["multiValueHeaders"], json!({ "h": ["a", "b"] }));
        assert!(!event.extra.contains_key("requestContext"));
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let event = modify_event(ProxyRequest {
            body: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(event.body, json!({}));
    }

    #[test]
    fn test_body_as_typed() {
        #[derive(Deserialize)]
        struct Item {
            b: String,
        }

        let event = ApiEvent {
            body: json!({ "b": "value" }),
            ..Default::default()
        };
        let item: Item = event.body_as().unwrap();
        assert_eq!(item.b, "value");
    }
}
