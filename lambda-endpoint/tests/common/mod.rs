#![allow(dead_code)]

use lambda_endpoint::{
    BoxError, EndpointFactory, EndpointSchema, SchemaOf,
    proxy::{self, ApiGateway, ProxyRequest},
    schema::{ApiRequestSchema, ObjectSchema},
    testing::MockContext,
};
use std::{collections::HashMap, error::Error, fmt};

// ============================================================================
// Platform Setup
// ============================================================================

pub type Gateway = ApiGateway<MockContext>;

pub fn factory() -> EndpointFactory<Gateway> {
    EndpointFactory::new(proxy::settings::<MockContext>())
}

/// Requires string fields `q` (query), `b` (body) and `h` (headers).
pub fn schema() -> SchemaOf<Gateway> {
    EndpointSchema::new(
        ApiRequestSchema::new()
            .query(ObjectSchema::new().string("q"))
            .body(ObjectSchema::new().string("b"))
            .headers(ObjectSchema::new().string("h")),
    )
    .with_summary("echo")
}

pub fn request(body: &str) -> ProxyRequest {
    ProxyRequest {
        http_method: "POST".to_string(),
        path: "/echo".to_string(),
        headers: Some(HashMap::from([("h".to_string(), "h".to_string())])),
        query_string_parameters: Some(HashMap::from([("q".to_string(), "q".to_string())])),
        body: Some(body.to_string()),
        ..Default::default()
    }
}

pub fn valid_request() -> ProxyRequest {
    request(r#"{"b":"b"}"#)
}

pub fn invalid_request() -> ProxyRequest {
    request(r#"{"b":0}"#)
}

pub fn context() -> MockContext {
    MockContext::new("req-1")
}

// ============================================================================
// Test Errors
// ============================================================================

#[derive(Debug)]
pub struct Boom(pub &'static str);

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boom: {}", self.0)
    }
}

impl Error for Boom {}

pub fn boom(origin: &'static str) -> BoxError {
    Box::new(Boom(origin))
}
