//! API Gateway proxy-integration preset.
//!
//! - [`ProxyRequest`] / [`ProxyResponse`] - the platform-native shapes
//! - [`ApiEvent`] - the inner event: parsed JSON body, query, headers
//! - [`ApiResponse`] - the payload handlers pass to `create_response`
//! - [`settings`] - the factory settings wiring the three together

mod request;
mod response;

pub use request::{ApiEvent, ProxyError, ProxyRequest, modify_event};
pub use response::{ApiResponse, ProxyResponse, build_error_result, build_result};

use lambda_endpoint_core::{FactorySettings, Platform};
use std::marker::PhantomData;

/// The API Gateway proxy platform, generic over the invocation context.
///
/// With the `lambda` feature of `lambda-endpoint`, `C` is
/// `lambda_runtime::Context`. Tests use
/// [`MockContext`](crate::testing::MockContext).
pub struct ApiGateway<C>(PhantomData<fn() -> C>);

impl<C> Platform for ApiGateway<C>
where
    C: Clone + Send + Sync + 'static,
{
    type RawEvent = ProxyRequest;
    type Event = ApiEvent;
    type Context = C;
    type Payload = ApiResponse;
    type Result = ProxyResponse;
}

/// Factory settings for the API Gateway proxy platform.
///
/// - the body is parsed as JSON (`{}` when absent), query parameters default to empty
/// - successful payloads become `200` responses with a JSON body
/// - validation failures become `400` responses with body `{"error": <ValidationError>}`
pub fn settings<C>() -> FactorySettings<ApiGateway<C>>
where
    C: Clone + Send + Sync + 'static,
{
    FactorySettings::<ApiGateway<C>>::new(
        |raw: ProxyRequest| Ok(modify_event(raw)?),
        build_result,
        build_error_result,
    )
}
