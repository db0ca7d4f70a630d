//! AWS Lambda runtime integration.
//!
//! ```rust,ignore
//! use lambda_endpoint::{EndpointFactory, lambda, proxy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     let factory = EndpointFactory::new(proxy::settings::<lambda_runtime::Context>());
//!     let endpoint = factory.build(schema, handler);
//!     lambda::run(endpoint).await
//! }
//! ```

use crate::endpoint::Endpoint;
use lambda_endpoint_core::Platform;
use lambda_endpoint_std::proxy::ApiGateway;
use lambda_runtime::{LambdaEvent, service_fn};
use serde::{Serialize, de::DeserializeOwned};

/// The API Gateway proxy preset bound to the Lambda invocation context.
pub type LambdaApiGateway = ApiGateway<lambda_runtime::Context>;

/// Serve `endpoint` on the Lambda runtime until the runtime shuts down.
///
/// Dispatch failures are reported to the runtime as invocation errors.
pub async fn run<P>(endpoint: Endpoint<P>) -> Result<(), lambda_runtime::Error>
where
    P: Platform<Context = lambda_runtime::Context>,
    P::RawEvent: DeserializeOwned,
    P::Result: Serialize,
{
    lambda_runtime::run(service_fn(move |event: LambdaEvent<P::RawEvent>| {
        let endpoint = endpoint.clone();
        async move {
            let LambdaEvent { payload, context } = event;
            endpoint
                .call(payload, context)
                .await
                .map_err(lambda_runtime::Error::from)
        }
    }))
    .await
}
