//! Platform integrations.
//!
//! - `tower`: [`Endpoint`](crate::Endpoint) as a `tower::Service`
//! - `lambda`: serve an endpoint on the AWS Lambda runtime

#[cfg(feature = "lambda")]
pub mod lambda;
#[cfg(feature = "tower")]
pub mod tower;
