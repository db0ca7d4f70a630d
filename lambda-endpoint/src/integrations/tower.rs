//! Tower integration for lambda-endpoint.
//!
//! [`Endpoint`] implements `tower::Service<(RawEvent, Context)>`, so tower
//! middleware (timeouts, rate limits, ...) can wrap a dispatch:
//!
//! ```rust,ignore
//! use tower::Service;
//!
//! let mut service = endpoint.clone();
//! let result = service.call((request, context)).await?;
//! ```

use crate::endpoint::Endpoint;
use futures::{FutureExt, future::BoxFuture};
use lambda_endpoint_core::{DispatchError, Platform};
use std::task::{Context, Poll};

impl<P: Platform> ::tower::Service<(P::RawEvent, P::Context)> for Endpoint<P> {
    type Response = P::Result;
    type Error = DispatchError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Endpoints hold no resources that could be exhausted
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, (raw_event, raw_context): (P::RawEvent, P::Context)) -> Self::Future {
        let endpoint = self.clone();
        async move { endpoint.call(raw_event, raw_context).await }.boxed()
    }
}
