//! # Endpoint Handlers
//!
//! The terminal point of a dispatch: user business logic that receives the
//! adapted event and the augmented context, and produces the platform result
//! (usually through [`EndpointContext::create_response`]).
//!
//! Handlers are plain async closures:
//!
//! ```rust,ignore
//! let handler = |event: ApiEvent, context: EndpointContext<ApiGateway<Ctx>>| async move {
//!     Ok(context.create_response(ApiResponse::new().with_body(event.body)))
//! };
//! ```

use crate::{context::EndpointContext, error::BoxError, platform::Platform};
use futures::{FutureExt, future::BoxFuture};
use std::{future::Future, sync::Arc};

/// A type-erased, shareable handler.
pub type BoxHandler<P> = Arc<
    dyn Fn(
            <P as Platform>::Event,
            EndpointContext<P>,
        ) -> BoxFuture<'static, Result<<P as Platform>::Result, BoxError>>
        + Send
        + Sync,
>;

/// Erase a handler closure into a [`BoxHandler`].
pub fn box_handler<P, H, Fut>(handler: H) -> BoxHandler<P>
where
    P: Platform,
    H: Fn(P::Event, EndpointContext<P>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<P::Result, BoxError>> + Send + 'static,
{
    Arc::new(move |event: P::Event, context: EndpointContext<P>| {
        handler(event, context).boxed()
    })
}
