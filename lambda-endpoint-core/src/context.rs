//! # Augmented Context
//!
//! The context a handler receives is the raw platform context plus a
//! `create_response` function bound to the factory's result builder.
//!
//! [`EndpointContext`] dereferences to the raw context, so platform fields
//! (request ids, deadlines, ...) read exactly as they would on the raw value:
//!
//! ```rust,ignore
//! let handler = |event, context: EndpointContext<MyPlatform>| async move {
//!     tracing::info!(request_id = %context.request_id, "handling");
//!     Ok(context.create_response(payload))
//! };
//! ```

use crate::platform::Platform;
use std::{fmt, ops::Deref, sync::Arc};

/// Builds an outer result from a handler payload.
pub type ResultBuilder<P> =
    Arc<dyn Fn(<P as Platform>::Payload) -> <P as Platform>::Result + Send + Sync>;

/// The raw platform context extended with `create_response`.
pub struct EndpointContext<P: Platform> {
    raw: P::Context,
    result_builder: ResultBuilder<P>,
}

impl<P: Platform> EndpointContext<P> {
    /// Augment a raw context with a result builder.
    pub fn new(raw: P::Context, result_builder: ResultBuilder<P>) -> Self {
        Self {
            raw,
            result_builder,
        }
    }

    /// Shape a handler payload into the platform result.
    pub fn create_response(&self, payload: P::Payload) -> P::Result {
        (self.result_builder)(payload)
    }

    /// The raw platform context.
    pub fn raw(&self) -> &P::Context {
        &self.raw
    }

    /// Discard the augmentation and return the raw context.
    pub fn into_raw(self) -> P::Context {
        self.raw
    }
}

impl<P: Platform> Deref for EndpointContext<P> {
    type Target = P::Context;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl<P: Platform> Clone for EndpointContext<P> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            result_builder: Arc::clone(&self.result_builder),
        }
    }
}

impl<P> fmt::Debug for EndpointContext<P>
where
    P: Platform,
    P::Context: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointContext")
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}
