//! Testing utilities for lambda-endpoint.
//!
//! This module provides utilities to make testing endpoints and callbacks easier.
//!
//! # Features
//!
//! - [`MockContext`]: A stand-in invocation context for [`ApiGateway`](crate::proxy::ApiGateway)
//! - [`CallbackRecorder`]: Callback sets that record which hooks fired, in order
//! - [`CountingHandler`]: A handler that counts invocations and returns a fixed payload

use futures::{FutureExt, future::BoxFuture};
use lambda_endpoint_core::{BoxError, CallbackKind, Callbacks, EndpointContext, Platform};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Mock Context
// ============================================================================

/// A minimal invocation context with the fields handlers usually read.
///
/// # Example
///
/// ```rust
/// use lambda_endpoint_std::testing::MockContext;
///
/// let context = MockContext::new("req-1");
/// assert_eq!(context.aws_request_id, "req-1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockContext {
    /// Request id of the invocation.
    pub aws_request_id: String,
    /// Name of the invoked function.
    pub function_name: String,
}

impl MockContext {
    /// Create a mock context with the given request id.
    pub fn new(aws_request_id: impl Into<String>) -> Self {
        Self {
            aws_request_id: aws_request_id.into(),
            function_name: "test-function".to_string(),
        }
    }
}

// ============================================================================
// Callback Recorder
// ============================================================================

/// Produces callback sets that record every hook invocation.
///
/// All callback sets produced by one recorder (and its clones) share the
/// same log.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = CallbackRecorder::new();
/// let settings = Settings::new().with_callbacks(recorder.callbacks());
///
/// endpoint.call(event, context).await?;
///
/// assert_eq!(recorder.fired(), vec![CallbackKind::OnEvent, CallbackKind::OnResult]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallbackRecorder {
    fired: Arc<Mutex<Vec<CallbackKind>>>,
}

impl CallbackRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, kind: CallbackKind) {
        self.fired
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(kind);
    }

    /// Recording `on_event`, `on_result` and `on_handled_error` hooks.
    ///
    /// `on_handled_error` returns `None`, so the error result builder still
    /// shapes validation failures. `on_unhandled_error` is left unset.
    pub fn callbacks<P: Platform>(&self) -> Callbacks<P> {
        let on_event = self.clone();
        let on_result = self.clone();
        let on_handled_error = self.clone();
        Callbacks::<P>::new()
            .on_event(move |_, _, _| {
                on_event.record(CallbackKind::OnEvent);
                Ok(())
            })
            .on_result(move |_, _, _| {
                on_result.record(CallbackKind::OnResult);
                Ok(())
            })
            .on_handled_error(move |_, _, _| {
                on_handled_error.record(CallbackKind::OnHandledError);
                async { Ok::<Option<P::Result>, BoxError>(None) }
            })
    }

    /// Like [`callbacks`](Self::callbacks), plus a recording
    /// `on_unhandled_error` that recovers with `recover`.
    pub fn callbacks_with_recovery<P, F>(&self, recover: F) -> Callbacks<P>
    where
        P: Platform,
        F: Fn(&P::Event, &BoxError) -> P::Result + Send + Sync + 'static,
    {
        let recorder = self.clone();
        self.callbacks::<P>().on_unhandled_error(
            move |event, error, _| -> BoxFuture<'static, Result<P::Result, BoxError>> {
                recorder.record(CallbackKind::OnUnhandledError);
                let result = recover(&event, &error);
                async move { Ok(result) }.boxed()
            },
        )
    }

    /// The hooks that fired, in order.
    pub fn fired(&self) -> Vec<CallbackKind> {
        self.fired
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times `kind` fired.
    pub fn count(&self, kind: CallbackKind) -> usize {
        self.fired()
            .into_iter()
            .filter(|fired| *fired == kind)
            .count()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.fired
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// let endpoint = factory.build(schema, counter.handler(ApiResponse::new()));
///
/// endpoint.call(event, context).await?;
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn hit(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// A handler that counts each call and responds with `payload`.
    pub fn handler<P>(
        &self,
        payload: P::Payload,
    ) -> impl Fn(P::Event, EndpointContext<P>) -> BoxFuture<'static, Result<P::Result, BoxError>>
    + Send
    + Sync
    + 'static
    where
        P: Platform,
        P::Payload: Clone + Sync,
    {
        let counter = self.clone();
        move |_: P::Event, context: EndpointContext<P>| {
            counter.hit();
            let result = context.create_response(payload.clone());
            async move { Ok::<_, BoxError>(result) }.boxed()
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
