//! # Lifecycle Callbacks
//!
//! Four optional hook points fire around every dispatch:
//!
//! | Callback             | Fires when                              | May replace the result |
//! |----------------------|-----------------------------------------|------------------------|
//! | `on_event`           | the raw event has been adapted          | no                     |
//! | `on_result`          | a result is about to be returned        | mutates it in place    |
//! | `on_handled_error`   | the event failed schema validation      | yes (`Some`)           |
//! | `on_unhandled_error` | the handler failed                      | yes                    |
//!
//! `on_result` does not fire for results produced by `on_unhandled_error`.
//!
//! Callback sets are merged per hook: see [`Callbacks::merge`]. Two layers that
//! both set the same hook do not chain; the later layer wins.

use crate::{
    error::BoxError,
    platform::Platform,
    schema::{SchemaOf, ValidationError},
};
use futures::{FutureExt, future::BoxFuture};
use std::{fmt, future::Future, sync::Arc};

/// Observes the adapted event together with the raw context.
pub type OnEvent<P> = Arc<
    dyn Fn(
            &<P as Platform>::Event,
            &<P as Platform>::Context,
            &SchemaOf<P>,
        ) -> Result<(), BoxError>
        + Send
        + Sync,
>;

/// Observes or mutates the outgoing result.
pub type OnResult<P> = Arc<
    dyn Fn(
            &<P as Platform>::Event,
            &mut <P as Platform>::Result,
            &SchemaOf<P>,
        ) -> Result<(), BoxError>
        + Send
        + Sync,
>;

/// Converts a validation failure into a result; `None` defers to the error result builder.
pub type OnHandledError<P> = Arc<
    dyn Fn(
            <P as Platform>::Event,
            ValidationError,
            SchemaOf<P>,
        ) -> BoxFuture<'static, Result<Option<<P as Platform>::Result>, BoxError>>
        + Send
        + Sync,
>;

/// Converts a handler failure into a result.
pub type OnUnhandledError<P> = Arc<
    dyn Fn(
            <P as Platform>::Event,
            BoxError,
            SchemaOf<P>,
        ) -> BoxFuture<'static, Result<<P as Platform>::Result, BoxError>>
        + Send
        + Sync,
>;

/// The set of lifecycle callbacks for an endpoint.
pub struct Callbacks<P: Platform> {
    /// See [`OnEvent`].
    pub on_event: Option<OnEvent<P>>,
    /// See [`OnResult`].
    pub on_result: Option<OnResult<P>>,
    /// See [`OnHandledError`].
    pub on_handled_error: Option<OnHandledError<P>>,
    /// See [`OnUnhandledError`].
    pub on_unhandled_error: Option<OnUnhandledError<P>>,
}

impl<P: Platform> Callbacks<P> {
    /// An empty callback set.
    pub fn new() -> Self {
        Self {
            on_event: None,
            on_result: None,
            on_handled_error: None,
            on_unhandled_error: None,
        }
    }

    /// Set `on_event`.
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: Fn(&P::Event, &P::Context, &SchemaOf<P>) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.on_event = Some(Arc::new(callback));
        self
    }

    /// Set `on_result`.
    pub fn on_result<F>(mut self, callback: F) -> Self
    where
        F: Fn(&P::Event, &mut P::Result, &SchemaOf<P>) -> Result<(), BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.on_result = Some(Arc::new(callback));
        self
    }

    /// Set `on_handled_error`.
    pub fn on_handled_error<F, Fut>(mut self, callback: F) -> Self
    where
        F: Fn(P::Event, ValidationError, SchemaOf<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<P::Result>, BoxError>> + Send + 'static,
    {
        self.on_handled_error = Some(Arc::new(
            move |event: P::Event, error: ValidationError, schema: SchemaOf<P>| {
                callback(event, error, schema).boxed()
            },
        ));
        self
    }

    /// Set `on_unhandled_error`.
    pub fn on_unhandled_error<F, Fut>(mut self, callback: F) -> Self
    where
        F: Fn(P::Event, BoxError, SchemaOf<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<P::Result, BoxError>> + Send + 'static,
    {
        self.on_unhandled_error = Some(Arc::new(
            move |event: P::Event, error: BoxError, schema: SchemaOf<P>| {
                callback(event, error, schema).boxed()
            },
        ));
        self
    }

    /// Merge two callback sets hook by hook; hooks set in `overrides` win.
    pub fn merge(&self, overrides: &Callbacks<P>) -> Callbacks<P> {
        Callbacks {
            on_event: overrides.on_event.clone().or_else(|| self.on_event.clone()),
            on_result: overrides.on_result.clone().or_else(|| self.on_result.clone()),
            on_handled_error: overrides
                .on_handled_error
                .clone()
                .or_else(|| self.on_handled_error.clone()),
            on_unhandled_error: overrides
                .on_unhandled_error
                .clone()
                .or_else(|| self.on_unhandled_error.clone()),
        }
    }

    /// Returns `true` if no hook is set.
    pub fn is_empty(&self) -> bool {
        self.on_event.is_none()
            && self.on_result.is_none()
            && self.on_handled_error.is_none()
            && self.on_unhandled_error.is_none()
    }
}

impl<P: Platform> Default for Callbacks<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Clone for Callbacks<P> {
    fn clone(&self) -> Self {
        Self {
            on_event: self.on_event.clone(),
            on_result: self.on_result.clone(),
            on_handled_error: self.on_handled_error.clone(),
            on_unhandled_error: self.on_unhandled_error.clone(),
        }
    }
}

impl<P: Platform> fmt::Debug for Callbacks<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_event", &self.on_event.is_some())
            .field("on_result", &self.on_result.is_some())
            .field("on_handled_error", &self.on_handled_error.is_some())
            .field("on_unhandled_error", &self.on_unhandled_error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EndpointSchema;

    struct TestPlatform;

    impl Platform for TestPlatform {
        type RawEvent = i32;
        type Event = i32;
        type Context = ();
        type Payload = i32;
        type Result = i32;
    }

    fn schema() -> SchemaOf<TestPlatform> {
        EndpointSchema::new(|_: &i32| Ok(()))
    }

    #[test]
    fn test_merge_keeps_unset_hooks() {
        let base = Callbacks::<TestPlatform>::new()
            .on_result(|_, result, _| {
                *result += 1;
                Ok(())
            })
            .on_handled_error(|_, _, _| async { Ok(Some(-1)) });
        let layer = Callbacks::<TestPlatform>::new().on_result(|_, result, _| {
            *result *= 10;
            Ok(())
        });

        let merged = base.merge(&layer);
        assert!(merged.on_handled_error.is_some());
        assert!(merged.on_event.is_none());

        let mut value = 2;
        let on_result = merged.on_result.unwrap();
        on_result(&0, &mut value, &schema()).unwrap();
        // The later layer replaces the earlier one; the hooks do not chain.
        assert_eq!(value, 20);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let base = Callbacks::<TestPlatform>::new().on_event(|_, _, _| Ok(()));
        let merged = base.merge(&Callbacks::new());
        assert!(merged.on_event.is_some());
        assert!(Callbacks::<TestPlatform>::new().is_empty());
        assert!(!merged.is_empty());
    }

    #[tokio::test]
    async fn test_async_hooks_are_boxed() {
        let callbacks = Callbacks::<TestPlatform>::new()
            .on_unhandled_error(|event, _, _| async move { Ok(event * 2) });
        let hook = callbacks.on_unhandled_error.unwrap();
        let result = hook(21, "failed".into(), schema()).await.unwrap();
        assert_eq!(result, 42);
    }
}
