//! # Endpoint Dispatch
//!
//! An [`Endpoint`] is one (schema, options, handler) wiring. Each
//! [`call`](Endpoint::call) walks the same states:
//!
//! ```text
//! raw event --event_modifier--> event --on_event--> validate?
//!     invalid: on_handled_error / error_result_builder --on_result--> result
//!     valid or skipped: [handler --on_result] --(failure)--> on_unhandled_error
//! ```
//!
//! The bracketed region is trapped: a failure of the handler or of `on_result`
//! after it goes to `on_unhandled_error` when one is configured. Everything
//! outside the region propagates as a [`DispatchError`]. In particular an
//! `on_event` failure escapes even when `on_unhandled_error` is set, and
//! results produced by `on_unhandled_error` do not pass through `on_result`.

use lambda_endpoint_core::{
    BoxError, BoxHandler, CallbackKind, DispatchError, EndpointContext, FactorySettings, Platform,
    SchemaOf, Settings, ValidationError,
};
use std::{fmt, sync::Arc};

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// A dispatch handle matching the platform's `(event, context) -> result` contract.
///
/// Cloning is cheap; all clones share the same immutable wiring.
pub struct Endpoint<P: Platform> {
    inner: Arc<EndpointInner<P>>,
}

struct EndpointInner<P: Platform> {
    factory: FactorySettings<P>,
    schema: SchemaOf<P>,
    options: Settings<P>,
    handler: BoxHandler<P>,
}

impl<P: Platform> Endpoint<P> {
    pub(crate) fn new(
        factory: FactorySettings<P>,
        schema: SchemaOf<P>,
        options: Settings<P>,
        handler: BoxHandler<P>,
    ) -> Self {
        Self {
            inner: Arc::new(EndpointInner {
                factory,
                schema,
                options,
                handler,
            }),
        }
    }

    /// The endpoint's schema.
    pub fn schema(&self) -> &SchemaOf<P> {
        &self.inner.schema
    }

    /// The resolved options: factory defaults with per-endpoint overrides applied.
    pub fn options(&self) -> &Settings<P> {
        &self.inner.options
    }

    /// Dispatch one invocation.
    #[cfg(feature = "tracing")]
    pub async fn call(
        &self,
        raw_event: P::RawEvent,
        raw_context: P::Context,
    ) -> Result<P::Result, DispatchError> {
        let span = tracing::info_span!(
            "endpoint_dispatch",
            summary = %self.inner.schema.summary().unwrap_or_default()
        );
        self.dispatch(raw_event, raw_context).instrument(span).await
    }

    /// Dispatch one invocation.
    #[cfg(not(feature = "tracing"))]
    pub async fn call(
        &self,
        raw_event: P::RawEvent,
        raw_context: P::Context,
    ) -> Result<P::Result, DispatchError> {
        self.dispatch(raw_event, raw_context).await
    }

    async fn dispatch(
        &self,
        raw_event: P::RawEvent,
        raw_context: P::Context,
    ) -> Result<P::Result, DispatchError> {
        let inner = &*self.inner;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!("dispatching event");
        }

        let event = inner
            .factory
            .modify_event(raw_event)
            .map_err(DispatchError::EventAdaptation)?;

        if let Some(on_event) = &inner.options.callbacks.on_event {
            on_event(&event, &raw_context, &inner.schema)
                .map_err(|err| DispatchError::callback(CallbackKind::OnEvent, err))?;
        }

        let context = EndpointContext::new(raw_context, inner.factory.result_builder());

        if inner.options.validates() {
            if let Err(error) = inner.schema.validate(&event) {
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(
                        property = %error.property,
                        message = %error.message,
                        "request failed validation"
                    );
                }
                return self.handled_error(event, error).await;
            }
        } else {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!("validation skipped");
            }
        }

        self.trap_result(event, context).await
    }

    async fn handled_error(
        &self,
        event: P::Event,
        error: ValidationError,
    ) -> Result<P::Result, DispatchError> {
        let inner = &*self.inner;
        let callbacks = &inner.options.callbacks;

        let replaced = match &callbacks.on_handled_error {
            Some(on_handled_error) => {
                on_handled_error(event.clone(), error.clone(), inner.schema.clone())
                    .await
                    .map_err(|err| DispatchError::callback(CallbackKind::OnHandledError, err))?
            }
            None => None,
        };
        let mut result = match replaced {
            Some(result) => result,
            None => inner.factory.build_error_result(&error),
        };

        if let Some(on_result) = &callbacks.on_result {
            on_result(&event, &mut result, &inner.schema)
                .map_err(|err| DispatchError::callback(CallbackKind::OnResult, err))?;
        }
        Ok(result)
    }

    async fn trap_result(
        &self,
        event: P::Event,
        context: EndpointContext<P>,
    ) -> Result<P::Result, DispatchError> {
        let inner = &*self.inner;

        let error = match self.run_handler(&event, context).await {
            Ok(result) => {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!("handler completed");
                }
                return Ok(result);
            }
            Err(error) => error,
        };

        match &inner.options.callbacks.on_unhandled_error {
            Some(on_unhandled_error) => {
                #[cfg(feature = "tracing")]
                {
                    tracing::error!(%error, recovered = true, "handler failed");
                }
                on_unhandled_error(event, error, inner.schema.clone())
                    .await
                    .map_err(|err| DispatchError::callback(CallbackKind::OnUnhandledError, err))
            }
            None => {
                #[cfg(feature = "tracing")]
                {
                    tracing::error!(%error, recovered = false, "handler failed");
                }
                Err(DispatchError::Handler(error))
            }
        }
    }

    // The trapped region: the handler and the `on_result` that follows it.
    async fn run_handler(
        &self,
        event: &P::Event,
        context: EndpointContext<P>,
    ) -> Result<P::Result, BoxError> {
        let inner = &*self.inner;
        let mut result = (inner.handler)(event.clone(), context).await?;
        if let Some(on_result) = &inner.options.callbacks.on_result {
            on_result(event, &mut result, &inner.schema)?;
        }
        Ok(result)
    }
}

impl<P: Platform> Clone for Endpoint<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Platform> fmt::Debug for Endpoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("schema", &self.inner.schema)
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}
