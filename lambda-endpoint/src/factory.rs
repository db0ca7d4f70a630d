//! # Endpoint Factory
//!
//! An [`EndpointFactory`] pairs one platform's [`FactorySettings`] with a
//! layer of default [`Settings`]. Endpoints are built from it; new factories
//! are derived from it with [`extend`](EndpointFactory::extend).
//!
//! ```rust,ignore
//! let base = EndpointFactory::new(proxy::settings::<Context>())
//!     .extend(Settings::from(cors("*")));
//!
//! let endpoint = base.build(schema, |event, context| async move {
//!     Ok(context.create_response(ApiResponse::new().with_body(event.body)))
//! });
//! ```

use crate::endpoint::Endpoint;
use lambda_endpoint_core::{
    BoxError, EndpointContext, FactorySettings, Platform, SchemaOf, Settings, box_handler,
};
use std::{fmt, future::Future};

/// The two ways of describing an endpoint before its handler is attached.
pub enum EndpointCall<P: Platform> {
    /// Validate against `schema` with the factory defaults.
    Validated {
        /// The endpoint schema.
        schema: SchemaOf<P>,
    },
    /// Use `options` layered over the factory defaults.
    WithOptions {
        /// The endpoint schema.
        schema: SchemaOf<P>,
        /// Per-endpoint overrides.
        options: Settings<P>,
    },
}

impl<P: Platform> EndpointCall<P> {
    fn into_parts(self) -> (SchemaOf<P>, Option<Settings<P>>) {
        match self {
            EndpointCall::Validated { schema } => (schema, None),
            EndpointCall::WithOptions { schema, options } => (schema, Some(options)),
        }
    }
}

impl<P: Platform> fmt::Debug for EndpointCall<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointCall::Validated { schema } => f
                .debug_struct("Validated")
                .field("schema", schema)
                .finish(),
            EndpointCall::WithOptions { schema, options } => f
                .debug_struct("WithOptions")
                .field("schema", schema)
                .field("options", options)
                .finish(),
        }
    }
}

/// Builds endpoints for one platform.
pub struct EndpointFactory<P: Platform> {
    settings: FactorySettings<P>,
    defaults: Settings<P>,
}

impl<P: Platform> EndpointFactory<P> {
    /// A factory with empty default settings.
    pub fn new(settings: FactorySettings<P>) -> Self {
        Self::with_defaults(settings, Settings::new())
    }

    /// A factory with the given default settings.
    pub fn with_defaults(settings: FactorySettings<P>, defaults: Settings<P>) -> Self {
        Self { settings, defaults }
    }

    /// The defaults every endpoint built here starts from.
    pub fn default_settings(&self) -> &Settings<P> {
        &self.defaults
    }

    /// The platform adaptation functions.
    pub fn factory_settings(&self) -> &FactorySettings<P> {
        &self.settings
    }

    /// Derive a factory whose defaults are `defaults` layered over this one's.
    ///
    /// `self` is left untouched. Callbacks merge hook by hook, so a layer
    /// that only sets `on_handled_error` keeps an `on_result` from below.
    pub fn extend(&self, defaults: Settings<P>) -> Self {
        Self {
            settings: self.settings.clone(),
            defaults: self.defaults.merge(&defaults),
        }
    }

    /// Build a validating endpoint with the factory defaults.
    pub fn build<H, Fut>(&self, schema: SchemaOf<P>, handler: H) -> Endpoint<P>
    where
        H: Fn(P::Event, EndpointContext<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<P::Result, BoxError>> + Send + 'static,
    {
        self.build_call(EndpointCall::Validated { schema }, handler)
    }

    /// Build an endpoint with per-endpoint `options` layered over the defaults.
    pub fn build_with_options<H, Fut>(
        &self,
        schema: SchemaOf<P>,
        options: Settings<P>,
        handler: H,
    ) -> Endpoint<P>
    where
        H: Fn(P::Event, EndpointContext<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<P::Result, BoxError>> + Send + 'static,
    {
        self.build_call(EndpointCall::WithOptions { schema, options }, handler)
    }

    /// Build an endpoint from an explicit [`EndpointCall`].
    pub fn build_call<H, Fut>(&self, call: EndpointCall<P>, handler: H) -> Endpoint<P>
    where
        H: Fn(P::Event, EndpointContext<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<P::Result, BoxError>> + Send + 'static,
    {
        let (schema, options) = call.into_parts();
        let options = match options {
            Some(options) => self.defaults.merge(&options),
            None => self.defaults.clone(),
        };
        Endpoint::new(
            self.settings.clone(),
            schema,
            options,
            box_handler::<P, _, _>(handler),
        )
    }
}

impl<P: Platform> Clone for EndpointFactory<P> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            defaults: self.defaults.clone(),
        }
    }
}

impl<P: Platform> fmt::Debug for EndpointFactory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointFactory")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
