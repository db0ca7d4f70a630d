//! # lambda-endpoint - Schema-Validated Serverless Endpoints
//!
//! `lambda-endpoint` wraps serverless request handlers with schema
//! validation and lifecycle callbacks. A factory is configured once per
//! platform; every endpoint built from it adapts the raw event, validates
//! it, runs the handler and shapes the result the same way.
//!
//! ## Quick Start (API Gateway)
//!
//! ```rust,ignore
//! use lambda_endpoint::prelude::*;
//! use lambda_endpoint::{proxy, schema::{ApiRequestSchema, ObjectSchema}};
//!
//! let factory = EndpointFactory::new(proxy::settings::<Context>())
//!     .extend(Settings::from(cors("*")));
//!
//! let schema = EndpointSchema::new(
//!     ApiRequestSchema::new().body(ObjectSchema::new().string("name")),
//! )
//! .with_summary("greet");
//!
//! let endpoint = factory.build(schema, |event, context| async move {
//!     let name = event.body["name"].clone();
//!     Ok(context.create_response(ApiResponse::new().with_body(json!({ "hello": name }))))
//! });
//!
//! let response = endpoint.call(request, context).await?;
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): dispatch spans and events, plus the logging callbacks
//! - `tower`: [`Endpoint`] implements `tower::Service`
//! - `lambda`: `lambda::run` serves an endpoint on the AWS Lambda runtime

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod endpoint;
mod factory;
mod integrations;

pub use endpoint::Endpoint;
pub use factory::{EndpointCall, EndpointFactory};

pub use lambda_endpoint_core::{
    // Errors
    BoxError,
    // Callbacks
    CallbackKind,
    Callbacks,
    DispatchError,
    // Context
    EndpointContext,
    // Schema
    EndpointSchema,
    ErrorResultBuilder,
    EventModifier,
    // Settings
    FactorySettings,
    OnEvent,
    OnHandledError,
    OnResult,
    OnUnhandledError,
    // Platform
    Platform,
    RequestSchema,
    ResultBuilder,
    SchemaOf,
    Settings,
    ValidationError,
};

/// The API Gateway proxy preset.
pub mod proxy {
    #![allow(clippy::wildcard_imports)]
    pub use lambda_endpoint_std::proxy::*;
}

/// Field-based request schemas.
pub mod schema {
    #![allow(clippy::wildcard_imports)]
    pub use lambda_endpoint_std::schema::*;
}

/// Standard callback sets.
pub mod callbacks {
    pub use lambda_endpoint_std::callbacks::cors;

    #[cfg(feature = "tracing")]
    pub use lambda_endpoint_std::callbacks::logging;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use lambda_endpoint_std::testing::*;
}

#[cfg(feature = "lambda")]
pub use integrations::lambda;

/// Prelude module - common imports for lambda-endpoint.
///
/// # Usage
///
/// ```rust,ignore
/// use lambda_endpoint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Callbacks
        Callbacks,
        DispatchError,
        // Dispatch
        Endpoint,
        EndpointCall,
        EndpointContext,
        EndpointFactory,
        EndpointSchema,
        FactorySettings,
        Platform,
        Settings,
        ValidationError,
        callbacks::cors,
        proxy::{ApiEvent, ApiGateway, ApiResponse, ProxyRequest, ProxyResponse},
    };
}
