//! # lambda-endpoint-core
//!
//! Core contracts for the lambda-endpoint handler factory.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! platform adapters and schema engines that don't need the dispatch
//! implementation in `lambda-endpoint`.
//!
//! # Dispatch Pipeline
//!
//! Every invocation of an endpoint runs one linear pipeline:
//!
//! ```text
//! raw event ─▶ event modifier ─▶ on_event ─▶ context augmentation
//!     ─▶ validation ──(fail)──▶ on_handled_error / error result ─▶ on_result
//!            │
//!            └─(ok / skipped)─▶ handler ──(ok)──▶ on_result
//!                                   └──(err)─▶ on_unhandled_error
//! ```
//!
//! The contracts for each stage live here:
//!
//! - [`Platform`] - names the raw/inner event, context, payload and result types
//! - [`FactorySettings`] - event modifier, result builder, error result builder
//! - [`Settings`] and [`Callbacks`] - lifecycle hooks, validation toggle, merge rules
//! - [`EndpointSchema`] and [`RequestSchema`] - the validation capability
//! - [`EndpointContext`] - the raw context plus `create_response`
//!
//! # Error Types
//!
//! - [`DispatchError`] - Failures that escape a dispatch
//! - [`ValidationError`] - A request that does not conform to its schema

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callbacks;
mod context;
mod error;
mod handler;
mod platform;
mod schema;
mod settings;

// Re-exports
pub use callbacks::{Callbacks, OnEvent, OnHandledError, OnResult, OnUnhandledError};
pub use context::{EndpointContext, ResultBuilder};
pub use error::{BoxError, CallbackKind, DispatchError};
pub use handler::{BoxHandler, box_handler};
pub use platform::Platform;
pub use schema::{EndpointSchema, RequestSchema, SchemaOf, ValidationError};
pub use settings::{ErrorResultBuilder, EventModifier, FactorySettings, Settings};
