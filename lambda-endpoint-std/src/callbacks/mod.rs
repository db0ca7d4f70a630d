//! Ready-made callback sets.
//!
//! - [`cors`] - adds `Access-Control-Allow-Origin` to API Gateway responses
//! - [`logging::logging`] - logs events and results at `debug`
//! - [`logging::with_logging`] - wraps a callback set with tracing events
//!
//! The `logging` module requires the `tracing` feature.

mod cors;
#[cfg(feature = "tracing")]
pub mod logging;

pub use cors::cors;
