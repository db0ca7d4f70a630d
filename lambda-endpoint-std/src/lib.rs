//! # lambda-endpoint-std
//!
//! Standard implementations for the lambda-endpoint handler factory.
//!
//! This crate provides:
//! - **API Gateway preset**: [`proxy::ApiGateway`], [`proxy::settings`]
//! - **Request schemas**: [`schema::ApiRequestSchema`], [`schema::ObjectSchema`]
//! - **Standard callbacks**: CORS, and tracing wrappers behind the `tracing` feature
//! - **Test helpers**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use lambda_endpoint_core;

// Modules
pub mod callbacks;
pub mod proxy;
pub mod schema;
pub mod testing;
