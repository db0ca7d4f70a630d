//! Field-based JSON request schemas.
//!
//! A small, declarative schema language that covers what API endpoints
//! usually check: required/optional fields, primitive types, nested objects
//! and arrays. Failures are reported with JSON-schema vocabulary
//! (`type`, `required`, `additionalProperties`) so serialized errors look the
//! same as those from a full JSON-schema validator.
//!
//! # Example
//!
//! ```rust
//! use lambda_endpoint_std::schema::{ApiRequestSchema, ObjectSchema};
//!
//! let request = ApiRequestSchema::new()
//!     .query(ObjectSchema::new().string("q"))
//!     .body(ObjectSchema::new().string("b"))
//!     .headers(ObjectSchema::new().string("h"));
//! ```

mod field;
mod request;

pub use field::{FieldType, ObjectSchema};
pub use request::ApiRequestSchema;
