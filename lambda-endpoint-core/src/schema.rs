//! Endpoint schemas and the validation capability.
//!
//! How a request is judged valid is not decided here. A schema's `request`
//! member implements [`RequestSchema`], and the dispatch only asks it for a
//! verdict. `lambda-endpoint-std` ships a field-based JSON implementation.

use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, sync::Arc};
use thiserror::Error;

/// The validation capability: judges an adapted event.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot validate events of type `{E}`",
    label = "missing `RequestSchema<{E}>` implementation",
    note = "Implement `validate` or pass a `Fn(&{E}) -> Result<(), ValidationError>` closure."
)]
pub trait RequestSchema<E>: Send + Sync + 'static {
    /// Check the event, reporting the first violation.
    fn validate(&self, event: &E) -> Result<(), ValidationError>;
}

impl<E, F> RequestSchema<E> for F
where
    F: Fn(&E) -> Result<(), ValidationError> + Send + Sync + 'static,
{
    fn validate(&self, event: &E) -> Result<(), ValidationError> {
        (self)(event)
    }
}

/// Describes one endpoint: what its request must look like, plus
/// descriptive metadata passed to callbacks for diagnostics.
///
/// Cloning is cheap; the request schema is shared.
pub struct EndpointSchema<E> {
    summary: Option<Arc<str>>,
    description: Option<Arc<str>>,
    request: Arc<dyn RequestSchema<E>>,
}

/// The schema type used by endpoints of platform `P`.
pub type SchemaOf<P> = EndpointSchema<<P as Platform>::Event>;

impl<E: 'static> EndpointSchema<E> {
    /// Create a schema around a request validator.
    pub fn new(request: impl RequestSchema<E>) -> Self {
        Self {
            summary: None,
            description: None,
            request: Arc::new(request),
        }
    }

    /// Attach a one-line summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(Arc::from(summary.into()));
        self
    }

    /// Attach a longer description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Arc::from(description.into()));
        self
    }

    /// The endpoint summary, if any.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// The endpoint description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The request validator.
    pub fn request(&self) -> &dyn RequestSchema<E> {
        self.request.as_ref()
    }

    /// Validate an event against the request member.
    pub fn validate(&self, event: &E) -> Result<(), ValidationError> {
        self.request.validate(event)
    }
}

impl<E> Clone for EndpointSchema<E> {
    fn clone(&self) -> Self {
        Self {
            summary: self.summary.clone(),
            description: self.description.clone(),
            request: Arc::clone(&self.request),
        }
    }
}

impl<E> fmt::Debug for EndpointSchema<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointSchema")
            .field("summary", &self.summary)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A request that does not conform to its schema.
///
/// The field layout follows the records produced by JSON-schema validators so
/// that serialized errors stay familiar to API clients.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{stack}")]
pub struct ValidationError {
    /// Path of the offending value, e.g. `instance.body.b`.
    pub property: String,
    /// Human-readable reason, e.g. `is not of a type(s) string`.
    pub message: String,
    /// The sub-schema that rejected the value.
    pub schema: Value,
    /// The schema keyword that failed, e.g. `type` or `required`.
    pub name: String,
    /// Keyword arguments, e.g. the expected type names.
    pub argument: Vec<String>,
    /// `property` and `message` joined by a space.
    pub stack: String,
}

impl ValidationError {
    /// Create a validation error; `stack` is derived from `property` and `message`.
    pub fn new(
        property: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
        argument: Vec<String>,
        schema: Value,
    ) -> Self {
        let property = property.into();
        let message = message.into();
        let stack = format!("{property} {message}");
        Self {
            property,
            message,
            schema,
            name: name.into(),
            argument,
            stack,
        }
    }
}
