//! Error types for lambda-endpoint.
//!
//! - [`DispatchError`] - Failures that escape a dispatch call
//! - [`CallbackKind`] - Names the lifecycle callback a failure came from
//!
//! Validation failures are not part of this hierarchy: they are converted
//! into a platform result and never escape the dispatch function. See
//! [`ValidationError`](crate::ValidationError).

use std::fmt;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The four lifecycle hook points of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Fired once the raw event has been adapted.
    OnEvent,
    /// Fired with the final result, allowing in-place mutation.
    OnResult,
    /// Fired when the adapted event fails schema validation.
    OnHandledError,
    /// Fired when the handler fails.
    OnUnhandledError,
}

impl CallbackKind {
    /// The callback's name as it appears in settings.
    pub const fn name(self) -> &'static str {
        match self {
            CallbackKind::OnEvent => "onEvent",
            CallbackKind::OnResult => "onResult",
            CallbackKind::OnHandledError => "onHandledError",
            CallbackKind::OnUnhandledError => "onUnhandledError",
        }
    }
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that escape a dispatch call.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The event modifier could not adapt the raw platform event.
    #[error("event adaptation failed: {0}")]
    EventAdaptation(#[source] BoxError),

    /// A lifecycle callback failed outside of the trapped handler region.
    #[error("{callback} callback failed: {source}")]
    Callback {
        /// Which callback failed.
        callback: CallbackKind,
        /// The callback's error.
        #[source]
        source: BoxError,
    },

    /// The handler failed and no `onUnhandledError` callback was configured.
    ///
    /// Carries the handler's own error unchanged.
    #[error(transparent)]
    Handler(BoxError),
}

impl DispatchError {
    /// Create a [`DispatchError::Callback`].
    pub fn callback(callback: CallbackKind, source: BoxError) -> Self {
        DispatchError::Callback { callback, source }
    }

    /// Returns `true` if the handler's own error escaped the dispatch.
    pub fn is_handler(&self) -> bool {
        matches!(self, DispatchError::Handler(_))
    }

    /// The callback that failed, if this is a callback failure.
    pub fn failed_callback(&self) -> Option<CallbackKind> {
        match self {
            DispatchError::Callback { callback, .. } => Some(*callback),
            _ => None,
        }
    }

    /// Unwrap the underlying error.
    pub fn into_source(self) -> BoxError {
        match self {
            DispatchError::EventAdaptation(err) | DispatchError::Handler(err) => err,
            DispatchError::Callback { source, .. } => source,
        }
    }
}
