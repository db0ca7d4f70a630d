//! # Settings
//!
//! Two kinds of configuration feed an endpoint:
//!
//! - [`FactorySettings`] - how one platform adapts events and shapes results.
//!   Fixed when the factory is created.
//! - [`Settings`] - lifecycle callbacks and the validation toggle. Used both
//!   as factory defaults and as per-endpoint overrides.
//!
//! # Merge Order
//!
//! Settings always merge as *defaults, then overrides*. `validate` is
//! last-write-wins when the override sets it. `callbacks` merge hook by hook
//! (see [`Callbacks::merge`]) instead of being replaced wholesale.

use crate::{
    callbacks::Callbacks,
    context::ResultBuilder,
    error::BoxError,
    platform::Platform,
    schema::ValidationError,
};
use std::{fmt, sync::Arc};

/// Adapts a raw platform event into the inner event.
pub type EventModifier<P> = Arc<
    dyn Fn(<P as Platform>::RawEvent) -> Result<<P as Platform>::Event, BoxError> + Send + Sync,
>;

/// Shapes a validation failure into a platform result.
pub type ErrorResultBuilder<P> =
    Arc<dyn Fn(&ValidationError) -> <P as Platform>::Result + Send + Sync>;

/// The three platform-adaptation functions of a factory.
pub struct FactorySettings<P: Platform> {
    event_modifier: EventModifier<P>,
    result_builder: ResultBuilder<P>,
    error_result_builder: ErrorResultBuilder<P>,
}

impl<P: Platform> FactorySettings<P> {
    /// Create factory settings from the three adaptation functions.
    pub fn new<M, R, E>(event_modifier: M, result_builder: R, error_result_builder: E) -> Self
    where
        M: Fn(P::RawEvent) -> Result<P::Event, BoxError> + Send + Sync + 'static,
        R: Fn(P::Payload) -> P::Result + Send + Sync + 'static,
        E: Fn(&ValidationError) -> P::Result + Send + Sync + 'static,
    {
        Self {
            event_modifier: Arc::new(event_modifier),
            result_builder: Arc::new(result_builder),
            error_result_builder: Arc::new(error_result_builder),
        }
    }

    /// Adapt a raw event.
    pub fn modify_event(&self, raw: P::RawEvent) -> Result<P::Event, BoxError> {
        (self.event_modifier)(raw)
    }

    /// Shape a handler payload.
    pub fn build_result(&self, payload: P::Payload) -> P::Result {
        (self.result_builder)(payload)
    }

    /// Shape a validation failure.
    pub fn build_error_result(&self, error: &ValidationError) -> P::Result {
        (self.error_result_builder)(error)
    }

    /// A shared handle to the result builder, for binding into a context.
    pub fn result_builder(&self) -> ResultBuilder<P> {
        Arc::clone(&self.result_builder)
    }
}

impl<P: Platform> Clone for FactorySettings<P> {
    fn clone(&self) -> Self {
        Self {
            event_modifier: Arc::clone(&self.event_modifier),
            result_builder: Arc::clone(&self.result_builder),
            error_result_builder: Arc::clone(&self.error_result_builder),
        }
    }
}

impl<P: Platform> fmt::Debug for FactorySettings<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactorySettings").finish_non_exhaustive()
    }
}

/// Callbacks and the validation toggle.
///
/// Every field is optional, so the same record serves as factory defaults,
/// as an `extend` layer, and as per-endpoint options.
pub struct Settings<P: Platform> {
    /// Lifecycle callbacks.
    pub callbacks: Callbacks<P>,
    /// `Some(false)` skips schema validation; anything else validates.
    pub validate: Option<bool>,
}

impl<P: Platform> Settings<P> {
    /// Empty settings.
    pub fn new() -> Self {
        Self {
            callbacks: Callbacks::new(),
            validate: None,
        }
    }

    /// Replace the callback set.
    pub fn with_callbacks(mut self, callbacks: Callbacks<P>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Set the validation toggle explicitly.
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Skip schema validation; handlers receive the adapted event as-is.
    pub fn without_validation(self) -> Self {
        self.with_validate(false)
    }

    /// Whether endpoints using these settings validate requests.
    pub fn validates(&self) -> bool {
        self.validate != Some(false)
    }

    /// Layer `overrides` on top of `self`.
    pub fn merge(&self, overrides: &Settings<P>) -> Settings<P> {
        Settings {
            callbacks: self.callbacks.merge(&overrides.callbacks),
            validate: overrides.validate.or(self.validate),
        }
    }
}

impl<P: Platform> Default for Settings<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Clone for Settings<P> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
            validate: self.validate,
        }
    }
}

impl<P: Platform> fmt::Debug for Settings<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("callbacks", &self.callbacks)
            .field("validate", &self.validate)
            .finish()
    }
}

impl<P: Platform> From<Callbacks<P>> for Settings<P> {
    fn from(callbacks: Callbacks<P>) -> Self {
        Self::new().with_callbacks(callbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TestPlatform;

    impl Platform for TestPlatform {
        type RawEvent = String;
        type Event = usize;
        type Context = ();
        type Payload = usize;
        type Result = String;
    }

    #[test]
    fn test_factory_settings_apply_functions() {
        let settings = FactorySettings::<TestPlatform>::new(
            |raw: String| Ok(raw.len()),
            |payload: usize| format!("ok:{payload}"),
            |error: &ValidationError| format!("bad:{}", error.property),
        );

        assert_eq!(settings.modify_event("abc".into()).unwrap(), 3);
        assert_eq!(settings.build_result(7), "ok:7");
        let error = ValidationError::new("instance", "type", "is wrong", vec![], json!({}));
        assert_eq!(settings.clone().build_error_result(&error), "bad:instance");
        assert_eq!((settings.result_builder())(1), "ok:1");
    }

    #[test]
    fn test_validate_defaults_to_true() {
        assert!(Settings::<TestPlatform>::new().validates());
        assert!(Settings::<TestPlatform>::new().with_validate(true).validates());
        assert!(!Settings::<TestPlatform>::new().without_validation().validates());
    }

    #[test]
    fn test_merge_override_wins_for_validate() {
        let defaults = Settings::<TestPlatform>::new().without_validation();
        assert!(!defaults.merge(&Settings::new()).validates());
        assert!(defaults.merge(&Settings::new().with_validate(true)).validates());
    }

    #[test]
    fn test_merge_callbacks_per_hook() {
        let defaults = Settings::<TestPlatform>::from(
            Callbacks::new()
                .on_event(|_, _, _| Ok(()))
                .on_result(|_, _, _| Ok(())),
        );
        let overrides = Settings::from(
            Callbacks::new().on_unhandled_error(|_, _, _| async { Ok(String::from("recovered")) }),
        );

        let merged = defaults.merge(&overrides);
        assert!(merged.callbacks.on_event.is_some());
        assert!(merged.callbacks.on_result.is_some());
        assert!(merged.callbacks.on_unhandled_error.is_some());
        assert!(merged.callbacks.on_handled_error.is_none());
    }
}
