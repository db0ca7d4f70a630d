//! Tracing wrappers for lifecycle callbacks.

use lambda_endpoint_core::{Callbacks, Platform};
use std::{fmt::Debug, sync::Arc};

/// Callbacks that log the adapted event and the outgoing result at `debug`.
///
/// Meant as a base layer: `factory.extend(Settings::from(logging()))`.
pub fn logging<P>() -> Callbacks<P>
where
    P: Platform,
    P::Event: Debug,
    P::Result: Debug,
{
    Callbacks::<P>::new()
        .on_event(|event, _, schema| {
            tracing::debug!(summary = schema.summary(), ?event, "event received");
            Ok(())
        })
        .on_result(|_, result, schema| {
            tracing::debug!(summary = schema.summary(), ?result, "result ready");
            Ok(())
        })
}

/// Wrap every hook set in `callbacks` with tracing events tagged `endpoint = name`.
///
/// The wrapped hooks behave exactly like the originals; failures are logged
/// at `warn` and passed through. Hooks that are not set stay unset, so the
/// returned set merges the same way as the input.
pub fn with_logging<P: Platform>(name: impl Into<String>, callbacks: Callbacks<P>) -> Callbacks<P> {
    let name: Arc<str> = name.into().into();
    let mut logged = Callbacks::<P>::new();

    if let Some(inner) = callbacks.on_event {
        let name = Arc::clone(&name);
        logged = logged.on_event(move |event, context, schema| {
            tracing::debug!(endpoint = %name, summary = schema.summary(), "on_event");
            let outcome = inner(event, context, schema);
            if let Err(error) = &outcome {
                tracing::warn!(endpoint = %name, %error, "on_event failed");
            }
            outcome
        });
    }

    if let Some(inner) = callbacks.on_result {
        let name = Arc::clone(&name);
        logged = logged.on_result(move |event, result, schema| {
            tracing::debug!(endpoint = %name, "on_result");
            let outcome = inner(event, result, schema);
            if let Err(error) = &outcome {
                tracing::warn!(endpoint = %name, %error, "on_result failed");
            }
            outcome
        });
    }

    if let Some(inner) = callbacks.on_handled_error {
        let name = Arc::clone(&name);
        logged = logged.on_handled_error(move |event, error, schema| {
            tracing::info!(
                endpoint = %name,
                property = %error.property,
                message = %error.message,
                "on_handled_error"
            );
            let name = Arc::clone(&name);
            let pending = inner(event, error, schema);
            async move {
                let outcome = pending.await;
                match &outcome {
                    Ok(Some(_)) => tracing::debug!(endpoint = %name, "error result replaced"),
                    Ok(None) => tracing::debug!(endpoint = %name, "error result deferred"),
                    Err(error) => {
                        tracing::warn!(endpoint = %name, %error, "on_handled_error failed")
                    }
                }
                outcome
            }
        });
    }

    if let Some(inner) = callbacks.on_unhandled_error {
        let name = Arc::clone(&name);
        logged = logged.on_unhandled_error(move |event, error, schema| {
            tracing::error!(endpoint = %name, %error, "on_unhandled_error");
            let name = Arc::clone(&name);
            let pending = inner(event, error, schema);
            async move {
                let outcome = pending.await;
                if let Err(error) = &outcome {
                    tracing::warn!(endpoint = %name, %error, "on_unhandled_error failed");
                }
                outcome
            }
        });
    }

    logged
}
