//! Platform type bundle.

/// The set of types one serverless platform adapter works with.
///
/// A `Platform` carries no behaviour of its own. It names the outer and inner
/// shapes of a request so that settings, callbacks and endpoints can be generic
/// over a single parameter. The behaviour lives in
/// [`FactorySettings`](crate::FactorySettings).
///
/// # Example
///
/// ```rust
/// use lambda_endpoint_core::Platform;
///
/// struct Echo;
///
/// impl Platform for Echo {
///     type RawEvent = String;
///     type Event = String;
///     type Context = ();
///     type Payload = String;
///     type Result = String;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Platform`",
    label = "missing `Platform` implementation",
    note = "A Platform names the raw event, adapted event, context, payload and result types."
)]
pub trait Platform: Send + Sync + 'static {
    /// The platform-native event handed to the dispatch function.
    type RawEvent: Send + 'static;
    /// The adapted event that schemas validate and handlers receive.
    type Event: Clone + Send + Sync + 'static;
    /// The platform-native invocation context.
    type Context: Clone + Send + Sync + 'static;
    /// The input accepted by `create_response`.
    type Payload: Send + 'static;
    /// The platform-native result.
    type Result: Send + 'static;
}
