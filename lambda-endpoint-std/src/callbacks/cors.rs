use crate::proxy::{ApiGateway, ProxyResponse};
use lambda_endpoint_core::Callbacks;

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Callbacks that allow cross-origin requests from `origin`.
///
/// Sets `on_result` only, so the header lands on successful responses and on
/// validation error responses alike. Results produced by `on_unhandled_error`
/// do not pass through `on_result` and must set the header themselves.
pub fn cors<C>(origin: impl Into<String>) -> Callbacks<ApiGateway<C>>
where
    C: Clone + Send + Sync + 'static,
{
    let origin = origin.into();
    Callbacks::<ApiGateway<C>>::new().on_result(move |_, response: &mut ProxyResponse, _| {
        response.set_header(ALLOW_ORIGIN, origin.as_str());
        Ok(())
    })
}
