mod common;

use common::{Gateway, context, factory, invalid_request, schema, valid_request};
use lambda_endpoint::{
    Callbacks, EndpointCall, Settings,
    proxy::{ApiResponse, ProxyResponse},
    testing::CountingHandler,
};

fn tag(response: &mut ProxyResponse, layer: &str) {
    let tags = response
        .headers
        .get("x-layer")
        .map(|existing| format!("{existing},{layer}"))
        .unwrap_or_else(|| layer.to_string());
    response.set_header("x-layer", tags);
}

fn base_callbacks() -> Callbacks<Gateway> {
    Callbacks::<Gateway>::new()
        .on_result(|_, response, _| {
            tag(response, "g");
            Ok(())
        })
        .on_handled_error(|_, _, _| async {
            Ok(Some(ProxyResponse {
                status_code: 418,
                ..Default::default()
            }))
        })
}

#[tokio::test]
async fn test_extend_replaces_only_the_named_callback() {
    let base = factory().extend(Settings::from(base_callbacks()));
    let callbacks = Callbacks::<Gateway>::new().on_result(|_, response, _| {
        tag(response, "f");
        Ok(())
    });
    let child = base.extend(Settings::from(callbacks));
    let endpoint = child.build(
        schema(),
        CountingHandler::new().handler::<Gateway>(ApiResponse::new()),
    );

    let rejected = endpoint.call(invalid_request(), context()).await.unwrap();
    assert_eq!(rejected.status_code, 418);
    assert_eq!(rejected.headers.get("x-layer").map(String::as_str), Some("f"));

    let ok = endpoint.call(valid_request(), context()).await.unwrap();
    assert_eq!(ok.headers.get("x-layer").map(String::as_str), Some("f"));
}

#[tokio::test]
async fn test_extend_leaves_parent_untouched() {
    let base = factory().extend(Settings::from(base_callbacks()));
    let _child = base.extend(Settings::new().without_validation());

    assert!(base.default_settings().validates());
    let endpoint = base.build(
        schema(),
        CountingHandler::new().handler::<Gateway>(ApiResponse::new()),
    );
    let ok = endpoint.call(valid_request(), context()).await.unwrap();
    assert_eq!(ok.headers.get("x-layer").map(String::as_str), Some("g"));
}

#[tokio::test]
async fn test_per_endpoint_callbacks_merge_over_defaults() {
    let base = factory().extend(Settings::from(base_callbacks()));
    let callbacks = Callbacks::<Gateway>::new().on_handled_error(|_, _, _| async { Ok(None) });
    let options = Settings::from(callbacks);
    let endpoint = base.build_with_options(
        schema(),
        options,
        CountingHandler::new().handler::<Gateway>(ApiResponse::new()),
    );

    let rejected = endpoint.call(invalid_request(), context()).await.unwrap();

    // Error result builder output, still tagged by the inherited on_result.
    assert_eq!(rejected.status_code, 400);
    assert_eq!(rejected.headers.get("x-layer").map(String::as_str), Some("g"));
    assert!(endpoint.options().callbacks.on_event.is_none());
}

#[tokio::test]
async fn test_per_endpoint_validate_overrides_defaults() {
    let counter = CountingHandler::new();
    let lenient = factory().extend(Settings::new().without_validation());

    let unchecked = lenient.build(schema(), counter.handler::<Gateway>(ApiResponse::new()));
    let response = unchecked.call(invalid_request(), context()).await.unwrap();
    assert_eq!(response.status_code, 200);

    let checked = lenient.build_with_options(
        schema(),
        Settings::new().with_validate(true),
        counter.handler::<Gateway>(ApiResponse::new()),
    );
    let response = checked.call(invalid_request(), context()).await.unwrap();
    assert_eq!(response.status_code, 400);

    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_build_call_shapes_match_named_builders() {
    let factory = factory().extend(Settings::from(base_callbacks()));
    let counter = CountingHandler::new();

    let validated = factory.build_call(
        EndpointCall::Validated { schema: schema() },
        counter.handler::<Gateway>(ApiResponse::new()),
    );
    let with_options = factory.build_call(
        EndpointCall::WithOptions {
            schema: schema(),
            options: Settings::new().without_validation(),
        },
        counter.handler::<Gateway>(ApiResponse::new()),
    );

    assert_eq!(
        validated.call(invalid_request(), context()).await.unwrap().status_code,
        418
    );
    assert_eq!(
        with_options
            .call(invalid_request(), context())
            .await
            .unwrap()
            .status_code,
        200
    );
    assert_eq!(counter.count(), 1);
    assert_eq!(validated.schema().summary(), Some("echo"));
}
