#![cfg(feature = "tower")]

mod common;

use common::{Gateway, context, factory, invalid_request, schema, valid_request};
use lambda_endpoint::{proxy::ApiResponse, testing::CountingHandler};
use tower::Service;

#[tokio::test]
async fn test_endpoint_as_service() {
    let counter = CountingHandler::new();
    let mut service = factory().build(schema(), counter.handler::<Gateway>(ApiResponse::new()));

    let ok = Service::call(&mut service, (valid_request(), context()))
        .await
        .unwrap();
    let rejected = Service::call(&mut service, (invalid_request(), context()))
        .await
        .unwrap();

    assert_eq!(ok.status_code, 200);
    assert_eq!(rejected.status_code, 400);
    assert_eq!(counter.count(), 1);
}
