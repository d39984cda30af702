mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;
use std::sync::Arc;

use sms_api::create_app;
use sms_core::services::sms::mock::{scheduled_message, MockSmsProvider};

use common::app_state;

fn provider_with(count: usize, per_page: usize) -> Arc<MockSmsProvider> {
    let items = (1..=count)
        .map(|i| scheduled_message(&format!("m-{}", i), Some("campaign")))
        .collect();
    Arc::new(MockSmsProvider::new().with_items(items, per_page))
}

#[actix_web::test]
async fn test_list_forwards_query() {
    let provider = provider_with(3, 2);
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::get()
        .uri("/api/scheduled/messages?tag=campaign&page=2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["items"][0]["messageId"], "m-3");
    assert_eq!(
        provider.list_queries(),
        vec![Some("tag=campaign&page=2".to_string())]
    );
}

#[actix_web::test]
async fn test_list_all_pages() {
    let provider = provider_with(5, 2);
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::get()
        .uri("/api/scheduled/messages?all=true")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["results"], 5);
    assert_eq!(provider.list_queries().len(), 3);
}

#[actix_web::test]
async fn test_get_message() {
    let provider = provider_with(2, 10);
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::get()
        .uri("/api/scheduled/messages/m-2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["messageId"], "m-2");
    assert_eq!(body["tag"], "campaign");
}

#[actix_web::test]
async fn test_get_unknown_message_relays_404() {
    let provider = provider_with(1, 10);
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::get()
        .uri("/api/scheduled/messages/missing")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_by_tag() {
    let provider = provider_with(1, 10);
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::delete()
        .uri("/api/scheduled/messages?tag=campaign")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let deleted = provider.deleted_filters();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].tag.as_deref(), Some("campaign"));
    assert!(deleted[0].message_id.is_none());
}

#[actix_web::test]
async fn test_delete_without_filter_is_rejected() {
    let provider = provider_with(1, 10);
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::delete()
        .uri("/api/scheduled/messages")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Bad Request: Missing messageId or tag in query parameters"
    );
    assert!(provider.deleted_filters().is_empty());
}

#[actix_web::test]
async fn test_get_blank_message_id_is_rejected() {
    let provider = provider_with(1, 10);
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::get()
        .uri("/api/scheduled/messages/%20")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Bad Request: Missing messageId in path parameters"
    );
}
