mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use std::sync::Arc;

use sms_api::create_app;
use sms_core::errors::ProviderError;
use sms_core::services::sms::MockSmsProvider;

use common::{app_state, app_state_with};

#[actix_web::test]
async fn test_send_sms_success() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/sendSms")
        .set_json(json!({
            "receivers": ["4781549300", "004781549301"],
            "message": "Hello",
            "referenceId": "ref-1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["requestId"], "mock-request-1");
    assert_eq!(body["messages"][1]["recipient"], "+4781549301");
    assert_eq!(body["messages"][0]["referenceId"], "ref-1");
    assert_eq!(provider.submit_count(), 1);
}

#[actix_web::test]
async fn test_send_sms_invalid_payload() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/sendSms")
        .set_json(json!({ "receivers": [], "message": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid payload");
    assert_eq!(
        body["errors"]["receivers"][0],
        "must contain between 1 and 1000 receivers"
    );
    assert_eq!(provider.submit_count(), 0);
}

#[actix_web::test]
async fn test_send_sms_schedule_below_minimum() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/sendSms")
        .set_json(json!({
            "receivers": ["4781549300"],
            "message": "hi",
            "scheduledIn": 500000
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["errors"]["schedule.relative"].is_array());
    assert_eq!(provider.submit_count(), 0);
}

#[actix_web::test]
async fn test_send_sms_malformed_json() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::post()
        .uri("/api/sendSms")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid payload: "));
}

#[actix_web::test]
async fn test_send_sms_relays_provider_error() {
    let failure = ProviderError::http(
        422,
        "POST request to 'https://p.test/messages' failed: Unprocessable Entity",
        Some(json!({ "title": "Invalid sender" })),
    );
    let provider = Arc::new(MockSmsProvider::failing(failure));
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::post()
        .uri("/api/sendSms")
        .set_json(json!({ "receivers": ["4781549300"], "message": "hi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "POST request to 'https://p.test/messages' failed: Unprocessable Entity"
    );
    assert_eq!(body["data"]["title"], "Invalid sender");
}

#[actix_web::test]
async fn test_send_sms_hides_provider_data_when_disabled() {
    let failure = ProviderError::http(500, "boom", Some(json!("secret detail")));
    let provider = Arc::new(MockSmsProvider::failing(failure));
    let app = test::init_service(create_app(app_state_with(provider, false))).await;

    let req = test::TestRequest::post()
        .uri("/api/sendSms")
        .set_json(json!({ "receivers": ["4781549300"], "message": "hi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "req-abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-abc");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::get().uri("/api/nothing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "The requested resource was not found");
}

#[actix_web::test]
async fn test_metrics_endpoint_serves_text() {
    let provider = Arc::new(MockSmsProvider::new());
    let app = test::init_service(create_app(app_state(provider))).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}
