//! Counter tests for the send orchestrator
//!
//! Each test runs the send inside a thread-local Prometheus recorder and
//! inspects the rendered text.

use chrono::{DateTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::json;
use std::future::Future;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::services::sms::{MockSmsProvider, SmsService, SmsServiceConfig};
use crate::telemetry::{SEND_SMS_ATTEMPTS, SEND_SMS_MESSAGES};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
}

fn service(provider: MockSmsProvider) -> SmsService<MockSmsProvider> {
    SmsService::new(Arc::new(provider), SmsServiceConfig::new("Facade"))
}

/// Run `send` against a fresh recorder and return the rendered metrics
fn recorded<F, Fut>(send: F) -> String
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::with_local_recorder(&recorder, || {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(send());
    });

    handle.render()
}

fn line(metric: &str, result: &str, value: u64) -> String {
    format!("{}{{result=\"{}\"}} {}", metric, result, value)
}

#[test]
fn test_success_counts_attempt_and_messages() {
    let service = service(MockSmsProvider::new());
    let body = json!({ "receivers": ["4781549300", "4781549301", "4781549302"], "message": "Hi" });

    let rendered = recorded(|| async {
        service.send_sms_at(&body, now()).await.unwrap();
    });

    assert!(rendered.contains(&line(SEND_SMS_ATTEMPTS, "success", 1)), "{}", rendered);
    assert!(rendered.contains(&line(SEND_SMS_MESSAGES, "success", 3)), "{}", rendered);
    assert!(!rendered.contains("result=\"failed\""), "{}", rendered);
}

#[test]
fn test_validation_failure_counts_zero_messages() {
    let service = service(MockSmsProvider::new());
    let body = json!({ "receivers": [], "message": "Hi" });

    let rendered = recorded(|| async {
        service.send_sms_at(&body, now()).await.unwrap_err();
    });

    assert!(rendered.contains(&line(SEND_SMS_ATTEMPTS, "failed", 1)), "{}", rendered);
    assert!(rendered.contains(&line(SEND_SMS_MESSAGES, "failed", 0)), "{}", rendered);
}

#[test]
fn test_provider_failure_counts_submitted_messages() {
    let failure = ProviderError::http(503, "POST request failed: Service Unavailable", None);
    let service = service(MockSmsProvider::failing(failure));
    let body = json!({ "receivers": ["4781549300", "4781549301"], "message": "Hi" });

    let rendered = recorded(|| async {
        service.send_sms_at(&body, now()).await.unwrap_err();
    });

    assert!(rendered.contains(&line(SEND_SMS_ATTEMPTS, "failed", 1)), "{}", rendered);
    assert!(rendered.contains(&line(SEND_SMS_MESSAGES, "failed", 2)), "{}", rendered);
    assert!(!rendered.contains("result=\"success\""), "{}", rendered);
}

#[test]
fn test_malformed_body_counts_failed_attempt() {
    let provider = Arc::new(MockSmsProvider::new());
    let service = SmsService::new(provider.clone(), SmsServiceConfig::new("Facade"));

    let rendered = recorded(|| async {
        service.send_sms_body_at(b"{ not json", now()).await.unwrap_err();
    });

    assert!(rendered.contains(&line(SEND_SMS_ATTEMPTS, "failed", 1)), "{}", rendered);
    assert!(rendered.contains(&line(SEND_SMS_MESSAGES, "failed", 0)), "{}", rendered);
    assert_eq!(provider.submit_count(), 0);
}
