//! Metric registration and recording helpers.
//!
//! Uses the `metrics` facade; the binary installs a Prometheus recorder.
//! Without a recorder every call is a no-op.

use metrics::{counter, describe_counter};

pub const SEND_SMS_ATTEMPTS: &str = "sms_facade_send_sms_attempts";
pub const SEND_SMS_MESSAGES: &str = "sms_facade_send_sms_messages";
pub const ENDPOINT_CALLED: &str = "sms_facade_endpoint_called";
pub const PROVIDER_REQUESTS: &str = "sms_facade_provider_requests";
pub const PROVIDER_TOKEN: &str = "sms_facade_provider_token";

pub const RESULT_LABEL: &str = "result";

fn result_value(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failed"
    }
}

/// Register metric descriptions; call once after the recorder is installed
pub fn register_metrics() {
    describe_counter!(SEND_SMS_ATTEMPTS, "Number of send requests handled");
    describe_counter!(SEND_SMS_MESSAGES, "Number of SMS messages submitted to the provider");
    describe_counter!(ENDPOINT_CALLED, "Number of times an endpoint is called");
    describe_counter!(PROVIDER_REQUESTS, "Number of requests made to the provider");
    describe_counter!(PROVIDER_TOKEN, "Number of provider token requests");
}

/// One send attempt plus the messages it submitted
pub fn record_send(success: bool, submitted: usize) {
    counter!(SEND_SMS_ATTEMPTS, RESULT_LABEL => result_value(success)).increment(1);
    counter!(SEND_SMS_MESSAGES, RESULT_LABEL => result_value(success)).increment(submitted as u64);
}

pub fn record_endpoint_call(endpoint: &str, success: bool) {
    counter!(
        ENDPOINT_CALLED,
        "endpoint" => endpoint.to_string(),
        RESULT_LABEL => result_value(success)
    )
    .increment(1);
}

pub fn record_provider_request(method: &str, success: bool) {
    counter!(
        PROVIDER_REQUESTS,
        "method" => method.to_string(),
        RESULT_LABEL => result_value(success)
    )
    .increment(1);
}

pub fn record_token_request(success: bool) {
    counter!(PROVIDER_TOKEN, RESULT_LABEL => result_value(success)).increment(1);
}
