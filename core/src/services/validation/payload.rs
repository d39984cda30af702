//! Inbound payload shape checks
//!
//! Runs on the raw JSON body so that wrong types are reported as field
//! errors instead of deserialization failures.

use serde_json::Value;

use sms_shared::phone::is_valid_receiver;
use sms_shared::validation::{validators, ValidationErrors};

pub const MAX_RECEIVERS: usize = 1000;

pub mod fields {
    pub const RECEIVERS: &str = "receivers";
    pub const MESSAGE: &str = "message";
}

/// Validate the `receivers` and `message` fields of a send payload
pub fn validate_payload(body: &Value) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let receivers = body.get(fields::RECEIVERS).and_then(Value::as_array);
    let count = receivers.map(|r| r.len()).unwrap_or(0);
    let strings: Option<Vec<&str>> =
        receivers.and_then(|r| r.iter().map(Value::as_str).collect());

    errors
        .field(fields::RECEIVERS)
        .rule(|| receivers.is_some(), "must be an array")
        .rule(
            || (1..=MAX_RECEIVERS).contains(&count),
            format!("must contain between 1 and {} receivers", MAX_RECEIVERS),
        )
        .rule(|| strings.is_some(), "must be an array of strings only")
        .rule(
            || {
                strings
                    .as_ref()
                    .map(|all| all.iter().all(|r| is_valid_receiver(r)))
                    .unwrap_or(false)
            },
            "all receivers must be in one of the following formats: '{countrycode}{number}', '+{countrycode}{number}', '00{countrycode}{number}'",
        );

    let message = body.get(fields::MESSAGE).and_then(Value::as_str);
    errors.field(fields::MESSAGE).rule(
        || message.map(validators::not_empty).unwrap_or(false),
        "must be a non-empty string",
    );

    errors.into_result()
}
