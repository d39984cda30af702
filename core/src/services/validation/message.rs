//! Provider message contract
//!
//! Each field path runs an ordered rule chain and reports only its first
//! failure. Enumerated fields (`sms.encoding`, `sms.obfuscate`,
//! `callback.mode`, `priority`) are closed Rust enums, so membership is
//! enforced when a message is built or deserialized.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use sms_shared::validation::{validators, Validate, ValidationErrors};

use crate::domain::entities::{
    MessageCallback, MessageExpiration, MessageSchedule, ProviderSmsMessage,
};
use crate::domain::value_objects::CallbackMode;

pub const TEXT_MAX_CHARS: usize = 38_862;
pub const REFERENCE_ID_MAX_CHARS: usize = 500;
pub const TAG_MAX_CHARS: usize = 79;
pub const SCHEDULE_MIN_MS: i64 = 600_000;
pub const SCHEDULE_MAX_MS: i64 = 7_889_232_000;
pub const EXPIRATION_MIN_MS: i64 = 1;
pub const EXPIRATION_MAX_MS: i64 = 172_800_000;
pub const CALLBACK_TTL_MAX_MS: i64 = 28_800_000;

/// Field paths used as error keys
pub mod fields {
    pub const RECIPIENT: &str = "recipient";
    pub const TEXT: &str = "content.text";
    pub const SENDER: &str = "content.options['sms.sender']";
    pub const SCHEDULE_RELATIVE: &str = "schedule.relative";
    pub const SCHEDULE_ABSOLUTE: &str = "schedule.absolute";
    pub const SCHEDULE_TAG: &str = "schedule.tag";
    pub const EXPIRATION_RELATIVE: &str = "expiration.relative";
    pub const EXPIRATION_ABSOLUTE: &str = "expiration.absolute";
    pub const CALLBACK_URLS: &str = "callback.urls";
    pub const CALLBACK_GATE_ID: &str = "callback.gateId";
    pub const CALLBACK_TTL: &str = "callback.ttl";
    pub const REFERENCE_ID: &str = "referenceId";
}

static MSISDN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+.*$").unwrap());

static SENDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\+?[0-9]{1,15}|[A-Za-z0-9\s+\-/'"!#%&()*.?><;]{1,11})$"#).unwrap()
});

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

const REQUIRED: &str = "is required";
const INVALID_DATE: &str = "must be an ISO8601 formatted date string in UTC";

/// Validate a provider message against the current wall clock
pub fn validate_message(message: &ProviderSmsMessage) -> Result<(), ValidationErrors> {
    validate_message_at(message, Utc::now())
}

/// Validate a provider message; `now` anchors the absolute schedule window
pub fn validate_message_at(
    message: &ProviderSmsMessage,
    now: DateTime<Utc>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors
        .field(fields::RECIPIENT)
        .rule(|| validators::not_empty(&message.recipient), REQUIRED)
        .rule(
            || validators::matches_pattern(&message.recipient, &MSISDN_REGEX),
            "must be in MSISDN format (start with + and country code)",
        );

    let text = &message.content.text;
    errors
        .field(fields::TEXT)
        .rule(|| validators::not_empty(text), REQUIRED)
        .rule(
            || validators::length_between(text, 0, TEXT_MAX_CHARS),
            format!(
                "must be greater than or equal to 0 and less than or equal to {} characters",
                TEXT_MAX_CHARS
            ),
        );

    let sender = &message.content.options.sender;
    errors
        .field(fields::SENDER)
        .rule(|| validators::not_empty(sender), REQUIRED)
        .rule(
            || validators::matches_pattern(sender, &SENDER_REGEX),
            "must be alphanumeric (max 11 characters) or numeric (max 15 digits, can start with +)",
        );

    if let Some(schedule) = &message.schedule {
        validate_schedule(schedule, now, &mut errors);
    }
    if let Some(expiration) = &message.expiration {
        validate_expiration(expiration, &mut errors);
    }
    if let Some(callback) = &message.callback {
        validate_callback(callback, &mut errors);
    }

    if let Some(reference_id) = &message.reference_id {
        errors.field(fields::REFERENCE_ID).rule(
            || validators::length_between(reference_id, 0, REFERENCE_ID_MAX_CHARS),
            format!("must not be greater than {} characters", REFERENCE_ID_MAX_CHARS),
        );
    }

    errors.into_result()
}

impl Validate for ProviderSmsMessage {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_message(self)
    }
}

// Relative is checked only without absolute and vice versa, so a schedule
// carrying both is accepted as-is.
fn validate_schedule(schedule: &MessageSchedule, now: DateTime<Utc>, errors: &mut ValidationErrors) {
    if schedule.absolute.is_none() {
        let relative = schedule.relative;
        errors
            .field(fields::SCHEDULE_RELATIVE)
            .rule(|| relative.is_some(), REQUIRED)
            .rule(
                || {
                    relative
                        .map(|ms| validators::in_range(ms, SCHEDULE_MIN_MS, SCHEDULE_MAX_MS))
                        .unwrap_or(false)
                },
                "must be between (inclusive) 600_000 milliseconds (10 minutes) and 7_889_232_000 milliseconds (3 months)",
            );
    }

    if schedule.relative.is_none() {
        let absolute = schedule.absolute.as_deref().unwrap_or_default();
        let parsed = parse_instant(absolute);
        errors
            .field(fields::SCHEDULE_ABSOLUTE)
            .rule(|| validators::not_empty(absolute), REQUIRED)
            .rule(|| parsed.is_some(), INVALID_DATE)
            .rule(
                || {
                    parsed
                        .map(|at| {
                            let ahead = (at - now).num_milliseconds();
                            validators::in_range(ahead, SCHEDULE_MIN_MS, SCHEDULE_MAX_MS)
                        })
                        .unwrap_or(false)
                },
                "must be between (inclusive) 10 minutes and 3 months in the future",
            );
    }

    if let Some(tag) = &schedule.tag {
        errors
            .field(fields::SCHEDULE_TAG)
            .rule(
                || validators::length_between(tag, 1, TAG_MAX_CHARS),
                format!("must be between (inclusive) 1 and {} characters", TAG_MAX_CHARS),
            )
            .rule(
                || validators::matches_pattern(tag, &TAG_REGEX),
                "can only contain alphanumeric characters, underscores and hyphens",
            );
    }
}

// No future window and no exclusivity check here, unlike schedules.
fn validate_expiration(expiration: &MessageExpiration, errors: &mut ValidationErrors) {
    if let Some(relative) = expiration.relative {
        errors.field(fields::EXPIRATION_RELATIVE).rule(
            || validators::in_range(relative, EXPIRATION_MIN_MS, EXPIRATION_MAX_MS),
            "must be between (inclusive) 1 and 172800000 milliseconds (48 hours)",
        );
    }

    if let Some(absolute) = &expiration.absolute {
        errors
            .field(fields::EXPIRATION_ABSOLUTE)
            .rule(|| validators::not_empty(absolute), REQUIRED)
            .rule(|| parse_instant(absolute).is_some(), INVALID_DATE);
    }
}

fn validate_callback(callback: &MessageCallback, errors: &mut ValidationErrors) {
    match callback.mode {
        Some(CallbackMode::Url) => {
            errors.field(fields::CALLBACK_URLS).rule(
                || callback.urls.as_ref().map(|u| !u.is_empty()).unwrap_or(false),
                "is required when mode is URL",
            );
        }
        Some(CallbackMode::Gate) => {
            errors.field(fields::CALLBACK_GATE_ID).rule(
                || {
                    callback
                        .gate_id
                        .as_deref()
                        .map(validators::not_empty)
                        .unwrap_or(false)
                },
                "is required when mode is Gate",
            );
        }
        _ => {}
    }

    let delivers = callback.mode.map(|m| m.delivers()).unwrap_or(false);
    if let (Some(ttl), true) = (callback.ttl, delivers) {
        errors.field(fields::CALLBACK_TTL).rule(
            || validators::in_range(ttl, 0, CALLBACK_TTL_MAX_MS),
            "must be between (inclusive) 0 and 28800000 milliseconds (8 hours)",
        );
    }
}

/// Parse an ISO 8601 instant; offset-less values are read as UTC
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
