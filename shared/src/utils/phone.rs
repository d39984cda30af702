//! Receiver number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Accepted raw receiver shapes: +{cc}{number}, 00{cc}{number} or {cc}{number}
static RECEIVER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^\+[0-9]{10,11}$)|(^00[0-9]{10,11}$)|(^[0-9]{10,11}$)").unwrap()
});

/// Check whether a raw receiver matches one of the accepted shapes
pub fn is_valid_receiver(receiver: &str) -> bool {
    RECEIVER_REGEX.is_match(receiver)
}

/// Convert a raw receiver into MSISDN format with a leading `+`
///
/// `+4781549300` is kept, `004781549300` and `4781549300` both become
/// `+4781549300`.
pub fn normalize_receiver(receiver: &str) -> String {
    if receiver.starts_with('+') {
        receiver.to_string()
    } else if let Some(rest) = receiver.strip_prefix("00") {
        format!("+{}", rest)
    } else {
        format!("+{}", receiver)
    }
}

/// Mask a phone number for logging (e.g., +47****9300)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
