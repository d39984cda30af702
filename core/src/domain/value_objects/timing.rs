//! Schedule and expiration timing selection

use std::fmt;

/// How a schedule or expiration is expressed to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTiming {
    /// Offset from now in milliseconds
    Relative(i64),
    /// ISO 8601 UTC timestamp
    Absolute(String),
}

/// Pick the timing mode from optional relative and absolute inputs
///
/// Absolute wins when both are given.
pub fn resolve_timing(relative: Option<i64>, absolute: Option<&str>) -> Option<MessageTiming> {
    match (relative, absolute) {
        (_, Some(at)) => Some(MessageTiming::Absolute(at.to_string())),
        (Some(ms), None) => Some(MessageTiming::Relative(ms)),
        (None, None) => None,
    }
}

impl fmt::Display for MessageTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageTiming::Relative(ms) => {
                let seconds = *ms as f64 / 1000.0;
                write!(f, "in {} minutes ({} seconds)", seconds / 60.0, seconds)
            }
            MessageTiming::Absolute(at) => write!(f, "at {}", at),
        }
    }
}
