//! Field validation utilities
//!
//! Errors are collected per field path. Each field runs its rules in order
//! and stops at the first failure; failures on different fields accumulate.

use serde::Serialize;
use std::collections::HashMap;

/// Validation error for a single field path
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(ValidationError::new(field, message));
    }

    /// Start a rule chain for one field path
    pub fn field(&mut self, field: impl Into<String>) -> FieldRules<'_> {
        FieldRules {
            errors: self,
            field: field.into(),
            failed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Ordered rules for one field; only the first failing rule is recorded
pub struct FieldRules<'a> {
    errors: &'a mut ValidationErrors,
    field: String,
    failed: bool,
}

impl FieldRules<'_> {
    /// Run `check` unless an earlier rule already failed
    pub fn rule<F>(mut self, check: F, message: impl Into<String>) -> Self
    where
        F: FnOnce() -> bool,
    {
        if !self.failed && !check() {
            self.errors.add_error(self.field.clone(), message);
            self.failed = true;
        }
        self
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// Trait for types that can be validated
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's length in UTF-16 code units is within bounds
    ///
    /// Characters outside the Basic Multilingual Plane count as two units,
    /// which is how the provider measures text length.
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.encode_utf16().count();
        len >= min && len <= max
    }

    /// Check if a number is within inclusive bounds
    pub fn in_range(value: i64, min: i64, max: i64) -> bool {
        value >= min && value <= max
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }
}
