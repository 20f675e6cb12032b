//! Input validation helpers shared by the record services.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Length of a mobile number.
pub const MOBILE_NUMBER_LENGTH: usize = 10;

/// Accepts exactly ten ASCII digits.
///
/// # Errors
///
/// Returns a validation error for any other shape.
pub fn validate_mobile_number(value: &str) -> Result<(), ValidationError> {
    if value.len() == MOBILE_NUMBER_LENGTH && value.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(());
    }

    Err(ValidationError::new("mobile_number")
        .with_message(Cow::Borrowed("Please provide a valid 10 digit mobile number")))
}

/// Rejects empty and whitespace-only text.
///
/// # Errors
///
/// Returns a validation error when `value` has no visible characters.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }

    Ok(())
}

/// Flatten validator output into one message per violation, nested structs
/// and lists included. Messages are sorted so callers see a stable order.
#[must_use]
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut collected = Vec::new();

    collect(errors, &mut collected);

    collected.sort();
    collected.dedup();
    collected
}

fn collect(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| describe(field, error)));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect(nested, out);
                }
            }
        }
    }
}

/// Message for a single violation, falling back to naming the field.
#[must_use]
pub fn describe(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
}
