//! Form validation shared by the account and transaction dialogs.
//!
//! The browser checks the `required`, `min` and `step` attributes before a
//! form is submitted. The same rules are checked again here so that an invalid
//! submission is rejected before anything is sent to the accounts API.

use maud::{Markup, html};

use crate::html::FORM_ERROR_STYLE;

/// A validation message for a single form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The validation messages for a form, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// The message for `field`, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the message for `field`, or nothing if it is valid.
    pub fn render(&self, field: &str) -> Markup {
        html!(
            @if let Some(message) = self.get(field) {
                p class=(FORM_ERROR_STYLE) data-field-error=(field) { (message) }
            }
        )
    }
}

/// Check that a required text field is not blank, returning the trimmed text.
pub fn required_text<'a>(
    value: &'a str,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        errors.push(field, "Please fill out this field.");
        return None;
    }

    Some(value)
}

/// Parse a required money amount that must be at least `min`.
pub fn required_amount(
    value: &str,
    min: f64,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let value = value.trim();

    if value.is_empty() {
        errors.push(field, "Please fill out this field.");
        return None;
    }

    match value.parse::<f64>() {
        Ok(amount) if !amount.is_finite() => {
            errors.push(field, "Please enter a number.");
            None
        }
        Ok(amount) if amount < min => {
            errors.push(
                field,
                format!("Value must be greater than or equal to {min}."),
            );
            None
        }
        Ok(amount) => Some(amount),
        Err(_) => {
            errors.push(field, "Please enter a number.");
            None
        }
    }
}
