//! Validation rules for incoming expenses.
//!
//! Checks run in a fixed order and stop at the first failure: presence of
//! amount, description, category and date, then amount positivity, then the
//! date shape. Nothing here touches the store.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use shared::{AmountInput, CreateExpenseRequest, TextInput};

use crate::domain::models::expense::{ExpenseValidationError, NewExpense};

// Shape only; 2023-13-45 is accepted.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// Validate a create request and turn it into fields ready for insertion
pub fn validate_create_request(
    request: CreateExpenseRequest,
) -> Result<NewExpense, ExpenseValidationError> {
    let CreateExpenseRequest {
        amount,
        description,
        category,
        date,
    } = request;

    let amount = amount.ok_or(ExpenseValidationError::MissingField("amount"))?;
    let description = require_text(description, "description")?;
    let category = require_text(category, "category")?;
    let date = require_text(date, "date")?;

    let amount = coerce_amount(&amount)
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(ExpenseValidationError::InvalidAmount)?;

    if !is_valid_date_format(&date) {
        return Err(ExpenseValidationError::InvalidDateFormat);
    }

    Ok(NewExpense {
        amount,
        description,
        category,
        date,
    })
}

/// Turn a submitted amount into a number, if it is one
///
/// Numeric strings are accepted as long as the whole (trimmed) string parses.
pub fn coerce_amount(input: &AmountInput) -> Option<f64> {
    match input {
        AmountInput::Number(value) => Some(*value),
        AmountInput::Text(text) => text.trim().parse::<f64>().ok(),
        AmountInput::Other(_) => None,
    }
}

pub fn is_valid_date_format(date: &str) -> bool {
    DATE_PATTERN.is_match(date)
}

/// Presence check for a text field, coercing non-string values to text
///
/// A non-string value is present unless it is `false` or `0`; it is then
/// stored as its JSON text (`5` becomes `"5"`).
fn require_text(
    value: Option<TextInput>,
    field: &'static str,
) -> Result<String, ExpenseValidationError> {
    match value {
        Some(TextInput::Text(text)) if !text.is_empty() => Ok(text),
        Some(TextInput::Other(value)) if is_present_value(&value) => Ok(match value {
            Value::String(text) => text,
            other => other.to_string(),
        }),
        _ => Err(ExpenseValidationError::MissingField(field)),
    }
}

fn is_present_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
