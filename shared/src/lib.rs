use serde::{Deserialize, Serialize};

/// A single tracked expense as it travels over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Positive id, assigned by the server in increasing order
    pub id: u64,
    /// Strictly positive amount
    pub amount: f64,
    pub description: String,
    pub category: String,
    /// Date in YYYY-MM-DD form
    pub date: String,
}

/// Body of POST /api/expenses
///
/// Every field is optional here so that a missing field can be reported by
/// name instead of failing deserialization as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub description: Option<TextInput>,
    #[serde(default)]
    pub category: Option<TextInput>,
    #[serde(default)]
    pub date: Option<TextInput>,
}

/// Loosely-typed amount as submitted by a client
///
/// Accepts a JSON number or a numeric string; anything else lands in
/// `Other` and is rejected during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// Loosely-typed text field as submitted by a client
///
/// Strings land in `Text`; any other JSON value is kept in `Other` so the
/// field still counts as present and validation decides what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    Other(serde_json::Value),
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        TextInput::Text(value.to_string())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        TextInput::Text(value)
    }
}

/// Error body returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
