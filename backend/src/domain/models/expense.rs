/// An expense as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct DomainExpense {
    pub id: u64,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
}

/// Expense fields that passed validation and are waiting for an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
}

impl NewExpense {
    pub fn with_id(self, id: u64) -> DomainExpense {
        DomainExpense {
            id,
            amount: self.amount,
            description: self.description,
            category: self.category,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDateFormat,
}
