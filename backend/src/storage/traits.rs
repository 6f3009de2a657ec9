//! # Storage Traits
//!
//! Storage abstraction used by the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::expense::{DomainExpense, NewExpense};

/// Trait defining the interface for expense storage operations
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// All expenses in insertion order
    async fn list_expenses(&self) -> Result<Vec<DomainExpense>>;

    /// Assign the next id to a validated expense and append it
    ///
    /// Id allocation and the append happen as one atomic step.
    async fn store_expense(&self, expense: NewExpense) -> Result<DomainExpense>;
}
