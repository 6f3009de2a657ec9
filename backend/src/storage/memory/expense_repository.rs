//! In-memory expense repository.

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::domain::models::expense::{DomainExpense, NewExpense};
use crate::storage::traits::ExpenseStorage;

struct ExpenseTable {
    expenses: Vec<DomainExpense>,
    next_id: u64,
}

/// Process-local expense store guarded by a single lock
pub struct InMemoryExpenseRepository {
    table: RwLock<ExpenseTable>,
}

impl InMemoryExpenseRepository {
    /// Store preloaded with the two seed expenses, next id 3
    pub fn new() -> Self {
        Self::from_expenses(seed_expenses())
    }

    #[cfg(test)]
    fn empty() -> Self {
        Self::from_expenses(Vec::new())
    }

    /// Store holding `expenses` in the given order
    ///
    /// The next id continues after the largest id present.
    fn from_expenses(expenses: Vec<DomainExpense>) -> Self {
        let next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0).saturating_add(1);
        Self {
            table: RwLock::new(ExpenseTable { expenses, next_id }),
        }
    }
}

impl Default for InMemoryExpenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseStorage for InMemoryExpenseRepository {
    async fn list_expenses(&self) -> Result<Vec<DomainExpense>> {
        let table = self
            .table
            .read()
            .map_err(|_| anyhow!("expense store lock poisoned"))?;
        Ok(table.expenses.clone())
    }

    async fn store_expense(&self, expense: NewExpense) -> Result<DomainExpense> {
        let mut table = self
            .table
            .write()
            .map_err(|_| anyhow!("expense store lock poisoned"))?;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| anyhow!("expense id space exhausted"))?;

        let stored = expense.with_id(id);
        table.expenses.push(stored.clone());
        debug!("Stored expense {}, store now holds {}", id, table.expenses.len());

        Ok(stored)
    }
}

fn seed_expenses() -> Vec<DomainExpense> {
    vec![
        DomainExpense {
            id: 1,
            amount: 50.00,
            description: "Groceries".to_string(),
            category: "Food".to_string(),
            date: "2023-10-26".to_string(),
        },
        DomainExpense {
            id: 2,
            amount: 15.50,
            description: "Movie ticket".to_string(),
            category: "Entertainment".to_string(),
            date: "2023-10-25".to_string(),
        },
    ]
}
