//! Expense service domain logic.
use std::sync::Arc;

use shared::{CreateExpenseRequest, Expense as SharedExpense};
use tracing::{info, warn};

use crate::domain::models::expense::ExpenseValidationError;
use crate::domain::validation::validate_create_request;
use crate::io::rest::mappers::expense_mapper::ExpenseMapper;
use crate::storage::ExpenseStorage;

#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseStorage>,
}

impl ExpenseService {
    pub fn new(expense_repository: Arc<dyn ExpenseStorage>) -> Self {
        Self { expense_repository }
    }

    /// All expenses in insertion order
    pub async fn list_expenses(&self) -> Result<Vec<SharedExpense>, ExpenseError> {
        let expenses = self.expense_repository.list_expenses().await?;
        info!("Listing {} expenses", expenses.len());

        Ok(expenses.into_iter().map(ExpenseMapper::to_dto).collect())
    }

    /// Validate and append a new expense, returning it with its assigned id
    pub async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<SharedExpense, ExpenseError> {
        let new_expense = validate_create_request(request).map_err(|e| {
            warn!("Rejected expense: {}", e);
            e
        })?;

        let stored = self.expense_repository.store_expense(new_expense).await?;
        info!("Created expense {} ({})", stored.id, stored.category);

        Ok(ExpenseMapper::to_dto(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryExpenseRepository;
    use shared::AmountInput;

    fn create_test_service() -> ExpenseService {
        ExpenseService::new(Arc::new(InMemoryExpenseRepository::new()))
    }

    fn request(amount: f64, date: &str) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount: Some(AmountInput::Number(amount)),
            description: Some("x".into()),
            category: Some("y".into()),
            date: Some(date.into()),
        }
    }

    #[tokio::test]
    async fn test_list_starts_with_seed_data() {
        let service = create_test_service();
        let expenses = service.list_expenses().await.unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id, 1);
        assert_eq!(expenses[0].description, "Groceries");
        assert_eq!(expenses[1].id, 2);
        assert_eq!(expenses[1].amount, 15.5);
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let service = create_test_service();

        let mut last_id = 2;
        for i in 0..5 {
            let expense = service
                .create_expense(request(1.0 + i as f64, "2024-02-01"))
                .await
                .unwrap();
            assert!(expense.id > last_id, "id {} should exceed {}", expense.id, last_id);
            last_id = expense.id;
        }
        assert_eq!(last_id, 7);
    }

    #[tokio::test]
    async fn test_list_after_creates_keeps_creation_order() {
        let service = create_test_service();

        let first = service.create_expense(request(3.0, "2024-02-01")).await.unwrap();
        let second = service.create_expense(request(4.0, "2024-02-02")).await.unwrap();

        let expenses = service.list_expenses().await.unwrap();
        assert_eq!(expenses.len(), 4);
        assert_eq!(expenses[2], first);
        assert_eq!(expenses[3], second);
    }

    #[tokio::test]
    async fn test_negative_amount_does_not_change_store() {
        let service = create_test_service();

        let result = service.create_expense(request(-5.0, "2023-01-01")).await;
        assert!(matches!(
            result,
            Err(ExpenseError::Validation(ExpenseValidationError::InvalidAmount))
        ));
        assert_eq!(service.list_expenses().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bad_date_rejected() {
        let service = create_test_service();

        let result = service.create_expense(request(10.0, "2023/01/01")).await;
        assert!(matches!(
            result,
            Err(ExpenseError::Validation(ExpenseValidationError::InvalidDateFormat))
        ));
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let service = create_test_service();

        let _ = service.create_expense(request(0.0, "2023-01-01")).await;
        let created = service.create_expense(request(8.0, "2023-01-01")).await.unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_listing_is_a_pure_read() {
        let service = create_test_service();
        service.create_expense(request(2.5, "2024-05-05")).await.unwrap();

        let first = service.list_expenses().await.unwrap();
        let second = service.list_expenses().await.unwrap();
        let third = service.list_expenses().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}
