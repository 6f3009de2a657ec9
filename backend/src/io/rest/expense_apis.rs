//! # REST API for Expenses
//!
//! Endpoints for listing and creating expenses. Any other method on the
//! resource is answered by `method_not_allowed`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
};
use shared::CreateExpenseRequest;
use tracing::{error, info};

use crate::io::rest::error::ApiError;
use crate::AppState;

/// List all expenses
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    match state.expense_service.list_expenses().await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => {
            error!("Failed to list expenses: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            info!("POST /api/expenses - unreadable body: {}", rejection.body_text());
            return ApiError::from(rejection).into_response();
        }
    };
    info!("POST /api/expenses - request: {:?}", request);

    match state.expense_service.create_expense(request).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Fallback for every method other than GET and POST
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    info!("{} /api/expenses - method not allowed", method);
    ApiError::MethodNotAllowed(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseService;
    use crate::storage::InMemoryExpenseRepository;
    use axum::body::to_bytes;
    use axum::http::header;
    use axum::response::Response;
    use shared::{AmountInput, ErrorResponse, Expense};
    use std::sync::Arc;

    fn setup_test_state() -> AppState {
        AppState {
            expense_service: ExpenseService::new(Arc::new(InMemoryExpenseRepository::new())),
        }
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_request() -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount: Some(AmountInput::from(22.4)),
            description: Some("Taxi".into()),
            category: Some("Transport".into()),
            date: Some("2024-04-04".into()),
        }
    }

    #[tokio::test]
    async fn test_list_expenses_handler() {
        let state = setup_test_state();

        let response = list_expenses(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let expenses: Vec<Expense> = json_body(response).await;
        assert_eq!(expenses.len(), 2);
    }

    #[tokio::test]
    async fn test_create_expense_handler() {
        let state = setup_test_state();

        let response = create_expense(State(state.clone()), Ok(Json(valid_request())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let expense: Expense = json_body(response).await;
        assert_eq!(expense.id, 3);
        assert_eq!(expense.amount, 22.4);
        assert_eq!(expense.description, "Taxi");

        let listed = state.expense_service.list_expenses().await.unwrap();
        assert_eq!(listed.last(), Some(&expense));
    }

    #[tokio::test]
    async fn test_create_expense_validation_error() {
        let state = setup_test_state();

        let request = CreateExpenseRequest {
            amount: None,
            ..valid_request()
        };
        let response = create_expense(State(state), Ok(Json(request)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.error, "Missing required field: amount");
    }

    #[tokio::test]
    async fn test_method_not_allowed_handler() {
        let response = method_not_allowed(Method::DELETE).await.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET, POST");

        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.error, "Method DELETE Not Allowed");
    }
}
