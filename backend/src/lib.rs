//! # Expense Intake Backend
//!
//! HTTP service that lists and records expenses held in process memory.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST handlers, error translation)
//!     ↓
//! Domain Layer (validation, expense service)
//!     ↓
//! Storage Layer (in-memory repository)
//! ```
//!
//! The store is created once in [`initialize_backend`] and handed to every
//! handler through axum state, so each router owns an independent store.

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use std::any::Any;
use std::sync::Arc;

use axum::{http::Method, response::Response, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::{Config, CorsOrigins};
use crate::domain::ExpenseService;
use crate::io::rest::error::internal_error_response;
use crate::storage::InMemoryExpenseRepository;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
}

/// Initialize the backend with a freshly seeded store
pub fn initialize_backend() -> AppState {
    info!("Setting up in-memory expense store");
    AppState {
        expense_service: ExpenseService::new(Arc::new(InMemoryExpenseRepository::new())),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    // CORS setup to allow browser frontends to make requests
    let cors_layer = CorsLayer::new()
        .allow_origin(match &config.cors_origins {
            CorsOrigins::Any => AllowOrigin::from(cors::Any),
            CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
        })
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(cors::Any);

    let api_routes = Router::new().route(
        "/expenses",
        get(io::list_expenses)
            .head(io::method_not_allowed)
            .post(io::create_expense)
            .fallback(io::method_not_allowed),
    );

    Router::new()
        .nest("/api", api_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state)
}

/// Turn a panic inside a handler into the generic 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {}", detail);
    internal_error_response()
}
