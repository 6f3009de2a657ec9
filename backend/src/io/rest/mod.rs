//! # REST API Interface Layer
//!
//! Axum handlers for the expense resource, the mappers from domain models to
//! wire DTOs, and the `ApiError` type that renders every failure response.

pub mod error;
pub mod expense_apis;
pub mod mappers;

pub use error::ApiError;
pub use expense_apis::*;
