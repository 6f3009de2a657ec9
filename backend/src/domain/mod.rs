//! # Domain Module
//!
//! Business logic for expense intake, independent of HTTP and of how
//! expenses are stored.
//!
//! ## Module Organization
//!
//! - **models**: the stored expense, validated input and validation errors
//! - **validation**: ordered field checks for create requests
//! - **expense_service**: list and create operations over an `ExpenseStorage`
//!
//! ## Business Rules
//!
//! - `amount`, `description`, `category` and `date` are all required
//! - Amounts must be finite and strictly positive
//! - Dates must look like `YYYY-MM-DD`; calendar correctness is not checked
//! - Ids are assigned by the store in increasing order
//! - A rejected request never mutates the store

pub mod expense_service;
pub mod models;
pub mod validation;

pub use expense_service::*;
