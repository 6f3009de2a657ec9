//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: exposing the expense resource over REST
//! - **Data Serialization**: JSON in and out through the `shared` DTOs
//! - **Error Translation**: mapping domain failures to status codes and
//!   `{ "error": ... }` bodies
//!
//! ## Supported Operations
//!
//! - **GET /api/expenses**: list every expense in insertion order
//! - **POST /api/expenses**: validate and create an expense
//! - Any other method on the resource answers 405 with `Allow: GET, POST`

pub mod rest;

pub use rest::*;
