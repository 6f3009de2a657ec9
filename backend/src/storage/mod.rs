//! # Storage Module
//!
//! Holds expenses for the lifetime of the process.
//!
//! The domain layer only sees the `ExpenseStorage` trait. The single
//! implementation keeps everything in memory: records are lost on restart and
//! every process owns its own disjoint store.

pub mod memory;
pub mod traits;

pub use memory::InMemoryExpenseRepository;
pub use traits::ExpenseStorage;
