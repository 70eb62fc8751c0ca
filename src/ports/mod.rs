//! Ports (trait boundaries) for external dependencies.
//!
//! The agent owns the interface to its persistence store; concrete storage
//! backends live in [`crate::adapters`] and implement the traits here.

pub mod repository;

pub use repository::TableRepository;
