//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`Validation`] returned when a caller hands over a record that breaks the
//!   model invariants. The store is never touched in that case.
//! - [`StorageRead`] returned when the persisted collection cannot be loaded.
//! - [`StorageWrite`] returned when the collection cannot be durably saved.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`StorageRead`]: EngineError::StorageRead
//!  [`StorageWrite`]: EngineError::StorageWrite
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage read failed: {0}")]
    StorageRead(String),
    #[error("Storage write failed: {0}")]
    StorageWrite(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::StorageRead(a), Self::StorageRead(b)) => a == b,
            (Self::StorageWrite(a), Self::StorageWrite(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            _ => false,
        }
    }
}
