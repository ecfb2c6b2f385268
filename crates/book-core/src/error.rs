//! Error types for the book core.

use thiserror::Error;

use crate::order::OrderId;

/// Failure inside a single side book.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SideBookError {
    /// An order with this identifier is already resting in the book.
    #[error("order {0} is already resting")]
    DuplicateOrder(OrderId),
}

/// Failure while applying an instruction to the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    SideBook(#[from] SideBookError),
}
