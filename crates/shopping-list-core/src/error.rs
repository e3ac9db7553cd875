//! Error types for adding items

use thiserror::Error;

use crate::MAX_NAME_CHARS;

/// Why an add attempt was rejected, in validation order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    /// Name, amount or unit is blank after trimming
    #[error("all fields are required.")]
    MissingField,

    /// Amount is not a number, or not positive
    #[error("amount must be a positive number.")]
    InvalidAmount,

    /// Trimmed name is longer than the limit
    #[error("name exceeds {max} characters.", max = MAX_NAME_CHARS)]
    NameTooLong,

    /// An item with the same name (ignoring case) already exists
    #[error("duplicate item.")]
    Duplicate,
}
