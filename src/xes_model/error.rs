use thiserror::Error;

use crate::attribute::AttributeKind;

#[derive(Error, Debug)]
pub enum XesError {
    /// A required key was empty or blank.
    #[error("Contract violation: attribute key must not be empty")]
    EmptyKey,

    #[error("Unrepresentable number: {0} does not fit a 64-bit signed integer")]
    UnrepresentableNumber(String),

    #[error("Kind mismatch for '{key}': expected {expected}, found {found}")]
    KindMismatch {
        key: String,
        expected: AttributeKind,
        found: AttributeKind,
    },

    #[error("Unknown attribute factory: {0}")]
    UnknownFactory(String),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, XesError>;
