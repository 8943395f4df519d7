//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidField`] thrown when a required expense field is missing or still
//!   holds its placeholder.
//! - [`InvalidAmount`] thrown when the amount is not a number.
//! - [`MirrorWrite`] thrown when the CSV mirror could not be appended. The
//!   expense is already stored at that point.
//!
//!  [`InvalidField`]: EngineError::InvalidField
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`MirrorWrite`]: EngineError::MirrorWrite
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidField(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("expense {id} stored, but the mirror file was not updated: {reason}")]
    MirrorWrite { id: i64, reason: String },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidField(a), Self::InvalidField(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (
                Self::MirrorWrite { id: a, reason: ra },
                Self::MirrorWrite { id: b, reason: rb },
            ) => a == b && ra == rb,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
