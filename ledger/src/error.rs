//! Ledger errors
//!
//! Every condition here is local and recoverable: the operation reports
//! failure, previously committed state stays untouched, and the caller
//! decides whether to retry, prompt the operator or discard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("pour of {requested_ml}ml exceeds remaining {available_ml}ml")]
    InsufficientVolume {
        requested_ml: f64,
        available_ml: f64,
    },

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("a non-empty reason is required")]
    InvalidReason,

    #[error("register is not open")]
    RegisterClosed,

    #[error("stale reference: {0}")]
    StaleReference(String),

    #[error("order already paid: {0}")]
    OrderAlreadyPaid(String),

    #[error("order already cancelled: {0}")]
    OrderAlreadyCancelled(String),

    #[error("order already merged: {0}")]
    OrderAlreadyMerged(String),

    #[error("insufficient quantity on line {instance_id}: requested {requested}, available {available}")]
    InsufficientQuantity {
        instance_id: String,
        requested: i32,
        available: i32,
    },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Operator-facing error classification (the presentation surface decides
/// wording and localization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InsufficientVolume,
    AccessDenied,
    InvalidReason,
    RegisterClosed,
    StaleReference,
    OrderAlreadyPaid,
    OrderAlreadyCancelled,
    OrderAlreadyMerged,
    InsufficientQuantity,
    InvalidOperation,
}

impl From<&LedgerError> for ErrorCode {
    fn from(err: &LedgerError) -> Self {
        match err {
            LedgerError::InsufficientVolume { .. } => ErrorCode::InsufficientVolume,
            LedgerError::AccessDenied(_) => ErrorCode::AccessDenied,
            LedgerError::InvalidReason => ErrorCode::InvalidReason,
            LedgerError::RegisterClosed => ErrorCode::RegisterClosed,
            LedgerError::StaleReference(_) => ErrorCode::StaleReference,
            LedgerError::OrderAlreadyPaid(_) => ErrorCode::OrderAlreadyPaid,
            LedgerError::OrderAlreadyCancelled(_) => ErrorCode::OrderAlreadyCancelled,
            LedgerError::OrderAlreadyMerged(_) => ErrorCode::OrderAlreadyMerged,
            LedgerError::InsufficientQuantity { .. } => ErrorCode::InsufficientQuantity,
            LedgerError::InvalidOperation(_) => ErrorCode::InvalidOperation,
        }
    }
}

impl LedgerError {
    pub fn code(&self) -> ErrorCode {
        self.into()
    }
}
