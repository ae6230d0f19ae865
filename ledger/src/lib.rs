//! Core ledger for a bar/restaurant point of sale
//!
//! Two ledgers and their orchestration, all pure and synchronous:
//!
//! - **orders**: the line-item ledger for a tab/ticket - add, modify,
//!   void, split, merge, settle. Every operation takes the current
//!   snapshot and returns a new value or an error; persistence and
//!   broadcast stay with the caller.
//! - **spirits**: spirits-by-the-measure inventory - measure resolution,
//!   volume deduction against a chosen open bottle, and an append-only
//!   consumption log.
//! - **tabs**: table/walk-in orchestration with section gating.
//! - **reports**: read-only folds over the day's orders for the dashboard
//!   and the printable shift report.
//!
//! Nothing here blocks, suspends or touches I/O; the `store` module
//! defines the fire-and-forget boundary the host application implements.

pub mod auth;
pub mod error;
pub mod money;
pub mod orders;
pub mod reports;
pub mod spirits;
pub mod store;
pub mod tabs;

// Re-exports
pub use error::{ErrorCode, LedgerError};
pub use orders::traits::{CommandContext, OrderMutation};
