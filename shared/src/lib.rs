//! Shared types for the bar ledger
//!
//! Domain data model and boundary types used across the workspace:
//! catalog products, spirit bottles, staff/roles, register sessions,
//! order snapshots and the print boundary payloads.

pub mod models;
pub mod order;
pub mod printing;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
