//! Capability checks
//!
//! Elevated ledger operations call `require` before touching any state;
//! the check lives here, inside the core, so presentation surfaces cannot
//! bypass it by simply showing a button.

use crate::error::LedgerError;
use shared::models::{Actor, Capability};
use tracing::warn;

/// Fail with `AccessDenied` unless the actor's role grants the capability
pub fn require(actor: &Actor, cap: Capability) -> Result<(), LedgerError> {
    if actor.can(cap) {
        Ok(())
    } else {
        warn!(
            staff = %actor.name,
            role = ?actor.role,
            capability = ?cap,
            "capability check failed"
        );
        Err(LedgerError::AccessDenied(format!(
            "{:?} requires {:?}",
            actor.role, cap
        )))
    }
}
