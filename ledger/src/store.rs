//! Persistence boundary
//!
//! The ledger computes new values; the host application owns storage.
//! Implementations persist whole snapshots keyed by identifier and apply
//! last-writer-wins on `Order.version` when terminals race on one tab.
//! Calls are fire-and-forget from the ledger's point of view; persistence
//! errors surface through the host, not back through these traits.

use shared::models::SpiritBottle;
use shared::order::Order;

/// Order persistence supplied by the host shell
pub trait OrderStore {
    /// Persist a newly created order
    fn place_order(&mut self, order: &Order);

    /// Persist an updated snapshot. Implementations keep whichever of the
    /// stored and incoming snapshots carries the higher `version`.
    fn update_order(&mut self, order: &Order);

    /// Remove an order from the active set, keeping the reason for audit
    fn delete_order(&mut self, order_id: &str, reason: &str);

    /// Persist a merge result: the enlarged target plus the drained sources
    fn merge_orders(&mut self, target: &Order, sources: &[Order]);
}

/// Bottle inventory persistence supplied by the host shell
pub trait BottleStore {
    /// Persist the rewritten bottle set after a pour or restock
    fn update_bottles(&mut self, bottles: &[SpiritBottle]);
}
