//! Order Ledger
//!
//! Maintains the item collection and derived total for a single order and
//! produces new/updated `Order` values - never mutating caller state in
//! place. Functional-update discipline keeps the external store's change
//! detection working and makes every operation independently testable.
//!
//! # Data flow
//!
//! ```text
//! Command -> validate (status / capability / inputs)
//!         -> clone snapshot, mutate items
//!         -> recalculate total + bump version
//!         -> new Order value (caller persists via OrderStore)
//! ```

pub mod actions;
pub mod identity;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-exports
pub use actions::{
    merge_orders, split_order, AddItemAction, CancelOrderAction, EditNoteAction, MergeOutcome,
    OrderCommand, SetItemQuantityAction, SettlePaymentAction, SplitOutcome, VoidItemAction,
};
pub use identity::generate_instance_id;
pub use traits::{CommandContext, OrderMutation};
