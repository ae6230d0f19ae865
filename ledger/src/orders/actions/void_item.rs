//! VoidItem command handler
//!
//! Manager-gated removal of an entire line with a recorded reason. This
//! is the only quantity-reduction path available to ordinary operators;
//! it is not interchangeable with SetItemQuantity.

use crate::auth;
use crate::error::LedgerError;
use crate::money;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use shared::models::Capability;
use shared::order::Order;
use tracing::info;

/// VoidItem action
#[derive(Debug, Clone)]
pub struct VoidItemAction {
    pub line_index: usize,
    pub reason: String,
}

impl OrderMutation for VoidItemAction {
    fn apply(&self, order: &Order, ctx: &CommandContext<'_>) -> Result<Order, LedgerError> {
        ensure_active(order)?;
        auth::require(ctx.actor, Capability::VoidItem)?;

        if self.reason.trim().is_empty() {
            return Err(LedgerError::InvalidReason);
        }
        if self.line_index >= order.items.len() {
            return Err(LedgerError::StaleReference(format!(
                "line index {} out of bounds (order has {} lines)",
                self.line_index,
                order.items.len()
            )));
        }

        let mut next = order.clone();
        let removed = next.items.remove(self.line_index);
        money::recalculate_total(&mut next);
        next.version += 1;

        info!(
            order_id = %next.order_id,
            item = %removed.name,
            quantity = removed.quantity,
            reason = %self.reason,
            voided_by = %ctx.actor.name,
            "item voided"
        );
        Ok(next)
    }
}
