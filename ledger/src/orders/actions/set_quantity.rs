//! SetItemQuantity command handler
//!
//! Sets a line quantity directly. This is the elevated path: ordinary
//! quantity decreases go through VoidItem with a recorded reason, so a
//! decreasing change here requires the ReduceQuantity capability.

use crate::auth;
use crate::error::LedgerError;
use crate::money;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use shared::models::Capability;
use shared::order::Order;
use tracing::debug;

/// SetItemQuantity action
#[derive(Debug, Clone)]
pub struct SetItemQuantityAction {
    pub line_index: usize,
    pub new_quantity: i32,
}

impl OrderMutation for SetItemQuantityAction {
    fn apply(&self, order: &Order, ctx: &CommandContext<'_>) -> Result<Order, LedgerError> {
        ensure_active(order)?;

        let Some(line) = order.items.get(self.line_index) else {
            return Err(LedgerError::StaleReference(format!(
                "line index {} out of bounds (order has {} lines)",
                self.line_index,
                order.items.len()
            )));
        };

        if self.new_quantity < line.quantity {
            auth::require(ctx.actor, Capability::ReduceQuantity)?;
        }
        if self.new_quantity > 0 {
            money::validate_line(line.price, self.new_quantity)?;
        }

        let mut next = order.clone();
        if self.new_quantity <= 0 {
            // A zero-quantity line is removed, never retained
            next.items.remove(self.line_index);
        } else {
            next.items[self.line_index].quantity = self.new_quantity;
        }

        money::recalculate_total(&mut next);
        next.version += 1;

        debug!(
            order_id = %next.order_id,
            line = self.line_index,
            quantity = self.new_quantity,
            total = next.grand_total,
            "quantity set"
        );
        Ok(next)
    }
}
