//! CancelOrder command handler

use tracing::info;

use crate::auth;
use crate::error::LedgerError;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use shared::models::Capability;
use shared::order::{Order, OrderStatus};

/// CancelOrder action - terminates the order with an audit reason.
/// Items are kept on the cancelled order for audit.
#[derive(Debug, Clone)]
pub struct CancelOrderAction {
    pub reason: String,
}

impl OrderMutation for CancelOrderAction {
    fn apply(&self, order: &Order, ctx: &CommandContext<'_>) -> Result<Order, LedgerError> {
        ensure_active(order)?;
        auth::require(ctx.actor, Capability::CancelOrder)?;

        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(LedgerError::InvalidReason);
        }

        let mut next = order.clone();
        next.status = OrderStatus::Cancelled;
        next.cancel_reason = Some(reason.to_string());
        next.version += 1;

        info!(
            order_id = %next.order_id,
            reason = %reason,
            cancelled_by = %ctx.actor.name,
            "order cancelled"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::AddItemAction;
    use shared::models::{Actor, StaffRole};

    fn order_with_item(actor: &Actor) -> Order {
        let ctx = CommandContext::new(actor);
        let order = Order::new("tenant-1", "Table 4", Some("Table 4".to_string()), actor);
        AddItemAction {
            product_id: "prod-beer".to_string(),
            resolved_name: "Beer".to_string(),
            resolved_price: 5_000.0,
        }
        .apply(&order, &ctx)
        .unwrap()
    }

    #[test]
    fn manager_can_cancel_with_reason() {
        let manager = Actor::new("staff-1", "Mia", StaffRole::Manager);
        let ctx = CommandContext::new(&manager);
        let order = order_with_item(&manager);

        let cancelled = CancelOrderAction {
            reason: "customer left".to_string(),
        }
        .apply(&order, &ctx)
        .unwrap();

        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert_eq!(cancelled.cancel_reason.as_deref(), Some("customer left"));
        assert_eq!(cancelled.items.len(), 1);
        assert!(cancelled.is_terminal());
    }

    #[test]
    fn blank_reason_is_rejected() {
        let manager = Actor::new("staff-1", "Mia", StaffRole::Manager);
        let ctx = CommandContext::new(&manager);
        let order = order_with_item(&manager);

        let result = CancelOrderAction {
            reason: "   ".to_string(),
        }
        .apply(&order, &ctx);
        assert!(matches!(result, Err(LedgerError::InvalidReason)));
    }

    #[test]
    fn waiter_cannot_cancel() {
        let waiter = Actor::new("staff-5", "Walt", StaffRole::Waiter);
        let ctx = CommandContext::new(&waiter);
        let order = order_with_item(&waiter);

        let result = CancelOrderAction {
            reason: "mistake".to_string(),
        }
        .apply(&order, &ctx);
        assert!(matches!(result, Err(LedgerError::AccessDenied(_))));
    }

    #[test]
    fn cancelling_twice_is_rejected() {
        let manager = Actor::new("staff-1", "Mia", StaffRole::Manager);
        let ctx = CommandContext::new(&manager);
        let order = order_with_item(&manager);

        let action = CancelOrderAction {
            reason: "duplicate ticket".to_string(),
        };
        let cancelled = action.apply(&order, &ctx).unwrap();
        let replay = action.apply(&cancelled, &ctx);
        assert!(matches!(replay, Err(LedgerError::OrderAlreadyCancelled(_))));
    }
}
