//! Command traits and execution context

use crate::error::LedgerError;
// The enum_dispatch expansion for `OrderMutation` lands in this scope and
// names the dispatched enum and every variant type.
use crate::orders::actions::{
    AddItemAction, CancelOrderAction, EditNoteAction, OrderCommand, SetItemQuantityAction,
    SettlePaymentAction, VoidItemAction,
};
use enum_dispatch::enum_dispatch;
use shared::models::{Actor, RegisterSession};
use shared::order::Order;

/// Per-command execution context: who is acting, and whether a register
/// session is open (settlement is refused without one).
#[derive(Debug, Clone)]
pub struct CommandContext<'a> {
    pub actor: &'a Actor,
    pub register: Option<&'a RegisterSession>,
}

impl<'a> CommandContext<'a> {
    pub fn new(actor: &'a Actor) -> Self {
        Self {
            actor,
            register: None,
        }
    }

    /// Attach an open register session (required for settlement)
    pub fn with_register(mut self, register: &'a RegisterSession) -> Self {
        self.register = Some(register);
        self
    }

    /// True when an open register session is attached
    pub fn register_open(&self) -> bool {
        self.register.map(|r| r.is_open()).unwrap_or(false)
    }
}

/// A single-order mutation: pure `(order, ctx) -> new order | error`.
///
/// Implementations must validate everything before writing any field -
/// a failed command leaves no partial effect.
#[enum_dispatch]
pub trait OrderMutation {
    fn apply(&self, order: &Order, ctx: &CommandContext<'_>) -> Result<Order, LedgerError>;
}

/// Reject any mutation on an order in a terminal state
pub(crate) fn ensure_active(order: &Order) -> Result<(), LedgerError> {
    use shared::order::OrderStatus;
    match order.status {
        OrderStatus::Paid => Err(LedgerError::OrderAlreadyPaid(order.order_id.clone())),
        OrderStatus::Cancelled => Err(LedgerError::OrderAlreadyCancelled(order.order_id.clone())),
        OrderStatus::Merged => Err(LedgerError::OrderAlreadyMerged(order.order_id.clone())),
        _ => Ok(()),
    }
}
