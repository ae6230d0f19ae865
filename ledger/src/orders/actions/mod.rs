//! Command action implementations
//!
//! Each single-order action implements the `OrderMutation` trait and
//! handles one operation; `OrderCommand` dispatches statically via
//! enum_dispatch. Split and merge span multiple orders and keep their own
//! entry points.

use enum_dispatch::enum_dispatch;

use crate::error::LedgerError;
use crate::orders::traits::{CommandContext, OrderMutation};
use shared::order::Order;

mod add_item;
mod cancel_order;
mod edit_note;
mod merge_orders;
mod set_quantity;
mod settle_payment;
mod split_order;
mod void_item;

pub use add_item::AddItemAction;
pub use cancel_order::CancelOrderAction;
pub use edit_note::EditNoteAction;
pub use merge_orders::{merge_orders, MergeOutcome};
pub use set_quantity::SetItemQuantityAction;
pub use settle_payment::SettlePaymentAction;
pub use split_order::{split_order, SplitOutcome};
pub use void_item::VoidItemAction;

/// OrderCommand enum - dispatches to concrete single-order actions
#[enum_dispatch(OrderMutation)]
pub enum OrderCommand {
    AddItem(AddItemAction),
    SetItemQuantity(SetItemQuantityAction),
    EditNote(EditNoteAction),
    VoidItem(VoidItemAction),
    SettlePayment(SettlePaymentAction),
    CancelOrder(CancelOrderAction),
}
