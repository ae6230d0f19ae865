//! SettlePayment command handler

use tracing::info;

use crate::auth;
use crate::error::LedgerError;
use crate::money;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use shared::models::Capability;
use shared::order::{Order, OrderStatus, PaymentMethod};

/// SettlePayment action - records payment and moves the order to Paid.
///
/// Paid is terminal, so replaying the same settlement against the
/// already-paid order fails with OrderAlreadyPaid instead of double
/// charging. Staff-debt methods re-attribute the order to the debited
/// staff member so debt reports group by a stable name.
#[derive(Debug, Clone)]
pub struct SettlePaymentAction {
    pub method: PaymentMethod,
    pub amount: f64,
    pub completed_by: String,
    /// Required when `method` is a staff-debt method (SalaryPay, StaffCredit).
    pub staff_debited: Option<String>,
}

impl OrderMutation for SettlePaymentAction {
    fn apply(&self, order: &Order, ctx: &CommandContext<'_>) -> Result<Order, LedgerError> {
        ensure_active(order)?;
        if !ctx.register_open() {
            return Err(LedgerError::RegisterClosed);
        }
        auth::require(ctx.actor, Capability::SettlePayment)?;
        money::validate_amount(self.amount)?;

        let mut next = order.clone();
        if self.method.is_staff_debt() {
            let debited = self
                .staff_debited
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    LedgerError::InvalidOperation(format!(
                        "{} settlement requires the debited staff member",
                        self.method
                    ))
                })?;
            next.customer_name = debited.to_string();
        }

        next.status = OrderStatus::Paid;
        next.amount_paid = self.amount;
        next.payment_method = Some(self.method);
        next.completed_by = Some(self.completed_by.clone());
        next.version += 1;

        info!(
            order_id = %next.order_id,
            method = %self.method,
            amount = self.amount,
            completed_by = %self.completed_by,
            "order settled"
        );
        Ok(next)
    }
}
