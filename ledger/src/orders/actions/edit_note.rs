//! EditNote command handler

use crate::error::LedgerError;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use shared::order::Order;

/// EditNote action - sets or replaces the free-text note on a line.
/// A blank note clears the field so note-less merge identity keeps
/// working. No effect on the total.
#[derive(Debug, Clone)]
pub struct EditNoteAction {
    pub line_index: usize,
    pub note: String,
}

impl OrderMutation for EditNoteAction {
    fn apply(&self, order: &Order, _ctx: &CommandContext<'_>) -> Result<Order, LedgerError> {
        ensure_active(order)?;

        if self.line_index >= order.items.len() {
            return Err(LedgerError::StaleReference(format!(
                "line index {} out of bounds (order has {} lines)",
                self.line_index,
                order.items.len()
            )));
        }

        let mut next = order.clone();
        let trimmed = self.note.trim();
        next.items[self.line_index].note = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        next.version += 1;
        Ok(next)
    }
}
