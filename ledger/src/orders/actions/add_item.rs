//! AddItem command handler
//!
//! Adds one unit of a resolved product to an order, merging into an
//! existing line when the identity matches and the line has no note.

use crate::error::LedgerError;
use crate::money;
use crate::orders::identity::generate_instance_id;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use shared::models::Product;
use shared::order::{Order, OrderItem};
use tracing::debug;

/// AddItem action.
///
/// The name/price are the *resolved* values: for a measured spirit they
/// already carry the measure annotation and the measure's price tier, so
/// "Jameson (Double Tot)" never merges with a plain "Jameson" line.
#[derive(Debug, Clone)]
pub struct AddItemAction {
    pub product_id: String,
    pub resolved_name: String,
    pub resolved_price: f64,
}

impl AddItemAction {
    /// Plain catalog sale: name and price taken straight from the product
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            resolved_name: product.name.clone(),
            resolved_price: product.price,
        }
    }
}

impl OrderMutation for AddItemAction {
    fn apply(&self, order: &Order, _ctx: &CommandContext<'_>) -> Result<Order, LedgerError> {
        ensure_active(order)?;
        money::validate_line(self.resolved_price, 1)?;

        let instance_id =
            generate_instance_id(&self.product_id, &self.resolved_name, self.resolved_price);

        let mut next = order.clone();

        // Merge by identity, but never onto a line that carries a note -
        // a noted line is a distinct request even for the same product.
        if let Some(existing) = next
            .items
            .iter_mut()
            .find(|i| i.instance_id == instance_id && i.note.is_none())
        {
            existing.quantity += 1;
            existing.is_new = true;
        } else {
            next.items.push(OrderItem {
                product_id: self.product_id.clone(),
                instance_id,
                name: self.resolved_name.clone(),
                price: self.resolved_price,
                quantity: 1,
                note: None,
                is_new: true,
            });
        }

        money::recalculate_total(&mut next);
        next.version += 1;

        debug!(
            order_id = %next.order_id,
            item = %self.resolved_name,
            total = next.grand_total,
            "item added"
        );
        Ok(next)
    }
}
