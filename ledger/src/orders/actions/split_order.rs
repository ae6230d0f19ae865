//! Split an order into one or more new orders
//!
//! Splitting moves whole units between tickets; quantities are conserved
//! across the source and the children. Validation runs against the
//! untouched source first, so a bad request leaves every order as it was.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::LedgerError;
use crate::money;
use crate::orders::traits::{ensure_active, CommandContext};
use shared::order::{Order, OrderItem, OrderStatus, SplitItem};
use shared::util::now_millis;

/// Result of a split: the spawned orders plus the rewritten source.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub new_orders: Vec<Order>,
    pub source: Order,
}

/// Split `order` into one child per bucket.
///
/// Each bucket names instance ids and unit counts to move out. Duplicate
/// entries for the same instance within a bucket are merged before
/// validation. If every unit moves out, the source is marked Merged so
/// the table history keeps a record without a payable empty ticket.
pub fn split_order(
    order: &Order,
    buckets: &[Vec<SplitItem>],
    ctx: &CommandContext<'_>,
) -> Result<SplitOutcome, LedgerError> {
    ensure_active(order)?;

    let normalized: Vec<HashMap<String, i32>> = buckets
        .iter()
        .map(|bucket| {
            let mut merged: HashMap<String, i32> = HashMap::new();
            for item in bucket {
                if item.quantity > 0 {
                    *merged.entry(item.instance_id.clone()).or_insert(0) += item.quantity;
                }
            }
            merged
        })
        .collect();

    // Conservation check before anything is cloned. An identity may span
    // several lines (a noted and an un-noted line of the same product
    // hash alike), so availability is summed over all of them.
    let mut requested: HashMap<&str, i32> = HashMap::new();
    for bucket in &normalized {
        for (instance_id, qty) in bucket {
            *requested.entry(instance_id.as_str()).or_insert(0) += qty;
        }
    }
    for (instance_id, total) in &requested {
        if !order.items.iter().any(|line| line.instance_id == *instance_id) {
            return Err(LedgerError::StaleReference(format!(
                "instance {instance_id} not on order"
            )));
        }
        let available: i32 = order
            .items
            .iter()
            .filter(|line| line.instance_id == *instance_id)
            .map(|line| line.quantity)
            .sum();
        if *total > available {
            return Err(LedgerError::InsufficientQuantity {
                instance_id: (*instance_id).to_string(),
                requested: *total,
                available,
            });
        }
    }

    let mut source = order.clone();
    let mut new_orders = Vec::new();

    for (idx, bucket) in normalized.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let mut child = spawn_child(&source, idx + 1);
        for (instance_id, qty) in bucket {
            // Drain lines sharing the identity in order; each drained
            // chunk keeps its own note on the child side.
            let mut remaining = *qty;
            while remaining > 0 {
                let pos = source
                    .items
                    .iter()
                    .position(|line| line.instance_id == *instance_id && line.quantity > 0)
                    .ok_or_else(|| {
                        LedgerError::StaleReference(format!("instance {instance_id} not on order"))
                    })?;
                let line = &mut source.items[pos];
                let take = line.quantity.min(remaining);
                let moved = OrderItem {
                    quantity: take,
                    ..line.clone()
                };
                line.quantity -= take;
                remaining -= take;
                if line.quantity == 0 {
                    source.items.remove(pos);
                }
                child.items.push(moved);
            }
        }
        money::recalculate_total(&mut child);
        debug!(
            child_id = %child.order_id,
            lines = child.items.len(),
            total = child.grand_total,
            "split child created"
        );
        new_orders.push(child);
    }

    money::recalculate_total(&mut source);
    if source.items.is_empty() && !new_orders.is_empty() {
        source.status = OrderStatus::Merged;
    }
    source.version += 1;

    info!(
        order_id = %order.order_id,
        children = new_orders.len(),
        split_by = %ctx.actor.name,
        "order split"
    );
    Ok(SplitOutcome { new_orders, source })
}

/// Fresh pending order carrying the source's attribution.
fn spawn_child(source: &Order, n: usize) -> Order {
    Order {
        order_id: uuid::Uuid::new_v4().to_string(),
        tenant_id: source.tenant_id.clone(),
        customer_name: format!("{} (Split {})", source.customer_name, n),
        table_name: source.table_name.clone(),
        items: Vec::new(),
        status: OrderStatus::Pending,
        created_at: now_millis(),
        grand_total: 0.0,
        amount_paid: 0.0,
        payment_method: None,
        staff_name: source.staff_name.clone(),
        staff_role: source.staff_role,
        completed_by: None,
        cancel_reason: None,
        version: 0,
    }
}
