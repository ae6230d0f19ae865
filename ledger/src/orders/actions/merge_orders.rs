//! Merge several orders into one target
//!
//! Source items are appended to the target as-is; identical lines are not
//! re-merged, so the target keeps a visible record of where each line came
//! from. Sources are marked Merged and stay in history.

use tracing::{info, warn};

use crate::auth;
use crate::error::LedgerError;
use crate::money;
use crate::orders::traits::{ensure_active, CommandContext};
use shared::models::Capability;
use shared::order::{Order, OrderStatus};

/// Result of a merge: the enlarged target plus the drained sources.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub target: Order,
    pub sources: Vec<Order>,
}

/// Merge the orders named by `source_ids` into the target.
///
/// The target keeps its own status, table and payment fields. With no
/// usable sources the call is a no-op returning the target untouched.
pub fn merge_orders(
    target_id: &str,
    source_ids: &[String],
    orders: &[Order],
    ctx: &CommandContext<'_>,
) -> Result<MergeOutcome, LedgerError> {
    auth::require(ctx.actor, Capability::MergeOrders)?;

    let target = orders
        .iter()
        .find(|o| o.order_id == target_id)
        .ok_or_else(|| LedgerError::StaleReference(format!("order {target_id} not found")))?;
    ensure_active(target)?;

    let mut seen: Vec<&str> = Vec::new();
    for id in source_ids {
        if id != target_id && !seen.contains(&id.as_str()) {
            seen.push(id);
        }
    }
    if seen.is_empty() {
        warn!(target_id, "merge with no distinct sources, nothing to do");
        return Ok(MergeOutcome {
            target: target.clone(),
            sources: Vec::new(),
        });
    }

    let mut source_orders = Vec::with_capacity(seen.len());
    for id in &seen {
        let source = orders
            .iter()
            .find(|o| o.order_id == *id)
            .ok_or_else(|| LedgerError::StaleReference(format!("order {id} not found")))?;
        ensure_active(source)?;
        source_orders.push(source);
    }

    let mut merged_target = target.clone();
    let mut drained = Vec::with_capacity(source_orders.len());
    for source in source_orders {
        merged_target.items.extend(source.items.iter().cloned());
        let mut done = source.clone();
        done.status = OrderStatus::Merged;
        done.version += 1;
        drained.push(done);
    }
    money::recalculate_total(&mut merged_target);
    merged_target.version += 1;

    info!(
        target_id,
        sources = drained.len(),
        total = merged_target.grand_total,
        merged_by = %ctx.actor.name,
        "orders merged"
    );
    Ok(MergeOutcome {
        target: merged_target,
        sources: drained,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::AddItemAction;
    use crate::orders::traits::OrderMutation;
    use shared::models::{Actor, StaffRole};

    fn cashier() -> Actor {
        Actor::new("staff-2", "Carol", StaffRole::Cashier)
    }

    fn order_with(name: &str, price: f64, qty: i32, actor: &Actor) -> Order {
        let ctx = CommandContext::new(actor);
        let mut order = Order::new("tenant-1", name, Some(name.to_string()), actor);
        for _ in 0..qty {
            order = AddItemAction {
                product_id: format!("p-{name}"),
                resolved_name: name.to_string(),
                resolved_price: price,
            }
            .apply(&order, &ctx)
            .unwrap();
        }
        order
    }

    #[test]
    fn merge_appends_items_and_closes_sources() {
        let actor = cashier();
        let ctx = CommandContext::new(&actor);
        let a = order_with("Table 1", 5_000.0, 2, &actor);
        let b = order_with("Table 2", 8_000.0, 1, &actor);
        let all = vec![a.clone(), b.clone()];

        let outcome =
            merge_orders(&a.order_id, &[b.order_id.clone()], &all, &ctx).unwrap();

        assert_eq!(outcome.target.items.len(), 2);
        assert_eq!(outcome.target.grand_total, 18_000.0);
        assert_eq!(outcome.target.status, OrderStatus::Pending);
        assert_eq!(outcome.target.table_name.as_deref(), Some("Table 1"));
        assert_eq!(outcome.sources.len(), 1);
        assert_eq!(outcome.sources[0].status, OrderStatus::Merged);
        assert_eq!(outcome.sources[0].version, b.version + 1);
    }

    #[test]
    fn identical_lines_are_not_re_merged() {
        let actor = cashier();
        let ctx = CommandContext::new(&actor);
        let a = order_with("Beer", 5_000.0, 1, &actor);
        let b = order_with("Beer", 5_000.0, 1, &actor);
        let all = vec![a.clone(), b.clone()];

        let outcome =
            merge_orders(&a.order_id, &[b.order_id.clone()], &all, &ctx).unwrap();
        assert_eq!(outcome.target.items.len(), 2);
        assert_eq!(outcome.target.grand_total, 10_000.0);
    }

    #[test]
    fn no_distinct_sources_is_a_noop() {
        let actor = cashier();
        let ctx = CommandContext::new(&actor);
        let a = order_with("Table 1", 5_000.0, 1, &actor);
        let all = vec![a.clone()];

        let outcome = merge_orders(&a.order_id, &[a.order_id.clone()], &all, &ctx).unwrap();
        assert_eq!(outcome.target.version, a.version);
        assert_eq!(outcome.target.items.len(), 1);
        assert!(outcome.sources.is_empty());
    }

    #[test]
    fn paid_source_blocks_merge() {
        let actor = cashier();
        let ctx = CommandContext::new(&actor);
        let a = order_with("Table 1", 5_000.0, 1, &actor);
        let mut b = order_with("Table 2", 8_000.0, 1, &actor);
        b.status = OrderStatus::Paid;
        let all = vec![a.clone(), b.clone()];

        let result = merge_orders(&a.order_id, &[b.order_id.clone()], &all, &ctx);
        assert!(matches!(result, Err(LedgerError::OrderAlreadyPaid(_))));
    }

    #[test]
    fn waiter_cannot_merge() {
        let waiter = Actor::new("staff-5", "Walt", StaffRole::Waiter);
        let ctx = CommandContext::new(&waiter);
        let a = order_with("Table 1", 5_000.0, 1, &waiter);
        let b = order_with("Table 2", 8_000.0, 1, &waiter);
        let all = vec![a.clone(), b.clone()];

        let result = merge_orders(&a.order_id, &[b.order_id.clone()], &all, &ctx);
        assert!(matches!(result, Err(LedgerError::AccessDenied(_))));
    }

    #[test]
    fn missing_target_is_stale() {
        let actor = cashier();
        let ctx = CommandContext::new(&actor);
        let a = order_with("Table 1", 5_000.0, 1, &actor);
        let all = vec![a.clone()];

        let result = merge_orders("ghost", &[a.order_id.clone()], &all, &ctx);
        assert!(matches!(result, Err(LedgerError::StaleReference(_))));
    }
}
