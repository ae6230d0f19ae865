//! End-to-end scenarios across several commands

use crate::error::LedgerError;
use crate::orders::actions::{
    merge_orders, split_order, AddItemAction, OrderCommand, SetItemQuantityAction,
    SettlePaymentAction, VoidItemAction,
};
use crate::orders::traits::{CommandContext, OrderMutation};
use shared::models::{Actor, RegisterSession, StaffRole};
use shared::order::{Order, OrderStatus, PaymentMethod, SplitItem};

fn manager() -> Actor {
    Actor::new("staff-1", "Mia", StaffRole::Manager)
}

fn add(order: &Order, product_id: &str, name: &str, price: f64, ctx: &CommandContext<'_>) -> Order {
    AddItemAction {
        product_id: product_id.to_string(),
        resolved_name: name.to_string(),
        resolved_price: price,
    }
    .apply(order, ctx)
    .unwrap()
}

#[test]
fn table_ticket_round_trip() {
    let actor = manager();
    let ctx = CommandContext::new(&actor);
    let order = Order::new("tenant-1", "Table 5", Some("Table 5".to_string()), &actor);

    // Two beers collapse onto one line
    let order = add(&order, "p-beer", "Beer", 5_000.0, &ctx);
    let order = add(&order, "p-beer", "Beer", 5_000.0, &ctx);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.grand_total, 10_000.0);

    // Void the line with a reason; the order empties out
    let order = VoidItemAction {
        line_index: 0,
        reason: "wrong order".to_string(),
    }
    .apply(&order, &ctx)
    .unwrap();
    assert!(order.items.is_empty());
    assert_eq!(order.grand_total, 0.0);
    assert!(order.is_active());
}

#[test]
fn total_tracks_every_item_mutation() {
    let actor = manager();
    let ctx = CommandContext::new(&actor);
    let order = Order::new("tenant-1", "Table 9", Some("Table 9".to_string()), &actor);

    let order = add(&order, "p-beer", "Beer", 5_000.0, &ctx);
    let order = add(&order, "p-wine", "Wine Glass", 12_000.0, &ctx);
    assert_eq!(order.grand_total, 17_000.0);

    let order = SetItemQuantityAction {
        line_index: 0,
        new_quantity: 4,
    }
    .apply(&order, &ctx)
    .unwrap();
    assert_eq!(order.grand_total, 32_000.0);

    let order = VoidItemAction {
        line_index: 1,
        reason: "sent back".to_string(),
    }
    .apply(&order, &ctx)
    .unwrap();
    assert_eq!(order.grand_total, 20_000.0);

    let manual: f64 = order
        .items
        .iter()
        .map(|line| line.price * line.quantity as f64)
        .sum();
    assert_eq!(order.grand_total, manual);
}

#[test]
fn split_then_settle_each_child() {
    let actor = manager();
    let register = RegisterSession::open("op-1", "Mia", 0.0);
    let ctx = CommandContext::new(&actor).with_register(&register);

    let order = Order::new("tenant-1", "Table 3", Some("Table 3".to_string()), &actor);
    let order = add(&order, "p-beer", "Beer", 5_000.0, &ctx);
    let order = add(&order, "p-beer", "Beer", 5_000.0, &ctx);
    let beer = order.items[0].instance_id.clone();

    let buckets = vec![
        vec![SplitItem {
            instance_id: beer.clone(),
            quantity: 1,
        }],
        vec![SplitItem {
            instance_id: beer,
            quantity: 1,
        }],
    ];
    let outcome = split_order(&order, &buckets, &ctx).unwrap();

    // Full move: source closes, combined totals conserved
    assert_eq!(outcome.source.status, OrderStatus::Merged);
    let combined: f64 = outcome.new_orders.iter().map(|o| o.grand_total).sum();
    assert_eq!(combined, order.grand_total);

    for child in &outcome.new_orders {
        let paid = SettlePaymentAction {
            method: PaymentMethod::Cash,
            amount: child.grand_total,
            completed_by: "Mia".to_string(),
            staff_debited: None,
        }
        .apply(child, &ctx)
        .unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);
        assert_eq!(paid.amount_due(), 0.0);
    }
}

#[test]
fn merged_source_rejects_further_mutation() {
    let actor = Actor::new("staff-2", "Carol", StaffRole::Cashier);
    let ctx = CommandContext::new(&actor);
    let a = {
        let o = Order::new("tenant-1", "Table 1", Some("Table 1".to_string()), &actor);
        add(&o, "p-beer", "Beer", 5_000.0, &ctx)
    };
    let b = {
        let o = Order::new("tenant-1", "Table 2", Some("Table 2".to_string()), &actor);
        add(&o, "p-wine", "Wine", 12_000.0, &ctx)
    };
    let all = vec![a.clone(), b.clone()];

    let outcome = merge_orders(&a.order_id, &[b.order_id.clone()], &all, &ctx).unwrap();
    assert_eq!(outcome.target.grand_total, 17_000.0);

    let stale = &outcome.sources[0];
    let result = AddItemAction {
        product_id: "p-beer".to_string(),
        resolved_name: "Beer".to_string(),
        resolved_price: 5_000.0,
    }
    .apply(stale, &ctx);
    assert!(matches!(result, Err(LedgerError::OrderAlreadyMerged(_))));
}

#[test]
fn commands_dispatch_through_the_enum() {
    let actor = manager();
    let ctx = CommandContext::new(&actor);
    let order = Order::new("tenant-1", "Table 7", Some("Table 7".to_string()), &actor);

    let queue: Vec<OrderCommand> = vec![
        AddItemAction {
            product_id: "p-beer".to_string(),
            resolved_name: "Beer".to_string(),
            resolved_price: 5_000.0,
        }
        .into(),
        AddItemAction {
            product_id: "p-beer".to_string(),
            resolved_name: "Beer".to_string(),
            resolved_price: 5_000.0,
        }
        .into(),
        SetItemQuantityAction {
            line_index: 0,
            new_quantity: 5,
        }
        .into(),
    ];

    let mut current = order;
    for command in &queue {
        current = command.apply(&current, &ctx).unwrap();
    }
    assert_eq!(current.items[0].quantity, 5);
    assert_eq!(current.grand_total, 25_000.0);
    assert_eq!(current.version, 3);
}

#[test]
fn version_advances_monotonically() {
    let actor = manager();
    let ctx = CommandContext::new(&actor);
    let order = Order::new("tenant-1", "Walk-in", None, &actor);
    assert_eq!(order.version, 0);

    let order = add(&order, "p-beer", "Beer", 5_000.0, &ctx);
    assert_eq!(order.version, 1);
    let order = SetItemQuantityAction {
        line_index: 0,
        new_quantity: 3,
    }
    .apply(&order, &ctx)
    .unwrap();
    assert_eq!(order.version, 2);
    let order = VoidItemAction {
        line_index: 0,
        reason: "spilled".to_string(),
    }
    .apply(&order, &ctx)
    .unwrap();
    assert_eq!(order.version, 3);
}
