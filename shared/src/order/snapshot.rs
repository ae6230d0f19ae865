//! Order snapshot - the authoritative tab/ticket state
//!
//! Every ledger mutation returns a new `Order` value with `grand_total`
//! recomputed and `version` bumped; the snapshot is never mutated in place
//! across the boundary. The version stamp lets the persistence boundary
//! apply last-writer-wins when multiple terminals race on the same tab.

use super::types::{OrderItem, PaymentMethod};
use crate::models::staff::{Actor, StaffRole};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Served,
    Completed,
    Paid,
    Cancelled,
    Merged,
}

impl OrderStatus {
    /// Terminal states accept no further item or payment mutation
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid | OrderStatus::Cancelled | OrderStatus::Merged
        )
    }
}

/// A tab/ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Assigned at creation, unique
    pub order_id: String,
    pub tenant_id: String,
    /// Customer or table label shown on the ticket
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Unix milliseconds
    pub created_at: i64,
    /// Derived: sum of price * quantity over items.
    /// Recomputed atomically with every item mutation; never set independently.
    pub grand_total: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    pub staff_name: String,
    pub staff_role: StaffRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    /// Bumped by every mutation; last-writer-wins key at the store boundary
    #[serde(default)]
    pub version: u64,
}

impl Order {
    /// Create a new empty pending order
    pub fn new(
        tenant_id: impl Into<String>,
        customer_name: impl Into<String>,
        table_name: Option<String>,
        staff: &Actor,
    ) -> Self {
        Self {
            order_id: uuid::Uuid::new_v4().to_string(),
            tenant_id: tenant_id.into(),
            customer_name: customer_name.into(),
            table_name,
            items: Vec::new(),
            status: OrderStatus::Pending,
            created_at: crate::util::now_millis(),
            grand_total: 0.0,
            amount_paid: 0.0,
            payment_method: None,
            staff_name: staff.name.clone(),
            staff_role: staff.role,
            completed_by: None,
            cancel_reason: None,
            version: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Active means still accepting item mutations
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Unsettled balance
    pub fn amount_due(&self) -> f64 {
        (self.grand_total - self.amount_paid).max(0.0)
    }
}
