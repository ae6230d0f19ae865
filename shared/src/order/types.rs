//! Shared types for order mutations

use serde::{Deserialize, Serialize};

/// Payment method recorded at settlement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    MobileMoney,
    Card,
    Bank,
    /// Debited against a staff member's salary
    SalaryPay,
    /// Outstanding staff credit, settled later
    StaffCredit,
    Complementary,
}

impl PaymentMethod {
    /// Wire/report name
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::MobileMoney => "MOBILE_MONEY",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Bank => "BANK",
            PaymentMethod::SalaryPay => "SALARY_PAY",
            PaymentMethod::StaffCredit => "STAFF_CREDIT",
            PaymentMethod::Complementary => "COMPLEMENTARY",
        }
    }

    /// Methods that leave a balance owed by a staff member
    pub fn is_staff_debt(&self) -> bool {
        matches!(self, PaymentMethod::SalaryPay | PaymentMethod::StaffCredit)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line in an order.
///
/// The line total is always derived (`price * quantity`) and never stored.
/// A line with quantity 0 must be removed, never retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Product this line was resolved from
    pub product_id: String,
    /// Content-addressed line identity (product + resolved name + price)
    pub instance_id: String,
    /// Resolved display name; may encode a measure variant,
    /// e.g. "Jameson (Double Tot)"
    pub name: String,
    /// Resolved unit price
    pub price: f64,
    /// Integer >= 1 on any retained line
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Transient highlight marker for unsent additions
    #[serde(default, skip_serializing)]
    pub is_new: bool,
}

impl OrderItem {
    /// Derived line total
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// One bucket entry for a split: how many units of an identity move out
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SplitItem {
    pub instance_id: String,
    pub quantity: i32,
}
