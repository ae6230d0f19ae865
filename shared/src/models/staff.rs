//! Staff & Role Model
//!
//! Authorization is a typed capability set evaluated inside ledger
//! operations, not a UI concern: a hidden button is not a security
//! boundary.

use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Admin,
    Manager,
    Cashier,
    Waiter,
    Bartender,
}

/// Elevated actions a role may perform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    /// Remove a line with a recorded reason
    VoidItem,
    /// Directly decrease a line quantity (bypassing the void workflow)
    ReduceQuantity,
    SettlePayment,
    ClaimSection,
    CancelOrder,
    MergeOrders,
}

impl StaffRole {
    /// Capabilities granted to this role
    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match self {
            StaffRole::Admin | StaffRole::Manager => &[
                VoidItem,
                ReduceQuantity,
                SettlePayment,
                ClaimSection,
                CancelOrder,
                MergeOrders,
            ],
            StaffRole::Cashier => &[SettlePayment, MergeOrders],
            StaffRole::Waiter | StaffRole::Bartender => &[ClaimSection],
        }
    }

    pub fn can(&self, cap: Capability) -> bool {
        self.capabilities().contains(&cap)
    }
}

/// The acting staff member attached to every ledger command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub staff_id: String,
    pub name: String,
    pub role: StaffRole,
}

impl Actor {
    pub fn new(staff_id: impl Into<String>, name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            staff_id: staff_id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn can(&self, cap: Capability) -> bool {
        self.role.can(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_holds_all_capabilities() {
        for cap in [
            Capability::VoidItem,
            Capability::ReduceQuantity,
            Capability::SettlePayment,
            Capability::ClaimSection,
            Capability::CancelOrder,
            Capability::MergeOrders,
        ] {
            assert!(StaffRole::Manager.can(cap));
        }
    }

    #[test]
    fn waiter_cannot_void_or_settle() {
        assert!(!StaffRole::Waiter.can(Capability::VoidItem));
        assert!(!StaffRole::Waiter.can(Capability::SettlePayment));
        assert!(!StaffRole::Waiter.can(Capability::ReduceQuantity));
        assert!(StaffRole::Waiter.can(Capability::ClaimSection));
    }

    #[test]
    fn cashier_settles_but_does_not_void() {
        assert!(StaffRole::Cashier.can(Capability::SettlePayment));
        assert!(!StaffRole::Cashier.can(Capability::VoidItem));
    }
}
