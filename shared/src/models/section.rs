//! Section Allocation Model

use serde::{Deserialize, Serialize};

/// Assigns a floor section exclusively to one staff member for a shift
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionAllocation {
    pub section: String,
    pub staff_id: String,
    pub staff_name: String,
}
