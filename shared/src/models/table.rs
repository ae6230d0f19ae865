//! Table Model

use serde::{Deserialize, Serialize};

/// Floor table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub name: String,
    /// Named grouping of tables claimable by one staff member per shift
    pub section: String,
    pub capacity: i32,
}
