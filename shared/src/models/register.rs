//! Register Session Model

use serde::{Deserialize, Serialize};

/// Register status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegisterStatus {
    #[default]
    Open,
    Closed,
}

/// An operator's register/shift session.
///
/// Payment settlement is refused while no session is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSession {
    pub id: String,
    pub operator_id: String,
    pub operator_name: String,
    pub status: RegisterStatus,
    /// Unix milliseconds
    pub opened_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
    /// Cash float counted in at open
    pub opening_cash: f64,
}

impl RegisterSession {
    /// Open a new session for an operator
    pub fn open(operator_id: impl Into<String>, operator_name: impl Into<String>, opening_cash: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            operator_id: operator_id.into(),
            operator_name: operator_name.into(),
            status: RegisterStatus::Open,
            opened_at: crate::util::now_millis(),
            closed_at: None,
            opening_cash,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == RegisterStatus::Open
    }
}
