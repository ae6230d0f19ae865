//! Print boundary types
//!
//! The ledger only assembles a payload, the receipt configuration and an
//! operator attribution; rendering and the print pipeline live in the
//! host application.

use crate::models::receipt_config::ReceiptConfig;
use serde::{Deserialize, Serialize};

/// Target document type understood by the print collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrintTarget {
    Receipt,
    Kitchen,
    Bar,
    KitchenUpdate,
    BarUpdate,
    Void,
    ShiftReport,
    Test,
}

/// Shift report payload consumed by the print boundary.
///
/// All currency fields are plain totals in the configured currency's major
/// unit; field names are the fixed camelCase wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShiftReportPayload {
    pub cash: f64,
    pub momo: f64,
    pub card: f64,
    pub bank: f64,
    pub salary_pay: f64,
    pub others: f64,
    /// Outstanding balances (unpaid staff credit etc.)
    pub due: f64,
    pub paid: f64,
    pub partial: f64,
    pub total_revenue: f64,
    pub total_orders: i64,
    pub opening_cash: f64,
    pub printed_by: String,
}

/// A fully assembled print job handed to the print collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    pub target: PrintTarget,
    pub config: ReceiptConfig,
    /// Operator attribution printed on the document
    pub operator: String,
    /// Order or report payload; shape depends on the target
    pub payload: serde_json::Value,
}
