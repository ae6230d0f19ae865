//! Dashboard aggregation and shift reporting
//!
//! Pure reducers over order history. Callers pass the order set and a
//! reference instant; nothing here reads the clock or the store.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shared::models::{ReceiptConfig, RegisterSession};
use shared::order::{Order, OrderStatus, PaymentMethod};
use shared::printing::{PrintJob, PrintTarget, ShiftReportPayload};

/// Preset reporting window, anchored to a reference instant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateRange {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl DateRange {
    /// Half-open window `[start, end)` in unix milliseconds
    pub fn bounds(&self, now: DateTime<Utc>) -> (i64, i64) {
        let today = now.date_naive();
        let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let month_start = first_of_month(today.year(), today.month());
        let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);

        let (start, end) = match self {
            DateRange::Today => (today, today + Duration::days(1)),
            DateRange::Yesterday => (today - Duration::days(1), today),
            DateRange::ThisWeek => (week_start, week_start + Duration::days(7)),
            DateRange::LastWeek => (week_start - Duration::days(7), week_start),
            DateRange::ThisMonth => (
                month_start,
                first_of_next_month(today.year(), today.month()),
            ),
            DateRange::LastMonth => {
                let (y, m) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                (first_of_month(y, m), month_start)
            }
            DateRange::ThisYear => (
                year_start,
                NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap_or(today),
            ),
            DateRange::LastYear => (
                NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap_or(today),
                year_start,
            ),
        };
        (millis_at_midnight(start), millis_at_midnight(end))
    }

    /// Whether `timestamp_ms` falls inside the window
    pub fn contains(&self, timestamp_ms: i64, now: DateTime<Utc>) -> bool {
        let (start, end) = self.bounds(now);
        timestamp_ms >= start && timestamp_ms < end
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn first_of_next_month(year: i32, month: u32) -> NaiveDate {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}

fn millis_at_midnight(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Paid revenue per payment method inside the window
pub fn revenue_by_method(
    orders: &[Order],
    range: DateRange,
    now: DateTime<Utc>,
) -> HashMap<PaymentMethod, f64> {
    let mut totals = HashMap::new();
    for order in orders {
        if order.status != OrderStatus::Paid || !range.contains(order.created_at, now) {
            continue;
        }
        if let Some(method) = order.payment_method {
            *totals.entry(method).or_insert(0.0) += order.amount_paid;
        }
    }
    totals
}

/// Outstanding staff debt grouped by the debited staff member
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StaffDebt {
    pub customer: String,
    pub balance: f64,
    pub orders: i64,
}

/// Staff-debt balances over the full history, largest first
pub fn staff_debts(orders: &[Order]) -> Vec<StaffDebt> {
    let mut by_name: HashMap<&str, (f64, i64)> = HashMap::new();
    for order in orders {
        let is_debt = order
            .payment_method
            .map(|m| m.is_staff_debt())
            .unwrap_or(false);
        if order.status != OrderStatus::Paid || !is_debt {
            continue;
        }
        let entry = by_name.entry(order.customer_name.as_str()).or_insert((0.0, 0));
        entry.0 += order.grand_total;
        entry.1 += 1;
    }
    let mut debts: Vec<StaffDebt> = by_name
        .into_iter()
        .map(|(customer, (balance, orders))| StaffDebt {
            customer: customer.to_string(),
            balance,
            orders,
        })
        .collect();
    debts.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    debts
}

/// Sales attribution per staff member inside the window
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WaiterPerformance {
    pub staff_name: String,
    pub orders: i64,
    pub sales: f64,
    pub average_ticket: f64,
}

/// Per-waiter paid sales, best seller first
pub fn waiter_performance(
    orders: &[Order],
    range: DateRange,
    now: DateTime<Utc>,
) -> Vec<WaiterPerformance> {
    let mut by_staff: HashMap<&str, (f64, i64)> = HashMap::new();
    for order in orders {
        if order.status != OrderStatus::Paid || !range.contains(order.created_at, now) {
            continue;
        }
        let entry = by_staff.entry(order.staff_name.as_str()).or_insert((0.0, 0));
        entry.0 += order.amount_paid;
        entry.1 += 1;
    }
    let mut rows: Vec<WaiterPerformance> = by_staff
        .into_iter()
        .map(|(name, (sales, count))| WaiterPerformance {
            staff_name: name.to_string(),
            orders: count,
            sales,
            average_ticket: if count > 0 { sales / count as f64 } else { 0.0 },
        })
        .collect();
    rows.sort_by(|a, b| b.sales.total_cmp(&a.sales));
    rows
}

/// One day of the order trend
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub orders: i64,
    pub sales: f64,
}

/// Paid order counts and sales for the 7 days ending today
pub fn daily_order_trend(orders: &[Order], now: DateTime<Utc>) -> Vec<DayBucket> {
    let today = now.date_naive();
    (0..7)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let start = millis_at_midnight(date);
            let end = millis_at_midnight(date + Duration::days(1));
            let mut bucket = DayBucket {
                date,
                orders: 0,
                sales: 0.0,
            };
            for order in orders {
                if order.status == OrderStatus::Paid
                    && order.created_at >= start
                    && order.created_at < end
                {
                    bucket.orders += 1;
                    bucket.sales += order.amount_paid;
                }
            }
            bucket
        })
        .collect()
}

/// Assemble the shift report payload for the print boundary.
///
/// Cancelled and merged orders are history, not trade; they are excluded
/// from the order count and every money column.
pub fn build_shift_report(
    orders: &[Order],
    session: &RegisterSession,
    printed_by: &str,
) -> ShiftReportPayload {
    let mut payload = ShiftReportPayload {
        opening_cash: session.opening_cash,
        printed_by: printed_by.to_string(),
        ..Default::default()
    };

    for order in orders {
        match order.status {
            OrderStatus::Cancelled | OrderStatus::Merged => continue,
            OrderStatus::Paid => {
                payload.paid += order.amount_paid;
                payload.total_revenue += order.amount_paid;
                match order.payment_method {
                    Some(PaymentMethod::Cash) => payload.cash += order.amount_paid,
                    Some(PaymentMethod::MobileMoney) => payload.momo += order.amount_paid,
                    Some(PaymentMethod::Card) => payload.card += order.amount_paid,
                    Some(PaymentMethod::Bank) => payload.bank += order.amount_paid,
                    Some(PaymentMethod::SalaryPay) => payload.salary_pay += order.amount_paid,
                    Some(PaymentMethod::StaffCredit) | Some(PaymentMethod::Complementary) => {
                        payload.others += order.amount_paid
                    }
                    None => payload.others += order.amount_paid,
                }
            }
            _ => {
                payload.due += order.amount_due();
                if order.amount_paid > 0.0 && order.amount_paid < order.grand_total {
                    payload.partial += order.amount_paid;
                }
            }
        }
        payload.total_orders += 1;
    }
    payload
}

/// Wrap a shift report payload as a print job
pub fn shift_report_job(
    payload: &ShiftReportPayload,
    config: ReceiptConfig,
    operator: &str,
) -> PrintJob {
    PrintJob {
        target: PrintTarget::ShiftReport,
        config,
        operator: operator.to_string(),
        payload: serde_json::to_value(payload).unwrap_or(serde_json::Value::Null),
    }
}
