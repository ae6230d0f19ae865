//! Money calculation utilities using rust_decimal for precision
//!
//! All total recomputation is done using `Decimal` internally, then
//! converted back to `f64` for storage/serialization. Amounts are plain
//! totals in the configured currency's major unit (no cents conversion).

use crate::error::LedgerError;
use rust_decimal::prelude::*;
use shared::order::Order;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per line
const MAX_PRICE: f64 = 100_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), LedgerError> {
    if !value.is_finite() {
        return Err(LedgerError::InvalidOperation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a resolved price/quantity pair before it touches an order
pub fn validate_line(price: f64, quantity: i32) -> Result<(), LedgerError> {
    require_finite(price, "price")?;
    if price < 0.0 {
        return Err(LedgerError::InvalidOperation(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(LedgerError::InvalidOperation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }
    if quantity <= 0 {
        return Err(LedgerError::InvalidOperation(format!(
            "quantity must be positive, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(LedgerError::InvalidOperation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Validate a settlement amount
pub fn validate_amount(amount: f64) -> Result<(), LedgerError> {
    require_finite(amount, "amount")?;
    if amount < 0.0 {
        return Err(LedgerError::InvalidOperation(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    Ok(())
}

/// Recompute `grand_total` as the precise sum of `price * quantity` over
/// all lines. Called atomically with every item mutation; the total is
/// never written independently of the items.
pub fn recalculate_total(order: &mut Order) {
    let total: Decimal = order
        .items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();
    order.grand_total = to_f64(total);
}

/// Half of a full-bottle price tier, rounded to 2 decimal places
pub fn half_of(full_price: f64) -> f64 {
    to_f64(to_decimal(full_price) / Decimal::TWO)
}
