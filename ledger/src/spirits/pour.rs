//! Pour execution
//!
//! `pour` deducts from one bottle and appends the consumption log entry.
//! `pour_and_add` couples the deduction with the matching cart line as one
//! business transaction: validation first, then deduct, then add. The
//! sequence is fixed; reordering it can strand a deduction without a sale
//! or a sale without a deduction.

use tracing::{info, warn};

use crate::error::LedgerError;
use crate::money;
use crate::orders::actions::AddItemAction;
use crate::orders::traits::{ensure_active, CommandContext, OrderMutation};
use crate::spirits::measure::{annotate_name, measure_price, resolve_volume, tot_count, Measure};
use shared::models::{BottleStatus, Product, SpiritBottle, SpiritLog, EMPTY_THRESHOLD_ML};
use shared::order::Order;
use shared::util::{now_millis, snowflake_id};

/// Result of a pour: the full rewritten bottle set plus what was deducted.
#[derive(Debug, Clone)]
pub struct PourOutcome {
    pub bottles: Vec<SpiritBottle>,
    pub volume_ml: f64,
    pub tots: i32,
    pub log_id: i64,
}

/// A pour coupled with its cart line.
#[derive(Debug, Clone)]
pub struct PourSale {
    pub order: Order,
    pub bottles: Vec<SpiritBottle>,
    pub volume_ml: f64,
    pub tots: i32,
}

/// Deduct one measure from the named bottle and log the consumption.
///
/// Fails without touching any bottle when the target is missing, not
/// open, or holds less than the resolved volume.
pub fn pour(
    bottles: &[SpiritBottle],
    bottle_id: &str,
    measure: Measure,
    pour_type: shared::models::PourType,
    staff_name: &str,
) -> Result<PourOutcome, LedgerError> {
    let idx = bottles
        .iter()
        .position(|b| b.id == bottle_id)
        .ok_or_else(|| LedgerError::StaleReference(format!("bottle {bottle_id} not found")))?;
    let bottle = &bottles[idx];

    if !bottle.is_open() {
        return Err(LedgerError::InvalidOperation(format!(
            "bottle {} is {:?}, not open",
            bottle.name, bottle.status
        )));
    }

    let volume_ml = resolve_volume(measure, bottle)?;
    if bottle.current_volume < volume_ml {
        warn!(
            bottle_id,
            requested_ml = volume_ml,
            available_ml = bottle.current_volume,
            "pour refused, insufficient volume"
        );
        return Err(LedgerError::InsufficientVolume {
            requested_ml: volume_ml,
            available_ml: bottle.current_volume,
        });
    }

    let tots = tot_count(measure, bottle);
    let log_id = snowflake_id();

    let mut next = bottles.to_vec();
    let target = &mut next[idx];
    target.current_volume = (target.current_volume - volume_ml).max(0.0);
    target.status = if target.current_volume < EMPTY_THRESHOLD_ML {
        BottleStatus::Empty
    } else {
        BottleStatus::Open
    };
    target.logs.push(SpiritLog {
        id: log_id,
        timestamp: now_millis(),
        volume_ml,
        tots,
        pour_type,
        staff_name: staff_name.to_string(),
    });

    info!(
        bottle_id,
        volume_ml,
        tots,
        remaining_ml = target.current_volume,
        status = ?target.status,
        poured_by = staff_name,
        "measure poured"
    );
    Ok(PourOutcome {
        bottles: next,
        volume_ml,
        tots,
        log_id,
    })
}

/// Pour a measure and add the matching line to the order, atomically.
///
/// All validation runs up front against the untouched order and bottles;
/// only then does the deduction happen, and only then the cart add. A
/// failure at any step leaves both sides exactly as they were.
pub fn pour_and_add(
    order: &Order,
    product: &Product,
    bottles: &[SpiritBottle],
    bottle_id: &str,
    measure: Measure,
    pour_type: shared::models::PourType,
    ctx: &CommandContext<'_>,
) -> Result<PourSale, LedgerError> {
    ensure_active(order)?;
    let prices = product.spirit_prices.as_ref().ok_or_else(|| {
        LedgerError::InvalidOperation(format!("product {} has no measure prices", product.name))
    })?;
    let price = measure_price(measure, prices);
    money::validate_line(price, 1)?;

    let poured = pour(bottles, bottle_id, measure, pour_type, &ctx.actor.name)?;

    let action = AddItemAction {
        product_id: product.id.clone(),
        resolved_name: annotate_name(&product.name, measure),
        resolved_price: price,
    };
    let order = action.apply(order, ctx)?;

    Ok(PourSale {
        order,
        bottles: poured.bottles,
        volume_ml: poured.volume_ml,
        tots: poured.tots,
    })
}

/// Open bottles whose display name matches the product being sold.
pub fn open_bottles_for<'a>(
    bottles: &'a [SpiritBottle],
    product_name: &str,
) -> Vec<&'a SpiritBottle> {
    bottles
        .iter()
        .filter(|b| b.is_open() && b.name == product_name)
        .collect()
}
