//! Measure resolution
//!
//! Pure functions from a named measure and a bottle to volume, tot count
//! and price. Wine and champagne pour by the 150ml glass and never offer
//! a double; everything else follows the bottle's measure standard.

use crate::error::LedgerError;
use crate::money;
use serde::{Deserialize, Serialize};
use shared::models::{SpiritBottle, SpiritPrices};

/// Glass pour for wine/champagne (ml)
pub const GLASS_ML: f64 = 150.0;

/// Tot count attributed to a half bottle in shift reports
const HALF_BOTTLE_TOTS: i32 = 10;

/// A named pour size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Measure {
    SingleTot,
    DoubleTot,
    Glass,
    HalfBottle,
    FullBottle,
}

impl Measure {
    /// Display label used for receipts and line-name annotation
    pub fn label(&self) -> &'static str {
        match self {
            Measure::SingleTot => "Single Tot",
            Measure::DoubleTot => "Double Tot",
            Measure::Glass => "Glass",
            Measure::HalfBottle => "Half Bottle",
            Measure::FullBottle => "Full Bottle",
        }
    }
}

/// Resolve a measure to the volume (ml) it deducts from `bottle`.
///
/// Depends only on the measure, the bottle's category and its configured
/// standard. Wine/champagne reject the double outright.
pub fn resolve_volume(measure: Measure, bottle: &SpiritBottle) -> Result<f64, LedgerError> {
    if bottle.category.pours_by_glass() {
        return match measure {
            Measure::SingleTot | Measure::Glass => Ok(GLASS_ML),
            Measure::DoubleTot => Err(LedgerError::InvalidOperation(format!(
                "{:?} is not poured by the double",
                bottle.category
            ))),
            Measure::HalfBottle => Ok((bottle.total_volume / 2.0).floor()),
            Measure::FullBottle => Ok(bottle.current_volume),
        };
    }
    Ok(match measure {
        Measure::SingleTot | Measure::Glass => bottle.measure_standard.tot_ml(),
        Measure::DoubleTot => bottle.measure_standard.double_ml(),
        Measure::HalfBottle => (bottle.total_volume / 2.0).floor(),
        Measure::FullBottle => bottle.current_volume,
    })
}

/// Normalized count of standard pours for shift reconciliation.
/// Reporting only; deduction math never reads this.
pub fn tot_count(measure: Measure, bottle: &SpiritBottle) -> i32 {
    match measure {
        Measure::SingleTot | Measure::Glass => 1,
        Measure::DoubleTot => 2,
        Measure::HalfBottle => HALF_BOTTLE_TOTS,
        Measure::FullBottle => {
            (bottle.total_volume / bottle.measure_standard.tot_ml()).floor() as i32
        }
    }
}

/// Price for the measure from the product's tier table.
/// Half bottle sells at half the full tier, rounded to currency precision.
pub fn measure_price(measure: Measure, prices: &SpiritPrices) -> f64 {
    match measure {
        Measure::SingleTot | Measure::Glass => prices.single,
        Measure::DoubleTot => prices.double,
        Measure::HalfBottle => money::half_of(prices.full),
        Measure::FullBottle => prices.full,
    }
}

/// Line name carrying the measure, e.g. "Jameson (Double Tot)"
pub fn annotate_name(product_name: &str, measure: Measure) -> String {
    format!("{} ({})", product_name, measure.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BottleCategory, BottleStatus, MeasureStandard};

    fn bottle(category: BottleCategory, standard: MeasureStandard) -> SpiritBottle {
        SpiritBottle {
            id: "btl-1".to_string(),
            name: "Test".to_string(),
            category,
            status: BottleStatus::Open,
            total_volume: 750.0,
            current_volume: 700.0,
            measure_standard: standard,
            logs: Vec::new(),
        }
    }

    #[test]
    fn spirit_tots_follow_the_bottle_standard() {
        let classic = bottle(BottleCategory::Whisky, MeasureStandard::Classic25Ml);
        let metric = bottle(BottleCategory::Whisky, MeasureStandard::Metric30Ml);

        assert_eq!(resolve_volume(Measure::SingleTot, &classic).unwrap(), 25.0);
        assert_eq!(resolve_volume(Measure::DoubleTot, &classic).unwrap(), 50.0);
        assert_eq!(resolve_volume(Measure::SingleTot, &metric).unwrap(), 30.0);
        assert_eq!(resolve_volume(Measure::DoubleTot, &metric).unwrap(), 60.0);
    }

    #[test]
    fn wine_pours_by_the_glass_and_rejects_the_double() {
        let wine = bottle(BottleCategory::Wine, MeasureStandard::Classic25Ml);
        assert_eq!(resolve_volume(Measure::Glass, &wine).unwrap(), 150.0);
        assert_eq!(resolve_volume(Measure::SingleTot, &wine).unwrap(), 150.0);
        assert!(matches!(
            resolve_volume(Measure::DoubleTot, &wine),
            Err(LedgerError::InvalidOperation(_))
        ));
    }

    #[test]
    fn half_bottle_floors_half_the_total() {
        let mut whisky = bottle(BottleCategory::Whisky, MeasureStandard::Classic25Ml);
        whisky.total_volume = 745.0;
        assert_eq!(resolve_volume(Measure::HalfBottle, &whisky).unwrap(), 372.0);
        let champagne = bottle(BottleCategory::Champagne, MeasureStandard::Classic25Ml);
        assert_eq!(
            resolve_volume(Measure::HalfBottle, &champagne).unwrap(),
            375.0
        );
    }

    #[test]
    fn full_bottle_takes_whatever_remains() {
        let whisky = bottle(BottleCategory::Whisky, MeasureStandard::Classic25Ml);
        assert_eq!(
            resolve_volume(Measure::FullBottle, &whisky).unwrap(),
            700.0
        );
    }

    #[test]
    fn tot_counts_for_reporting() {
        let classic = bottle(BottleCategory::Whisky, MeasureStandard::Classic25Ml);
        let metric = bottle(BottleCategory::Whisky, MeasureStandard::Metric30Ml);

        assert_eq!(tot_count(Measure::SingleTot, &classic), 1);
        assert_eq!(tot_count(Measure::DoubleTot, &classic), 2);
        assert_eq!(tot_count(Measure::HalfBottle, &classic), 10);
        // 750 / 25 = 30 tots, 750 / 30 = 25 tots
        assert_eq!(tot_count(Measure::FullBottle, &classic), 30);
        assert_eq!(tot_count(Measure::FullBottle, &metric), 25);
    }

    #[test]
    fn prices_come_from_the_tier_table() {
        let prices = SpiritPrices {
            single: 6_000.0,
            double: 11_000.0,
            full: 185_000.0,
        };
        assert_eq!(measure_price(Measure::SingleTot, &prices), 6_000.0);
        assert_eq!(measure_price(Measure::Glass, &prices), 6_000.0);
        assert_eq!(measure_price(Measure::DoubleTot, &prices), 11_000.0);
        assert_eq!(measure_price(Measure::FullBottle, &prices), 185_000.0);
        assert_eq!(measure_price(Measure::HalfBottle, &prices), 92_500.0);
    }

    #[test]
    fn annotated_line_names() {
        assert_eq!(
            annotate_name("Jameson", Measure::DoubleTot),
            "Jameson (Double Tot)"
        );
        assert_eq!(annotate_name("Merlot", Measure::Glass), "Merlot (Glass)");
    }

    #[test]
    fn measure_wire_names() {
        assert_eq!(
            serde_json::to_string(&Measure::SingleTot).unwrap(),
            "\"SINGLE_TOT\""
        );
        let m: Measure = serde_json::from_str("\"HALF_BOTTLE\"").unwrap();
        assert_eq!(m, Measure::HalfBottle);
    }
}
