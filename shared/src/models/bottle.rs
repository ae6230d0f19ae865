//! Spirit Bottle Model

use serde::{Deserialize, Serialize};

/// Remaining volume below which a bottle is considered empty (ml)
pub const EMPTY_THRESHOLD_ML: f64 = 20.0;

/// Bottle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BottleStatus {
    /// Unopened, not yet pourable
    #[default]
    Sealed,
    Open,
    Empty,
}

/// Measurement standard configured per bottle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MeasureStandard {
    /// 25ml tot / 50ml double
    #[default]
    #[serde(rename = "CLASSIC_25ML")]
    Classic25Ml,
    /// 30ml tot / 60ml double
    #[serde(rename = "METRIC_30ML")]
    Metric30Ml,
}

impl MeasureStandard {
    /// Standard single tot in ml
    pub fn tot_ml(&self) -> f64 {
        match self {
            MeasureStandard::Classic25Ml => 25.0,
            MeasureStandard::Metric30Ml => 30.0,
        }
    }

    /// Standard double tot in ml
    pub fn double_ml(&self) -> f64 {
        self.tot_ml() * 2.0
    }
}

/// Bottle category/type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BottleCategory {
    Wine,
    Champagne,
    Whisky,
    Gin,
    Vodka,
    Rum,
    Brandy,
    Tequila,
    Liqueur,
    Other,
}

impl BottleCategory {
    /// Wine and champagne pour by the 150ml glass and never offer a double
    pub fn pours_by_glass(&self) -> bool {
        matches!(self, BottleCategory::Wine | BottleCategory::Champagne)
    }
}

/// Pour type recorded on a consumption log entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PourType {
    /// Straight serve
    Direct,
    /// Poured as a cocktail component
    Cocktail,
    /// Wine/champagne by the glass
    Glass,
}

/// One consumption event - append-only, never mutated or removed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpiritLog {
    /// Snowflake ID, time-ordered
    pub id: i64,
    /// Unix milliseconds
    pub timestamp: i64,
    /// Volume deducted (ml)
    pub volume_ml: f64,
    /// Normalized count of standard pours, for shift reconciliation
    pub tots: i32,
    pub pour_type: PourType,
    pub staff_name: String,
}

/// A physical open or sealed container of a spirit/wine product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiritBottle {
    pub id: String,
    /// Display name, matched against the product being sold
    pub name: String,
    pub category: BottleCategory,
    pub status: BottleStatus,
    /// Volume at open (ml)
    pub total_volume: f64,
    /// Remaining volume (ml), monotonically non-increasing except on restock
    pub current_volume: f64,
    pub measure_standard: MeasureStandard,
    /// Append-only consumption log
    #[serde(default)]
    pub logs: Vec<SpiritLog>,
}

impl SpiritBottle {
    pub fn is_open(&self) -> bool {
        self.status == BottleStatus::Open
    }
}
