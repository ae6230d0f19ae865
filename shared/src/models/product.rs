//! Product Model

use serde::{Deserialize, Serialize};

/// Per-measure price tiers for a spirit or by-the-glass wine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpiritPrices {
    /// Single tot / glass price
    pub single: f64,
    /// Double tot price
    pub double: f64,
    /// Full bottle price
    pub full: f64,
}

/// Spirit behaviour flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct SpiritConfig {
    /// Sold by the measure against bottle inventory
    #[serde(default)]
    pub is_spirit: bool,
}

/// Product entity - immutable catalog reference data supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category tag (e.g. "BEERS", "SPIRITS", "FOOD")
    pub category: String,
    /// Unit price in the configured currency's major unit
    pub price: f64,
    /// Stock on hand (meaningful only when track_stock is set)
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub track_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit_config: Option<SpiritConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit_prices: Option<SpiritPrices>,
}

impl Product {
    /// Whether this product is poured by the measure
    pub fn is_spirit(&self) -> bool {
        self.spirit_config.map(|c| c.is_spirit).unwrap_or(false)
    }
}
