//! Receipt Configuration Model

use serde::{Deserialize, Serialize};

/// Printable document configuration passed through to the print boundary.
///
/// Formatting itself happens in the print collaborator; the ledger only
/// carries these settings alongside the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptConfig {
    /// e.g. "UGX", "€"
    pub currency_symbol: String,
    /// Paper width in characters
    pub paper_width: i32,
    pub font_size: i32,
    pub header: String,
    pub footer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "UGX".to_string(),
            paper_width: 32,
            font_size: 12,
            header: String::new(),
            footer: "Thank you".to_string(),
            logo: None,
        }
    }
}
