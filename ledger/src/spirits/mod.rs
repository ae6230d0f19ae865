//! Spirit Inventory Ledger
//!
//! Translates a requested pour (product + measure) into a deterministic
//! volume deduction against one chosen open bottle, honoring the bottle's
//! configured measurement standard, and appends an immutable log entry.
//! Measure resolution lives here once so every caller deducts identically.

pub mod measure;
pub mod pour;

pub use measure::{annotate_name, measure_price, resolve_volume, tot_count, Measure};
pub use pour::{open_bottles_for, pour, pour_and_add, PourOutcome, PourSale};
