//! Domain models

pub mod bottle;
pub mod product;
pub mod receipt_config;
pub mod register;
pub mod section;
pub mod staff;
pub mod table;

// Re-exports
pub use bottle::{
    BottleCategory, BottleStatus, MeasureStandard, PourType, SpiritBottle, SpiritLog,
    EMPTY_THRESHOLD_ML,
};
pub use product::{Product, SpiritConfig, SpiritPrices};
pub use receipt_config::ReceiptConfig;
pub use register::{RegisterSession, RegisterStatus};
pub use section::SectionAllocation;
pub use staff::{Actor, Capability, StaffRole};
pub use table::Table;
