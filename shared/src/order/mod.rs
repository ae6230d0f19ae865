//! Order types
//!
//! - Item/payment types shared by every mutation path
//! - The order snapshot: the authoritative tab/ticket state

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{Order, OrderStatus};
pub use types::{OrderItem, PaymentMethod, SplitItem};
