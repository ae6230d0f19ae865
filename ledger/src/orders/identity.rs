//! Content-addressed line identity
//!
//! A line's `instance_id` is a hash of its identity-defining fields:
//! product, resolved name and resolved price. Two additions with the same
//! identity land on the same line (quantities merged) as long as the
//! existing line carries no note; a measure variant like
//! "Jameson (Double Tot)" hashes differently from the plain product and
//! therefore keeps its own line.

use sha2::{Digest, Sha256};

/// Generate the content-addressed instance id for a resolved line
pub fn generate_instance_id(product_id: &str, resolved_name: &str, resolved_price: f64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(product_id.as_bytes());
    hasher.update([0u8]); // field separator
    hasher.update(resolved_name.as_bytes());
    hasher.update([0u8]);
    hasher.update(resolved_price.to_be_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..16]) // first 16 bytes for a shorter ID
}
