//! Data models
//!
//! Shared between storefront-server and frontend (via API).
//! All IDs are plain strings (document-store record keys).

pub mod price_multiplier;
pub mod product;
pub mod retailer;

// Re-exports
pub use price_multiplier::*;
pub use product::*;
pub use retailer::*;
