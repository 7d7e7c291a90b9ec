//! Retailer Price Multiplier Model

use serde::{Deserialize, Serialize};

/// Per-retailer, per-product price multiplier
///
/// At most one active multiplier should exist per (product, retailer) key.
/// The store does not enforce that, so readers resolve duplicates by
/// latest `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerPriceMultiplier {
    pub id: Option<String>,
    pub product_id: String,
    pub retailer_code: String,
    /// Scalar applied to the base price. Must be positive to take effect.
    pub multiplier_value: f64,
    pub is_active: bool,
    /// Unix millis
    pub updated_at: Option<i64>,
}

/// Create multiplier payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerPriceMultiplierCreate {
    pub product_id: String,
    pub retailer_code: String,
    pub multiplier_value: f64,
    pub is_active: Option<bool>,
}
