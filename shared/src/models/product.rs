//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `retailer_availability` is the allow-list of retailer codes that may see
/// this product. An empty list does NOT mean "hidden from everyone" — the
/// server's filtering policy decides what unrestricted products mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Base price in cents
    pub price: i64,
    /// Maximum retail price in cents
    pub mrp: Option<i64>,
    /// Flat discount in cents (display only, already reflected in price)
    pub discount: Option<i64>,
    pub stock: u32,
    /// Retailer codes allowed to see this product (insertion order, no dupes)
    pub retailer_availability: Vec<String>,
    pub is_active: bool,
    /// Unix millis
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Product {
    /// Whether this product carries an explicit retailer allow-list
    pub fn is_restricted(&self) -> bool {
        !self.retailer_availability.is_empty()
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: i64,
    pub mrp: Option<i64>,
    pub discount: Option<i64>,
    pub stock: Option<u32>,
    pub retailer_availability: Option<Vec<String>>,
}
