//! Price Resolver
//!
//! Per-retailer effective price resolution. Uses rust_decimal for the
//! multiplication, rounds half-up back to integer currency subunits.

use rust_decimal::prelude::*;
use shared::models::{Product, RetailerPriceMultiplier};

/// Select the multiplier that applies to (product, retailer), if any
///
/// Only active rows with a positive value qualify. The data model intends
/// at most one active row per key but the store does not enforce it, so
/// duplicates are resolved deterministically: latest `updated_at` wins, a
/// tie goes to the later row in fetch order.
pub fn select_active_multiplier<'a>(
    multipliers: &'a [RetailerPriceMultiplier],
    product_id: &str,
    retailer_code: &str,
) -> Option<&'a RetailerPriceMultiplier> {
    multipliers
        .iter()
        .filter(|m| {
            m.is_active
                && m.multiplier_value > 0.0
                && m.product_id == product_id
                && m.retailer_code == retailer_code
        })
        .fold(None, |best, m| match best {
            Some(b) if m.updated_at.unwrap_or(0) < b.updated_at.unwrap_or(0) => Some(b),
            _ => Some(m),
        })
}

/// Compute the effective price in subunits for one product and retailer
///
/// No retailer code, or no qualifying multiplier -> the base price,
/// unchanged. A non-positive multiplier value never produces a zero or
/// negative price; it is treated as "no multiplier".
pub fn effective_price(
    product: &Product,
    retailer_code: Option<&str>,
    multipliers: &[RetailerPriceMultiplier],
) -> i64 {
    let Some(code) = retailer_code.filter(|c| !c.is_empty()) else {
        return product.price;
    };
    let Some(product_id) = product.id.as_deref() else {
        return product.price;
    };

    match select_active_multiplier(multipliers, product_id, code) {
        Some(multiplier) => {
            let Some(value) = Decimal::from_f64(multiplier.multiplier_value) else {
                return product.price;
            };
            (Decimal::from(product.price) * value)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(product.price)
        }
        None => product.price,
    }
}
