//! Visibility Resolver
//!
//! Allow-list matching over the product catalog. Pure functions: catalog
//! slice in, filtered Vec out, input never mutated, order preserved.

use shared::models::Product;

use crate::catalog::FilteringPolicy;

/// Check whether one product is visible to one retailer under the policy
///
/// Allow-list matching is exact and case-sensitive. An empty allow-list
/// defers to the policy: visible iff unrestricted products are shown to all
/// and strict mode is off.
pub fn is_visible_to(product: &Product, retailer_code: &str, policy: &FilteringPolicy) -> bool {
    if product.is_restricted() {
        product
            .retailer_availability
            .iter()
            .any(|code| code == retailer_code)
    } else {
        policy.show_unrestricted_to_all && !policy.super_strict_mode
    }
}

/// Compute the catalog subset visible for this request
///
/// If [`FilteringPolicy::should_filter`] says no (filtering disabled, admin
/// override, or no retailer code), the full catalog is returned unchanged
/// in its original order.
pub fn visible_products(
    catalog: &[Product],
    retailer_code: Option<&str>,
    admin_override: bool,
    policy: &FilteringPolicy,
) -> Vec<Product> {
    if !policy.should_filter(retailer_code, admin_override) {
        return catalog.to_vec();
    }

    // should_filter guarantees a non-empty code here
    let code = retailer_code.unwrap_or_default();

    catalog
        .iter()
        .filter(|product| is_visible_to(product, code, policy))
        .cloned()
        .collect()
}

/// Allow-list-only availability check
///
/// Used by the check-availability endpoint. Unlike [`visible_products`],
/// an unrestricted product is always reported available — the strict-mode
/// and show-unrestricted policy switches do not apply here.
pub fn availability_of(product: &Product, retailer_code: &str) -> (bool, &'static str) {
    if !product.is_restricted() {
        return (true, "unrestricted");
    }
    if product
        .retailer_availability
        .iter()
        .any(|code| code == retailer_code)
    {
        (true, "allowed for retailer")
    } else {
        (false, "not available for this retailer")
    }
}
