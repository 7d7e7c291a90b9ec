//! Catalog domain logic
//!
//! The retailer-scoped visibility and pricing core:
//!
//! - [`policy`] - process-wide filtering policy and the filter decision
//! - [`visibility`] - allow-list matching over the product catalog
//! - [`pricing`] - per-retailer effective price resolution
//! - [`availability`] - allow-list editing helper (single/bulk/range input)
//! - [`service`] - orchestration over the product/multiplier stores

pub mod availability;
pub mod policy;
pub mod pricing;
pub mod service;
pub mod visibility;

pub use availability::AvailabilityEditor;
pub use policy::FilteringPolicy;
pub use service::{CatalogService, MultiplierStore, ProductAvailability, ProductStore};
