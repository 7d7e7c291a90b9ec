//! Catalog Service
//!
//! Orchestrates store fetches, the filtering policy, visibility and pricing
//! into the request-facing operations. Stores are injected behind small
//! traits so the service runs against the SurrealDB repositories in
//! production and in-memory fakes in tests.

use serde::Serialize;
use shared::models::{Product, RetailerPriceMultiplier};

use crate::catalog::{FilteringPolicy, pricing, visibility};
use crate::db::repository::RepoResult;

/// Product catalog reads
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Full active catalog, stable order
    async fn find_all(&self) -> RepoResult<Vec<Product>>;

    /// Server-side retailer-scoped query: products whose allow-list names
    /// the code, plus unrestricted products (policy still decides those)
    async fn find_for_retailer(&self, retailer_code: &str) -> RepoResult<Vec<Product>>;

    /// Lookup by ids, for the availability check
    async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Product>>;
}

/// Price multiplier reads
#[allow(async_fn_in_trait)]
pub trait MultiplierStore {
    /// Active multipliers for one retailer, across all products
    async fn find_for_retailer(&self, retailer_code: &str)
    -> RepoResult<Vec<RetailerPriceMultiplier>>;
}

/// Per-product result of the availability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAvailability {
    pub product_id: String,
    pub available: bool,
    pub reason: &'static str,
}

/// Catalog orchestration over injected stores
#[derive(Clone)]
pub struct CatalogService<P, M> {
    products: P,
    multipliers: M,
    policy: FilteringPolicy,
}

impl<P: ProductStore, M: MultiplierStore> CatalogService<P, M> {
    pub fn new(products: P, multipliers: M, policy: FilteringPolicy) -> Self {
        Self {
            products,
            multipliers,
            policy,
        }
    }

    pub fn policy(&self) -> &FilteringPolicy {
        &self.policy
    }

    /// Catalog subset visible for this request, base prices
    ///
    /// Fail-open: when the retailer-scoped fetch errors, the unfiltered
    /// catalog is served instead of an empty result or a propagated
    /// failure. Operators judged showing everything during an outage less
    /// harmful than showing nothing.
    pub async fn products_for_retailer(
        &self,
        retailer_code: Option<&str>,
        admin_override: bool,
    ) -> RepoResult<Vec<Product>> {
        if !self.policy.should_filter(retailer_code, admin_override) {
            return self.products.find_all().await;
        }

        let code = retailer_code.unwrap_or_default();
        match self.products.find_for_retailer(code).await {
            Ok(scoped) => {
                // The server-side query prefilters on the allow-list; the
                // policy still decides what unrestricted rows mean.
                Ok(visibility::visible_products(
                    &scoped,
                    Some(code),
                    false,
                    &self.policy,
                ))
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retailer = code,
                    "retailer-scoped catalog fetch failed, serving unfiltered catalog"
                );
                self.products.find_all().await
            }
        }
    }

    /// Visible catalog with per-retailer effective prices applied
    ///
    /// A multiplier fetch failure degrades to base prices, never to an
    /// error.
    pub async fn priced_products_for_retailer(
        &self,
        retailer_code: Option<&str>,
        admin_override: bool,
    ) -> RepoResult<Vec<Product>> {
        let mut products = self
            .products_for_retailer(retailer_code, admin_override)
            .await?;

        let Some(code) = retailer_code.filter(|c| !c.is_empty()) else {
            return Ok(products);
        };

        let multipliers = match self.multipliers.find_for_retailer(code).await {
            Ok(multipliers) => multipliers,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retailer = code,
                    "multiplier fetch failed, serving base prices"
                );
                Vec::new()
            }
        };

        for product in &mut products {
            product.price = pricing::effective_price(product, Some(code), &multipliers);
        }
        Ok(products)
    }

    /// Per-product allow-list check for one retailer
    ///
    /// Ids that match no product are reported unavailable rather than
    /// dropped, so the response always answers every requested id.
    pub async fn check_availability(
        &self,
        retailer_code: &str,
        product_ids: &[String],
    ) -> RepoResult<Vec<ProductAvailability>> {
        let products = self.products.find_by_ids(product_ids).await?;

        let results = product_ids
            .iter()
            .map(|id| {
                match products.iter().find(|p| p.id.as_deref() == Some(id)) {
                    Some(product) => {
                        let (available, reason) =
                            visibility::availability_of(product, retailer_code);
                        ProductAvailability {
                            product_id: id.clone(),
                            available,
                            reason,
                        }
                    }
                    None => ProductAvailability {
                        product_id: id.clone(),
                        available: false,
                        reason: "product not found",
                    },
                }
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;

    fn product(id: &str, price: i64, allow: &[&str]) -> Product {
        Product {
            id: Some(id.to_string()),
            name: format!("Product {id}"),
            description: String::new(),
            image_url: None,
            price,
            mrp: None,
            discount: None,
            stock: 10,
            retailer_availability: allow.iter().map(|s| s.to_string()).collect(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn multiplier(product_id: &str, retailer_code: &str, value: f64) -> RetailerPriceMultiplier {
        RetailerPriceMultiplier {
            id: None,
            product_id: product_id.to_string(),
            retailer_code: retailer_code.to_string(),
            multiplier_value: value,
            is_active: true,
            updated_at: Some(1),
        }
    }

    /// In-memory product store with per-method failure injection
    struct FakeProducts {
        catalog: Vec<Product>,
        fail_all: bool,
        fail_scoped: bool,
    }

    impl FakeProducts {
        fn new(catalog: Vec<Product>) -> Self {
            Self {
                catalog,
                fail_all: false,
                fail_scoped: false,
            }
        }
    }

    impl ProductStore for FakeProducts {
        async fn find_all(&self) -> RepoResult<Vec<Product>> {
            if self.fail_all {
                return Err(RepoError::Database("store unreachable".into()));
            }
            Ok(self.catalog.clone())
        }

        async fn find_for_retailer(&self, retailer_code: &str) -> RepoResult<Vec<Product>> {
            if self.fail_scoped {
                return Err(RepoError::Database("scoped query failed".into()));
            }
            Ok(self
                .catalog
                .iter()
                .filter(|p| {
                    !p.is_restricted()
                        || p.retailer_availability.iter().any(|c| c == retailer_code)
                })
                .cloned()
                .collect())
        }

        async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Product>> {
            Ok(self
                .catalog
                .iter()
                .filter(|p| p.id.as_ref().is_some_and(|id| ids.contains(id)))
                .cloned()
                .collect())
        }
    }

    struct FakeMultipliers {
        rows: Vec<RetailerPriceMultiplier>,
        fail: bool,
    }

    impl MultiplierStore for FakeMultipliers {
        async fn find_for_retailer(
            &self,
            retailer_code: &str,
        ) -> RepoResult<Vec<RetailerPriceMultiplier>> {
            if self.fail {
                return Err(RepoError::Database("store unreachable".into()));
            }
            Ok(self
                .rows
                .iter()
                .filter(|m| m.retailer_code == retailer_code)
                .cloned()
                .collect())
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("A", 1000, &[]),
            product("B", 2000, &["R1"]),
            product("C", 3000, &["R2"]),
        ]
    }

    fn service(
        products: FakeProducts,
        multipliers: Vec<RetailerPriceMultiplier>,
    ) -> CatalogService<FakeProducts, FakeMultipliers> {
        CatalogService::new(
            products,
            FakeMultipliers {
                rows: multipliers,
                fail: false,
            },
            FilteringPolicy::default(),
        )
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().filter_map(|p| p.id.as_deref()).collect()
    }

    #[tokio::test]
    async fn test_filtered_catalog_for_retailer() {
        let svc = service(FakeProducts::new(catalog()), vec![]);
        let out = svc.products_for_retailer(Some("R1"), false).await.unwrap();
        assert_eq!(ids(&out), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_unfiltered_without_identity() {
        let svc = service(FakeProducts::new(catalog()), vec![]);
        let out = svc.products_for_retailer(None, false).await.unwrap();
        assert_eq!(ids(&out), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_admin_override_sees_everything() {
        let svc = service(FakeProducts::new(catalog()), vec![]);
        let out = svc.products_for_retailer(Some("R1"), true).await.unwrap();
        assert_eq!(ids(&out), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_fail_open_on_scoped_fetch_error() {
        let mut products = FakeProducts::new(catalog());
        products.fail_scoped = true;
        let svc = service(products, vec![]);

        // The scoped query fails; the full catalog is served instead.
        let out = svc.products_for_retailer(Some("R1"), false).await.unwrap();
        assert_eq!(ids(&out), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_error_propagates_when_nothing_to_serve() {
        let mut products = FakeProducts::new(catalog());
        products.fail_all = true;
        products.fail_scoped = true;
        let svc = service(products, vec![]);

        assert!(svc.products_for_retailer(Some("R1"), false).await.is_err());
    }

    #[tokio::test]
    async fn test_priced_catalog_applies_multipliers() {
        let svc = service(
            FakeProducts::new(catalog()),
            vec![multiplier("B", "R1", 1.5), multiplier("A", "R2", 9.0)],
        );
        let out = svc
            .priced_products_for_retailer(Some("R1"), false)
            .await
            .unwrap();
        assert_eq!(ids(&out), vec!["A", "B"]);
        assert_eq!(out[0].price, 1000); // no multiplier for A/R1
        assert_eq!(out[1].price, 3000); // 2000 * 1.5
    }

    #[tokio::test]
    async fn test_multiplier_fetch_failure_degrades_to_base_prices() {
        let svc = CatalogService::new(
            FakeProducts::new(catalog()),
            FakeMultipliers {
                rows: vec![multiplier("B", "R1", 1.5)],
                fail: true,
            },
            FilteringPolicy::default(),
        );
        let out = svc
            .priced_products_for_retailer(Some("R1"), false)
            .await
            .unwrap();
        assert_eq!(out[1].price, 2000);
    }

    #[tokio::test]
    async fn test_no_pricing_pass_without_retailer() {
        let svc = service(FakeProducts::new(catalog()), vec![multiplier("A", "R1", 2.0)]);
        let out = svc.priced_products_for_retailer(None, false).await.unwrap();
        assert_eq!(out[0].price, 1000);
    }

    #[tokio::test]
    async fn test_check_availability_reasons() {
        let svc = service(FakeProducts::new(catalog()), vec![]);
        let out = svc
            .check_availability(
                "R1",
                &["A".to_string(), "B".to_string(), "C".to_string(), "ZZ".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(
            out,
            vec![
                ProductAvailability {
                    product_id: "A".into(),
                    available: true,
                    reason: "unrestricted",
                },
                ProductAvailability {
                    product_id: "B".into(),
                    available: true,
                    reason: "allowed for retailer",
                },
                ProductAvailability {
                    product_id: "C".into(),
                    available: false,
                    reason: "not available for this retailer",
                },
                ProductAvailability {
                    product_id: "ZZ".into(),
                    available: false,
                    reason: "product not found",
                },
            ]
        );
    }
}
