//! Database layer
//!
//! Embedded SurrealDB (RocksDB engine) plus the repository types the rest
//! of the server goes through. Nothing outside this module writes queries.

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use repository::RepoResult;

const NAMESPACE: &str = "storefront";
const DATABASE: &str = "catalog";

/// Embedded database handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database at `path`
    pub async fn new(path: &str) -> RepoResult<Self> {
        let db = Surreal::new::<RocksDb>(path).await?;
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;

        tracing::info!(path, "database opened");
        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use shared::models::{ProductCreate, RetailerPriceMultiplierCreate, RetailerProfile};
    use tempfile::TempDir;

    use super::*;
    use crate::db::repository::{
        MultiplierRepository, ProductRepository, RepoError, RetailerRepository,
    };

    async fn open_db() -> (TempDir, DbService) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("test.db");
        let service = DbService::new(&path.to_string_lossy())
            .await
            .expect("failed to open test database");
        (dir, service)
    }

    fn product_create(name: &str, price: i64, allow: &[&str]) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            description: None,
            image_url: None,
            price,
            mrp: None,
            discount: None,
            stock: Some(10),
            retailer_availability: Some(allow.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[tokio::test]
    async fn test_retailer_scoped_product_query() {
        let (_dir, db) = open_db().await;
        let repo = ProductRepository::new(db.db.clone());

        repo.create(product_create("Open", 1000, &[]))
            .await
            .expect("create failed");
        repo.create(product_create("ForR1", 2000, &["R1"]))
            .await
            .expect("create failed");
        repo.create(product_create("ForR2", 3000, &["R2"]))
            .await
            .expect("create failed");

        let all = repo.find_all().await.expect("find_all failed");
        assert_eq!(all.len(), 3);

        let scoped = repo.find_for_retailer("R1").await.expect("scoped failed");
        let mut names: Vec<&str> = scoped.iter().map(|p| p.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["ForR1", "Open"]);
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_missing() {
        let (_dir, db) = open_db().await;
        let repo = ProductRepository::new(db.db.clone());

        let created = repo
            .create(product_create("One", 500, &[]))
            .await
            .expect("create failed");
        let id = created.id.expect("created product has no id");

        let found = repo
            .find_by_ids(&[id.clone(), "does-not-exist".to_string()])
            .await
            .expect("find_by_ids failed");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn test_set_availability_replaces_list() {
        let (_dir, db) = open_db().await;
        let repo = ProductRepository::new(db.db.clone());

        let created = repo
            .create(product_create("One", 500, &["R1"]))
            .await
            .expect("create failed");
        let id = created.id.expect("created product has no id");

        let updated = repo
            .set_availability(&id, vec!["R2".to_string(), "R3".to_string()])
            .await
            .expect("set_availability failed");
        assert_eq!(updated.retailer_availability, vec!["R2", "R3"]);
    }

    #[tokio::test]
    async fn test_multiplier_create_and_fetch() {
        let (_dir, db) = open_db().await;
        let repo = MultiplierRepository::new(db.db.clone());

        repo.create(RetailerPriceMultiplierCreate {
            product_id: "p1".to_string(),
            retailer_code: "R1".to_string(),
            multiplier_value: 1.5,
            is_active: None,
        })
        .await
        .expect("create failed");

        let rows = repo.find_for_retailer("R1").await.expect("fetch failed");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_active);
        assert!(rows[0].updated_at.is_some());

        assert!(repo.find_for_retailer("R2").await.expect("fetch failed").is_empty());
    }

    #[tokio::test]
    async fn test_multiplier_rejects_non_positive_value() {
        let (_dir, db) = open_db().await;
        let repo = MultiplierRepository::new(db.db.clone());

        let result = repo
            .create(RetailerPriceMultiplierCreate {
                product_id: "p1".to_string(),
                retailer_code: "R1".to_string(),
                multiplier_value: 0.0,
                is_active: None,
            })
            .await;
        assert!(matches!(result, Err(RepoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_deactivated_multiplier_not_fetched() {
        let (_dir, db) = open_db().await;
        let repo = MultiplierRepository::new(db.db.clone());

        let created = repo
            .create(RetailerPriceMultiplierCreate {
                product_id: "p1".to_string(),
                retailer_code: "R1".to_string(),
                multiplier_value: 1.2,
                is_active: None,
            })
            .await
            .expect("create failed");

        repo.deactivate(&created.id.expect("no id"))
            .await
            .expect("deactivate failed");
        assert!(repo.find_for_retailer("R1").await.expect("fetch failed").is_empty());
    }

    #[tokio::test]
    async fn test_retailer_profile_lookup_and_duplicate() {
        let (_dir, db) = open_db().await;
        let repo = RetailerRepository::new(db.db.clone());

        let profile = RetailerProfile {
            id: None,
            user_id: "u1".to_string(),
            retail_code: Some("R001".to_string()),
            shop_name: "Corner Shop".to_string(),
            address: None,
            pincode: None,
        };

        repo.create(profile.clone()).await.expect("create failed");

        let found = repo.find_by_user("u1").await.expect("lookup failed");
        assert_eq!(
            found.and_then(|p| p.retail_code),
            Some("R001".to_string())
        );
        assert!(repo.find_by_user("u2").await.expect("lookup failed").is_none());

        let dup = repo.create(profile).await;
        assert!(matches!(dup, Err(RepoError::Duplicate(_))));
    }
}
