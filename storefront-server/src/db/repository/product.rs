//! Product Repository

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::{Product, ProductCreate};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::catalog::ProductStore;

const PRODUCT_TABLE: &str = "product";

/// Database row for the product table
///
/// Kept separate from `shared::models::Product` so the shared crate stays
/// free of surrealdb types; the `RecordId` is flattened to its key string
/// at the boundary.
#[derive(Debug, Serialize, Deserialize)]
struct ProductRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,
    name: String,
    #[serde(default)]
    description: String,
    image_url: Option<String>,
    price: i64,
    mrp: Option<i64>,
    discount: Option<i64>,
    #[serde(default)]
    stock: u32,
    #[serde(default)]
    retailer_availability: Vec<String>,
    is_active: bool,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id.map(|id| id.key().to_string()),
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            price: row.price,
            mrp: row.mrp,
            discount: row.discount,
            stock: row.stock,
            retailer_availability: row.retailer_availability,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All active products, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE is_active = true ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Active products a retailer may see: allow-listed for the code, or
    /// unrestricted. The policy layer decides what unrestricted rows mean.
    pub async fn find_for_retailer(&self, retailer_code: &str) -> RepoResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .base
            .db()
            .query(
                "SELECT * FROM product \
                 WHERE is_active = true \
                 AND (retailer_availability CONTAINS $code OR array::len(retailer_availability) = 0) \
                 ORDER BY created_at",
            )
            .bind(("code", retailer_code.to_string()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Active products matching the given ids; missing ids are simply absent
    pub async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Product>> {
        let record_ids: Vec<RecordId> = ids
            .iter()
            .map(|id| RecordId::from_table_key(PRODUCT_TABLE, id))
            .collect();

        let rows: Vec<ProductRow> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE id IN $ids AND is_active = true")
            .bind(("ids", record_ids))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.price <= 0 {
            return Err(RepoError::Validation("price must be positive".into()));
        }

        let now = Utc::now().timestamp_millis();
        let row = ProductRow {
            id: None,
            name: data.name,
            description: data.description.unwrap_or_default(),
            image_url: data.image_url,
            price: data.price,
            mrp: data.mrp,
            discount: data.discount,
            stock: data.stock.unwrap_or(0),
            retailer_availability: data.retailer_availability.unwrap_or_default(),
            is_active: true,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created: Option<ProductRow> =
            self.base.db().create(PRODUCT_TABLE).content(row).await?;
        created
            .map(Product::from)
            .ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Replace a product's allow-list
    pub async fn set_availability(&self, id: &str, codes: Vec<String>) -> RepoResult<Product> {
        let thing = RecordId::from_table_key(PRODUCT_TABLE, id);
        let now = Utc::now().timestamp_millis();
        let rows: Vec<ProductRow> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET retailer_availability = $codes, updated_at = $now RETURN AFTER",
            )
            .bind(("thing", thing))
            .bind(("codes", codes))
            .bind(("now", now))
            .await?
            .take(0)?;
        rows.into_iter()
            .next()
            .map(Product::from)
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }
}

impl ProductStore for ProductRepository {
    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        ProductRepository::find_all(self).await
    }

    async fn find_for_retailer(&self, retailer_code: &str) -> RepoResult<Vec<Product>> {
        ProductRepository::find_for_retailer(self, retailer_code).await
    }

    async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Product>> {
        ProductRepository::find_by_ids(self, ids).await
    }
}
