//! Price Multiplier Repository

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::{RetailerPriceMultiplier, RetailerPriceMultiplierCreate};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::catalog::MultiplierStore;

const MULTIPLIER_TABLE: &str = "price_multiplier";

#[derive(Debug, Serialize, Deserialize)]
struct MultiplierRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,
    product_id: String,
    retailer_code: String,
    multiplier_value: f64,
    is_active: bool,
    updated_at: Option<i64>,
}

impl From<MultiplierRow> for RetailerPriceMultiplier {
    fn from(row: MultiplierRow) -> Self {
        Self {
            id: row.id.map(|id| id.key().to_string()),
            product_id: row.product_id,
            retailer_code: row.retailer_code,
            multiplier_value: row.multiplier_value,
            is_active: row.is_active,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct MultiplierRepository {
    base: BaseRepository,
}

impl MultiplierRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Active multipliers for one retailer, across all products
    ///
    /// Rows come back oldest first so the reader's latest-wins fold is
    /// deterministic when `updated_at` ties.
    pub async fn find_for_retailer(
        &self,
        retailer_code: &str,
    ) -> RepoResult<Vec<RetailerPriceMultiplier>> {
        let rows: Vec<MultiplierRow> = self
            .base
            .db()
            .query(
                "SELECT * FROM price_multiplier \
                 WHERE retailer_code = $code AND is_active = true \
                 ORDER BY updated_at",
            )
            .bind(("code", retailer_code.to_string()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(RetailerPriceMultiplier::from).collect())
    }

    /// Create a multiplier row
    pub async fn create(
        &self,
        data: RetailerPriceMultiplierCreate,
    ) -> RepoResult<RetailerPriceMultiplier> {
        if data.multiplier_value <= 0.0 {
            return Err(RepoError::Validation(
                "multiplier_value must be positive".into(),
            ));
        }
        if data.retailer_code.trim().is_empty() {
            return Err(RepoError::Validation("retailer_code is required".into()));
        }

        let row = MultiplierRow {
            id: None,
            product_id: data.product_id,
            retailer_code: data.retailer_code,
            multiplier_value: data.multiplier_value,
            is_active: data.is_active.unwrap_or(true),
            updated_at: Some(Utc::now().timestamp_millis()),
        };

        let created: Option<MultiplierRow> = self
            .base
            .db()
            .create(MULTIPLIER_TABLE)
            .content(row)
            .await?;
        created
            .map(RetailerPriceMultiplier::from)
            .ok_or_else(|| RepoError::Database("Failed to create multiplier".to_string()))
    }

    /// Deactivate a multiplier without deleting its history
    pub async fn deactivate(&self, id: &str) -> RepoResult<RetailerPriceMultiplier> {
        let thing = RecordId::from_table_key(MULTIPLIER_TABLE, id);
        let now = Utc::now().timestamp_millis();
        let rows: Vec<MultiplierRow> = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false, updated_at = $now RETURN AFTER")
            .bind(("thing", thing))
            .bind(("now", now))
            .await?
            .take(0)?;
        rows.into_iter()
            .next()
            .map(RetailerPriceMultiplier::from)
            .ok_or_else(|| RepoError::NotFound(format!("Multiplier {} not found", id)))
    }
}

impl MultiplierStore for MultiplierRepository {
    async fn find_for_retailer(
        &self,
        retailer_code: &str,
    ) -> RepoResult<Vec<RetailerPriceMultiplier>> {
        MultiplierRepository::find_for_retailer(self, retailer_code).await
    }
}
