//! Retailer Repository

use serde::{Deserialize, Serialize};
use shared::models::RetailerProfile;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::identity::RetailerStore;

const RETAILER_TABLE: &str = "retailer";

#[derive(Debug, Serialize, Deserialize)]
struct RetailerRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,
    user_id: String,
    retail_code: Option<String>,
    shop_name: String,
    address: Option<String>,
    pincode: Option<String>,
}

impl From<RetailerRow> for RetailerProfile {
    fn from(row: RetailerRow) -> Self {
        Self {
            id: row.id.map(|id| id.key().to_string()),
            user_id: row.user_id,
            retail_code: row.retail_code,
            shop_name: row.shop_name,
            address: row.address,
            pincode: row.pincode,
        }
    }
}

#[derive(Clone)]
pub struct RetailerRepository {
    base: BaseRepository,
}

impl RetailerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Retailer profile linked to an auth subject, if any
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Option<RetailerProfile>> {
        let rows: Vec<RetailerRow> = self
            .base
            .db()
            .query("SELECT * FROM retailer WHERE user_id = $user LIMIT 1")
            .bind(("user", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(RetailerProfile::from))
    }

    /// Create a retailer profile; one profile per user account
    pub async fn create(&self, profile: RetailerProfile) -> RepoResult<RetailerProfile> {
        if self.find_by_user(&profile.user_id).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Retailer profile already exists for user {}",
                profile.user_id
            )));
        }

        let row = RetailerRow {
            id: None,
            user_id: profile.user_id,
            retail_code: profile.retail_code,
            shop_name: profile.shop_name,
            address: profile.address,
            pincode: profile.pincode,
        };

        let created: Option<RetailerRow> =
            self.base.db().create(RETAILER_TABLE).content(row).await?;
        created
            .map(RetailerProfile::from)
            .ok_or_else(|| RepoError::Database("Failed to create retailer profile".to_string()))
    }
}

impl RetailerStore for RetailerRepository {
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Option<RetailerProfile>> {
        RetailerRepository::find_by_user(self, user_id).await
    }
}
