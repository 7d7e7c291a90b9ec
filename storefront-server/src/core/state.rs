use std::sync::Arc;

use chrono::{DateTime, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::catalog::{CatalogService, FilteringPolicy};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{MultiplierRepository, ProductRepository, RetailerRepository};
use crate::utils::AppError;

/// Shared server state
///
/// Cloneable handle carried by every request. Holds the immutable config,
/// the embedded database handle and the JWT service. Repositories and the
/// catalog service are cheap per-request constructions over the shared
/// database handle.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (read-only after load)
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT session validation (Arc shared)
    pub jwt_service: Arc<JwtService>,
    /// Process start time, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    /// Initialize server state
    ///
    /// 1. Ensure the working directory layout exists
    /// 2. Open the embedded database
    /// 3. Build the JWT service from config
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            started_at: Utc::now(),
        })
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Active filtering policy
    pub fn policy(&self) -> FilteringPolicy {
        self.config.policy
    }

    /// Catalog service over the live repositories
    pub fn catalog_service(&self) -> CatalogService<ProductRepository, MultiplierRepository> {
        CatalogService::new(
            ProductRepository::new(self.db.clone()),
            MultiplierRepository::new(self.db.clone()),
            self.config.policy,
        )
    }

    /// Retailer lookup repository (identity resolution)
    pub fn retailer_repository(&self) -> RetailerRepository {
        RetailerRepository::new(self.db.clone())
    }

    /// Seconds since the process started serving
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
