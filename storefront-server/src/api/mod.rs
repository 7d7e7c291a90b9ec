//! API routes
//!
//! # Structure
//!
//! - [`extract`] - envelope-aware Query/Json extractors
//! - [`health`] - liveness probe
//! - [`products`] - retailer-scoped catalog endpoints

pub mod extract;
pub mod health;
pub mod products;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// The full route tree, before state and middleware layers are applied
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
}
