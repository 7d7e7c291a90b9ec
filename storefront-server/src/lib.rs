//! Storefront Server - retailer-facing catalog backend
//!
//! # Architecture overview
//!
//! The server exposes a product catalog whose contents and prices depend on
//! who is asking. Retailers see the subset of products whose allow-list
//! names their retail code, at prices adjusted by per-retailer multipliers;
//! admins and anonymous callers see the catalog according to the filtering
//! policy.
//!
//! # Module structure
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT session validation
//! ├── identity/      # Session -> retailer profile resolution
//! ├── catalog/       # Visibility, pricing, availability editor (the core)
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SurrealDB repositories
//! └── utils/         # Error envelope, logger
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod identity;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use catalog::{AvailabilityEditor, CatalogService, FilteringPolicy};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_level};

// Security logging macro - tracing with a fixed target for auth events
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            severity = $level,
            event = $event,
            $($key = %$value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
