//! Shared types for the storefront stack
//!
//! Plain data models exchanged between the server and its clients.
//! No I/O, no database types — repositories map their rows into these.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
