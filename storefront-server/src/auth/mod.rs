//! Session authentication
//!
//! JWT validation and the request extractors that turn a bearer token into
//! a [`CurrentUser`]. Sessions are optional almost everywhere: catalog
//! endpoints accept anonymous callers and only use the session to scope
//! what they see.

mod extractor;
mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
