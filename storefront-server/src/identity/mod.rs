//! Retailer Identity Resolution
//!
//! Maps an authenticated session to the retailer profile that scopes the
//! catalog. Resolution never fails a request: no session, no profile or a
//! store error all resolve to `None`, and the caller serves the catalog
//! unscoped.

use shared::models::RetailerProfile;

use crate::auth::CurrentUser;
use crate::db::repository::RepoResult;

/// Retailer profile reads
#[allow(async_fn_in_trait)]
pub trait RetailerStore {
    /// Profile owned by this user account, if any
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Option<RetailerProfile>>;
}

/// Resolve the retailer profile behind a session
///
/// Anonymous sessions, accounts without a profile and store failures all
/// yield `None`. Failures are logged at debug level only; an unresolved
/// identity is an expected state, not an error.
pub async fn resolve_retailer<S: RetailerStore>(
    store: &S,
    session: Option<&CurrentUser>,
) -> Option<RetailerProfile> {
    let user = session?;

    match store.find_by_user(&user.id).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::debug!(
                error = %err,
                user_id = %user.id,
                "retailer profile lookup failed, treating session as unscoped"
            );
            None
        }
    }
}
