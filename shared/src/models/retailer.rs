//! Retailer Profile Model

use serde::{Deserialize, Serialize};

/// Retailer profile, derived per request from the authenticated session
///
/// Never persisted by the catalog core. `retail_code` may be absent for
/// accounts that exist in the auth provider but have no retailer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerProfile {
    pub id: Option<String>,
    /// Auth subject this retailer record is linked to
    pub user_id: String,
    /// Filtering/pricing key. Absent for non-retailer accounts.
    pub retail_code: Option<String>,
    pub shop_name: String,
    pub address: Option<String>,
    pub pincode: Option<String>,
}

impl RetailerProfile {
    /// The non-empty retail code, if any
    pub fn code(&self) -> Option<&str> {
        self.retail_code.as_deref().filter(|c| !c.is_empty())
    }
}
