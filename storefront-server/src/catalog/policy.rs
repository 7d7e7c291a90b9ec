//! Filtering Policy
//!
//! Process-wide switches deciding whether and how the catalog is filtered
//! per retailer. Fixed at process start; request handlers never mutate it.

/// Master switch for retailer-based catalog filtering
pub const AUTO_FILTERING_ENABLED: bool = true;

/// When set, products without an allow-list are hidden from every
/// retailer-filtered view, regardless of `SHOW_UNRESTRICTED_TO_ALL`
pub const SUPER_STRICT_MODE: bool = false;

/// Whether products without an allow-list are shown to filtered retailers
pub const SHOW_UNRESTRICTED_TO_ALL: bool = true;

/// Retailer filtering policy
///
/// The admin override is a per-request flag, not part of the stored policy,
/// so it is passed into [`FilteringPolicy::should_filter`] by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteringPolicy {
    pub auto_filtering_enabled: bool,
    pub super_strict_mode: bool,
    pub show_unrestricted_to_all: bool,
}

impl Default for FilteringPolicy {
    fn default() -> Self {
        Self {
            auto_filtering_enabled: AUTO_FILTERING_ENABLED,
            super_strict_mode: SUPER_STRICT_MODE,
            show_unrestricted_to_all: SHOW_UNRESTRICTED_TO_ALL,
        }
    }
}

impl FilteringPolicy {
    /// Decide whether the catalog should be filtered for this request
    ///
    /// Rules, in order:
    /// 1. filtering globally disabled -> never filter
    /// 2. admin override -> never filter
    /// 3. otherwise filter iff a non-empty retailer code is present
    pub fn should_filter(&self, retailer_code: Option<&str>, admin_override: bool) -> bool {
        if !self.auto_filtering_enabled {
            return false;
        }
        if admin_override {
            return false;
        }
        retailer_code.is_some_and(|code| !code.is_empty())
    }
}
