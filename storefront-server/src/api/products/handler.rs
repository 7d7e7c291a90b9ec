//! Product API Handlers
//!
//! The catalog endpoints are anonymous-friendly: a session only narrows
//! (or, for admins, widens) what the caller sees. Which retailer scope
//! applies to a listing, in priority order:
//!
//! 1. `retailerCode` query parameter (forced override, no session needed)
//! 2. `includeAll=true` from an admin session (unfiltered catalog)
//! 3. the retailer profile resolved from the session
//! 4. none of the above: the policy decides what anonymous callers see

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::Product;

use crate::api::extract::{AppJson, AppQuery};
use crate::auth::CurrentUser;
use crate::catalog::ProductAvailability;
use crate::core::ServerState;
use crate::identity::resolve_retailer;
use crate::utils::{AppError, AppResponse, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    /// Admin override: serve the unfiltered catalog. Honored only for
    /// admin sessions; others fall through to normal resolution.
    #[serde(default)]
    pub include_all: bool,
    /// Forced retailer scope, wins over the session identity
    pub retailer_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    pub retailer_code: String,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// GET /api/products - the catalog as this caller may see it
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListProductsQuery>,
    user: Option<CurrentUser>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let service = state.catalog_service();

    // Forced scope wins over everything else
    if let Some(code) = query.retailer_code.as_deref().filter(|c| !c.is_empty()) {
        let products = service.priced_products_for_retailer(Some(code), false).await?;
        return Ok(AppResponse::ok_list(products));
    }

    let admin_override = query.include_all && user.as_ref().is_some_and(|u| u.is_admin);
    if admin_override {
        let products = service.priced_products_for_retailer(None, true).await?;
        return Ok(AppResponse::ok_list(products));
    }

    let profile = resolve_retailer(&state.retailer_repository(), user.as_ref()).await;
    let code = profile.as_ref().and_then(|p| p.code());

    let products = service.priced_products_for_retailer(code, false).await?;
    Ok(AppResponse::ok_list(products))
}

/// GET /api/products/retailer/{code} - forced retailer scope
pub async fn list_for_retailer(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    if code.trim().is_empty() {
        return Err(AppError::validation("retailer code is required"));
    }

    let products = state
        .catalog_service()
        .priced_products_for_retailer(Some(&code), false)
        .await?;
    Ok(AppResponse::ok_list(products))
}

/// POST /api/products/check-availability - allow-list check per product
pub async fn check_availability(
    State(state): State<ServerState>,
    AppJson(request): AppJson<CheckAvailabilityRequest>,
) -> AppResult<Json<AppResponse<Vec<ProductAvailability>>>> {
    if request.retailer_code.trim().is_empty() {
        return Err(AppError::validation("retailerCode is required"));
    }

    let results = state
        .catalog_service()
        .check_availability(&request.retailer_code, &request.product_ids)
        .await?;
    Ok(AppResponse::ok_list(results))
}
