use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ListingCategory, MediaKind, ShowDetails},
    routes::{movies::ListingQuery, parse_id, parse_page, AppState},
    services::catalog,
};

/// Handler for `GET /api/tv`
pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ListingQuery>,
) -> AppResult<Response> {
    // No feed for TV without a listing type
    let Some(listing_type) = params.listing_type.as_deref() else {
        return Ok(Json(json!({ "results": [] })).into_response());
    };

    let category = ListingCategory::parse(MediaKind::Tv, listing_type);
    let page = parse_page(params.page.as_deref())?;

    tracing::info!(
        request_id = %request_id,
        category = category.path_segment(),
        page = page,
        "Fetching TV listing"
    );

    let listing =
        catalog::get_listing(state.metadata.as_ref(), MediaKind::Tv, category, page).await?;
    Ok(Json(listing).into_response())
}

/// Handler for `GET /api/tv/:id`
pub async fn show_details(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<ShowDetails>> {
    let id = parse_id(&id)?;

    tracing::info!(request_id = %request_id, show_id = id, "Fetching TV show details");

    let bundle = catalog::get_details(state.metadata.as_ref(), MediaKind::Tv, id).await?;
    Ok(Json(ShowDetails::from(bundle)))
}
