use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ListingCategory, MediaKind, MovieDetails},
    routes::{parse_id, parse_page, AppState},
    services::catalog,
};

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub page: Option<String>,
}

/// Handler for `GET /api/movies`
///
/// With `type`, one page of that listing. Without it, the home page feed.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ListingQuery>,
) -> AppResult<Response> {
    let Some(listing_type) = params.listing_type.as_deref() else {
        tracing::info!(request_id = %request_id, "Fetching movie highlights");
        let highlights = catalog::get_movie_highlights(state.metadata.as_ref()).await?;
        return Ok(Json(highlights).into_response());
    };

    let category = ListingCategory::parse(MediaKind::Movie, listing_type);
    let page = parse_page(params.page.as_deref())?;

    tracing::info!(
        request_id = %request_id,
        category = category.path_segment(),
        page = page,
        "Fetching movie listing"
    );

    let listing =
        catalog::get_listing(state.metadata.as_ref(), MediaKind::Movie, category, page).await?;
    Ok(Json(listing).into_response())
}

/// Handler for `GET /api/movie/:id`
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieDetails>> {
    let id = parse_id(&id)?;

    tracing::info!(request_id = %request_id, movie_id = id, "Fetching movie details");

    let bundle = catalog::get_details(state.metadata.as_ref(), MediaKind::Movie, id).await?;
    Ok(Json(MovieDetails::from(bundle)))
}
