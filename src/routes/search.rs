use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::Paginated,
    routes::{parse_page, AppState},
    services::catalog,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    query: String,
    page: Option<String>,
}

/// Handler for `GET /api/search`
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Paginated>> {
    let page = parse_page(params.page.as_deref())?;

    tracing::info!(
        request_id = %request_id,
        query = %params.query,
        page = page,
        "Searching movies"
    );

    let results = catalog::search_movies(state.metadata.as_ref(), &params.query, page).await?;
    Ok(Json(results))
}
