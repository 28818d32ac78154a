use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MoodMatch, MoodMatchRequest, MoodQuery},
    routes::AppState,
};

/// Handler for `POST /api/mood-match`
pub async fn mood_match(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<MoodMatchRequest>, JsonRejection>,
) -> AppResult<Json<MoodMatch>> {
    let invalid = || AppError::InvalidInput("Please provide a mood description".to_string());

    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(request_id = %request_id, error = %rejection, "Unreadable mood-match body");
        invalid()
    })?;
    let query = MoodQuery::parse(request.mood.as_deref().unwrap_or_default())?;

    tracing::info!(
        request_id = %request_id,
        mood_len = query.as_str().len(),
        strategy = state.recommender.name(),
        "Processing mood match request"
    );

    let result = state.recommender.recommend(&query).await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Mood match failed");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        movies = result.movies.len(),
        "Mood match completed"
    );

    Ok(Json(result))
}
