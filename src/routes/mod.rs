use axum::{
    http::{Method, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{Config, RecommendationMode},
    error::{AppError, AppResult},
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{
        providers::{MetadataProvider, OpenAiCompatibleProvider, TmdbProvider},
        recommendations::{GenerativeRecommender, HeuristicRecommender, MoodRecommender},
    },
};

pub mod mood;
pub mod movies;
pub mod search;
pub mod tv;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<dyn MetadataProvider>,
    pub recommender: Arc<dyn MoodRecommender>,
}

impl AppState {
    pub fn new(metadata: Arc<dyn MetadataProvider>, recommender: Arc<dyn MoodRecommender>) -> Self {
        Self {
            metadata,
            recommender,
        }
    }

    /// Wires the real providers from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        let metadata: Arc<dyn MetadataProvider> = Arc::new(TmdbProvider::new(
            http_client.clone(),
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
        ));

        let recommender: Arc<dyn MoodRecommender> = match config.recommendation_mode {
            RecommendationMode::Heuristic => Arc::new(HeuristicRecommender::new(
                Arc::clone(&metadata),
                config.max_recommendations,
            )),
            RecommendationMode::Generative => Arc::new(GenerativeRecommender::new(
                Arc::new(OpenAiCompatibleProvider::new(
                    http_client,
                    config.llm_api_key.clone(),
                    config.llm_api_url.clone(),
                    config.llm_model.clone(),
                )),
                Arc::clone(&metadata),
                config.max_recommendations,
            )),
        };

        tracing::info!(
            metadata_provider = metadata.name(),
            strategy = recommender.name(),
            tmdb_configured = config.tmdb_api_key.is_some(),
            "Application state initialized"
        );

        Ok(Self::new(metadata, recommender))
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(cors),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mood-match", post(mood::mood_match))
        .route("/movies", get(movies::list_movies))
        .route("/movie/:id", get(movies::movie_details))
        .route("/tv", get(tv::list_shows))
        .route("/tv/:id", get(tv::show_details))
        .route("/search", get(search::search))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// `page` query parameter: absent means 1, otherwise a positive integer
pub(crate) fn parse_page(page: Option<&str>) -> AppResult<u32> {
    match page.map(str::trim) {
        None | Some("") => Ok(1),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid page: {}", raw))),
    }
}

/// `:id` path segment: a positive integer
pub(crate) fn parse_id(raw: &str) -> AppResult<u64> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid id: {}", raw)))
}
