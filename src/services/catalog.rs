use crate::{
    error::{AppError, AppResult},
    models::{DetailBundle, ListingCategory, MediaKind, MovieHighlights, Paginated},
    services::providers::MetadataProvider,
};

/// Cast entries shown on a detail page
pub const MAX_CAST: usize = 10;

/// One page of a curated listing
pub async fn get_listing(
    metadata: &dyn MetadataProvider,
    kind: MediaKind,
    category: ListingCategory,
    page: u32,
) -> AppResult<Paginated> {
    metadata.list(kind, category, page).await
}

/// Now-playing and top-rated first pages, fetched together for the home page
pub async fn get_movie_highlights(metadata: &dyn MetadataProvider) -> AppResult<MovieHighlights> {
    metadata.ensure_configured()?;

    let (now_playing, top_rated) = tokio::join!(
        metadata.list(MediaKind::Movie, ListingCategory::NowPlaying, 1),
        metadata.list(MediaKind::Movie, ListingCategory::TopRated, 1),
    );

    Ok(MovieHighlights {
        now_playing: now_playing?.results,
        top_rated: top_rated?.results,
    })
}

/// Movie title search
pub async fn search_movies(
    metadata: &dyn MetadataProvider,
    query: &str,
    page: u32,
) -> AppResult<Paginated> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query is required".to_string(),
        ));
    }

    metadata.search_movies(query, page).await
}

/// Detail, videos and cast fetched concurrently.
///
/// The detail document is required. Videos and cast are decoration: if either call
/// fails the page still renders, with that section empty.
pub async fn get_details(
    metadata: &dyn MetadataProvider,
    kind: MediaKind,
    id: u64,
) -> AppResult<DetailBundle> {
    metadata.ensure_configured()?;

    let (detail, videos, cast) = tokio::join!(
        metadata.details(kind, id),
        metadata.videos(kind, id),
        metadata.cast(kind, id),
    );

    let detail = detail?;

    let videos = videos.unwrap_or_else(|e| {
        tracing::warn!(error = %e, kind = kind.path_segment(), id = id, "Videos unavailable");
        Vec::new()
    });

    let mut cast = cast.unwrap_or_else(|e| {
        tracing::warn!(error = %e, kind = kind.path_segment(), id = id, "Credits unavailable");
        Vec::new()
    });
    cast.truncate(MAX_CAST);

    tracing::info!(
        kind = kind.path_segment(),
        id = id,
        videos = videos.len(),
        cast = cast.len(),
        "Details fetched"
    );

    Ok(DetailBundle {
        detail,
        videos,
        cast,
    })
}
