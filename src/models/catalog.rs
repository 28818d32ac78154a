use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Movie or TV, the two catalogs the provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the provider (`movie/...`, `tv/...`)
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Credits endpoint; TV uses aggregate credits so long-running casts are complete
    pub fn credits_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "credits",
            MediaKind::Tv => "aggregate_credits",
        }
    }
}

/// Curated listings offered by the browse pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingCategory {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
    OnTheAir,
    AiringToday,
}

impl ListingCategory {
    /// Parses the `type` query parameter. Unknown values, or values that belong to the
    /// other media kind, fall back to `Popular`.
    pub fn parse(kind: MediaKind, value: &str) -> Self {
        match (kind, value) {
            (_, "top_rated") => ListingCategory::TopRated,
            (MediaKind::Movie, "upcoming") => ListingCategory::Upcoming,
            (MediaKind::Movie, "now_playing") => ListingCategory::NowPlaying,
            (MediaKind::Tv, "on_the_air") => ListingCategory::OnTheAir,
            (MediaKind::Tv, "airing_today") => ListingCategory::AiringToday,
            _ => ListingCategory::Popular,
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            ListingCategory::Popular => "popular",
            ListingCategory::TopRated => "top_rated",
            ListingCategory::Upcoming => "upcoming",
            ListingCategory::NowPlaying => "now_playing",
            ListingCategory::OnTheAir => "on_the_air",
            ListingCategory::AiringToday => "airing_today",
        }
    }
}

/// One page of a listing or search, results passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated {
    pub results: Vec<Value>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total_results: u64,
}

/// Home page feed: `GET /api/movies` without a `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieHighlights {
    pub now_playing: Vec<Value>,
    pub top_rated: Vec<Value>,
}

/// Cast entry; fields the UI does not read are kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trailer, teaser or clip attached to a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub video_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Detail page payload aggregated from three provider calls
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBundle {
    pub detail: Value,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    pub movie: Value,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowDetails {
    pub show: Value,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
}

impl From<DetailBundle> for MovieDetails {
    fn from(bundle: DetailBundle) -> Self {
        Self {
            movie: bundle.detail,
            videos: bundle.videos,
            cast: bundle.cast,
        }
    }
}

impl From<DetailBundle> for ShowDetails {
    fn from(bundle: DetailBundle) -> Self {
        Self {
            show: bundle.detail,
            videos: bundle.videos,
            cast: bundle.cast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_category_for_movies() {
        assert_eq!(
            ListingCategory::parse(MediaKind::Movie, "now_playing"),
            ListingCategory::NowPlaying
        );
        assert_eq!(
            ListingCategory::parse(MediaKind::Movie, "upcoming").path_segment(),
            "upcoming"
        );
    }

    #[test]
    fn test_listing_category_rejects_other_kind() {
        // airing_today is a TV listing
        assert_eq!(
            ListingCategory::parse(MediaKind::Movie, "airing_today"),
            ListingCategory::Popular
        );
        assert_eq!(
            ListingCategory::parse(MediaKind::Tv, "upcoming"),
            ListingCategory::Popular
        );
        assert_eq!(
            ListingCategory::parse(MediaKind::Tv, "on_the_air"),
            ListingCategory::OnTheAir
        );
    }

    #[test]
    fn test_unknown_listing_falls_back_to_popular() {
        assert_eq!(
            ListingCategory::parse(MediaKind::Tv, "bogus"),
            ListingCategory::Popular
        );
    }

    #[test]
    fn test_cast_member_keeps_unknown_fields() {
        let member: CastMember = serde_json::from_value(json!({
            "id": 287,
            "name": "Brad Pitt",
            "character": "Tyler Durden",
            "order": 1
        }))
        .unwrap();

        assert_eq!(member.name, "Brad Pitt");
        let back = serde_json::to_value(&member).unwrap();
        assert_eq!(back["character"], "Tyler Durden");
        assert_eq!(back["order"], 1);
    }

    #[test]
    fn test_show_details_wire_shape() {
        let details = ShowDetails::from(DetailBundle {
            detail: json!({ "id": 1396, "name": "Breaking Bad" }),
            videos: vec![],
            cast: vec![],
        });

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["show"]["name"], "Breaking Bad");
        assert!(value["videos"].as_array().unwrap().is_empty());
    }
}
