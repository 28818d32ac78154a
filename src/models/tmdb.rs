// ============================================================================
// TMDB API Types
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use super::recommendation::null_as_default;

/// Paged envelope used by listing, search and discover endpoints
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TmdbPage<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// `/videos` envelope
#[derive(Debug, Deserialize)]
pub struct TmdbVideoList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
}

/// `/credits` and `/aggregate_credits` envelope
#[derive(Debug, Deserialize)]
pub struct TmdbCredits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<Value>,
}

/// Error body TMDB returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct TmdbStatus {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_with_missing_metadata() {
        let page: TmdbPage<Value> = serde_json::from_value(json!({ "results": [{ "id": 1 }] })).unwrap();
        assert_eq!(page.page, None);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages, None);
    }

    #[test]
    fn test_page_with_null_results() {
        let page: TmdbPage<Value> = serde_json::from_value(json!({ "page": 2, "results": null })).unwrap();
        assert_eq!(page.page, Some(2));
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_status_body() {
        let status: TmdbStatus = serde_json::from_value(json!({
            "success": false,
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        }))
        .unwrap();
        assert_eq!(status.status_code, Some(7));
        assert!(status.status_message.unwrap().contains("Invalid API key"));
    }
}
