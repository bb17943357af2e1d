use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::Movie;

// ============================================================================
// Recommendation backend wire types
// ============================================================================

/// Body of `POST /recommend`
///
/// Mirrors the backend's request model field for field. Only `limit` and
/// `user_id` are sent by this client; `liked_movie_ids` is accepted by the
/// backend but no view operation fills it, so it is always omitted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendRequest {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_movie_ids: Option<Vec<String>>,
}

impl RecommendRequest {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            user_id: None,
            liked_movie_ids: None,
        }
    }
}

/// Success body shared by `/recommend` and `/movies/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieListResponse {
    pub results: Vec<Movie>,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_omits_absent_fields() {
        let json = serde_json::to_string(&RecommendRequest::new(12)).unwrap();
        assert_eq!(json, r#"{"limit":12}"#);
    }

    #[test]
    fn test_recommend_request_with_user() {
        let request = RecommendRequest {
            user_id: Some("u-1".to_string()),
            ..RecommendRequest::new(5)
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["limit"], 5);
        assert_eq!(json["user_id"], "u-1");
        assert!(json.get("liked_movie_ids").is_none());
    }

    #[test]
    fn test_movie_list_preserves_order() {
        let json = r#"{ "results": [
            { "id": "2", "title": "B" },
            { "id": "1", "title": "A" }
        ] }"#;

        let response: MovieListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = response.results.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_empty_results() {
        let response: MovieListResponse = serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert!(response.results.is_empty());
    }
}
