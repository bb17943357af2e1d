/// Movie catalog abstraction
///
/// The controller never talks to the network directly. It is handed a
/// `MovieCatalog`, which in production is the HTTP client for the
/// recommendation backend and in tests is a scripted fake or a mock.
use crate::{error::AppResult, models::Movie};

pub mod http;
pub mod request_id;

pub use http::HttpCatalog;

/// Trait for movie data sources
///
/// Both operations issue exactly one request and never retry. An empty list
/// is a successful result.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch up to `limit` personalized recommendations
    async fn fetch_recommendations(&self, limit: u32) -> AppResult<Vec<Movie>>;

    /// Search movies by free text, returning up to `limit` matches
    async fn search_movies(&self, query: &str, limit: u32) -> AppResult<Vec<Movie>>;
}
