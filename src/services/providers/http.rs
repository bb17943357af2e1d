/// HTTP client for the recommendation backend
///
/// Endpoints:
/// 1. Recommendations: `POST /recommend` with `{"limit": n}`
/// 2. Search: `GET /movies/search?q=<text>&limit=<n>`
/// 3. Liveness: `GET /health`
///
/// Both catalog endpoints answer `{"results": [...]}`. Any non-2xx status is a
/// failure; nothing is retried.
use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder};
use tracing::Instrument;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{HealthResponse, Movie, MovieListResponse, RecommendRequest},
    services::providers::{
        request_id::{RequestId, REQUEST_ID_HEADER},
        MovieCatalog,
    },
};

const RECOMMEND_FAILED: &str = "Failed to fetch recommendations";
const SEARCH_FAILED: &str = "Failed to search movies";
const HEALTH_FAILED: &str = "Health check failed";
const HEALTH_PROBE: &str = "Health check";

#[derive(Clone, Debug)]
pub struct HttpCatalog {
    http_client: HttpClient,
    api_url: String,
    user_id: Option<String>,
}

impl HttpCatalog {
    /// Creates a catalog client with default HTTP settings
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: normalize_base_url(api_url.into()),
            user_id: None,
        }
    }

    /// Creates a catalog client from application configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            api_url: normalize_base_url(config.api_url.clone()),
            user_id: config.user_id.clone(),
        })
    }

    /// Forwards a user identifier with every recommendation request
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Search URL with the query percent-encoded
    pub fn search_url(&self, query: &str, limit: u32) -> String {
        format!(
            "{}?q={}&limit={}",
            self.endpoint("movies/search"),
            urlencoding::encode(query),
            limit
        )
    }

    /// Probes `GET /health`
    pub async fn health(&self) -> AppResult<()> {
        let request_id = RequestId::new();
        let request = tag(self.http_client.get(self.endpoint("health")), &request_id);
        self.probe_health(request)
            .instrument(request_id.span("health"))
            .await
    }

    /// Health probe bounded by `limit` regardless of the client timeout
    pub async fn health_within(&self, limit: Duration) -> AppResult<()> {
        tokio::time::timeout(limit, self.health())
            .await
            .map_err(|_| AppError::Timeout {
                operation: HEALTH_PROBE,
                millis: limit.as_millis() as u64,
            })?
    }

    async fn probe_health(&self, request: RequestBuilder) -> AppResult<()> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AppError::UnexpectedStatus {
                context: HEALTH_FAILED,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let health: HealthResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("health: {}", e)))?;
        tracing::debug!(status = %health.status, "Backend health checked");
        Ok(())
    }

    /// Sends a tagged request and decodes the shared result envelope
    async fn fetch_movies(
        &self,
        request: RequestBuilder,
        context: &'static str,
        operation: &'static str,
    ) -> AppResult<Vec<Movie>> {
        let request_id = RequestId::new();
        read_movies(tag(request, &request_id), context)
            .instrument(request_id.span(operation))
            .await
    }
}

async fn read_movies(request: RequestBuilder, context: &'static str) -> AppResult<Vec<Movie>> {
    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, body = %body, "Backend returned error status");
        return Err(AppError::UnexpectedStatus {
            context,
            status: status.as_u16(),
        });
    }

    let response_text = response.text().await?;
    let envelope: MovieListResponse = serde_json::from_str(&response_text).map_err(|e| {
        tracing::error!(
            error = %e,
            response = %response_text,
            "Failed to deserialize catalog response"
        );
        AppError::MalformedResponse(e.to_string())
    })?;

    tracing::info!(results = envelope.results.len(), "Catalog request completed");
    Ok(envelope.results)
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn tag(request: RequestBuilder, request_id: &RequestId) -> RequestBuilder {
    request.header(REQUEST_ID_HEADER, request_id.as_str())
}

#[async_trait::async_trait]
impl MovieCatalog for HttpCatalog {
    async fn fetch_recommendations(&self, limit: u32) -> AppResult<Vec<Movie>> {
        let body = RecommendRequest {
            user_id: self.user_id.clone(),
            ..RecommendRequest::new(limit)
        };
        let request = self.http_client.post(self.endpoint("recommend")).json(&body);
        self.fetch_movies(request, RECOMMEND_FAILED, "recommend").await
    }

    async fn search_movies(&self, query: &str, limit: u32) -> AppResult<Vec<Movie>> {
        let request = self.http_client.get(self.search_url(query, limit));
        self.fetch_movies(request, SEARCH_FAILED, "search").await
    }
}
