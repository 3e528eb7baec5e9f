//! Pure Unsplash REST API client.
//!
//! A minimal client for the Unsplash photo search API. No game logic lives
//! here; callers normalize results into their own types.
//!
//! # Example
//!
//! ```rust,ignore
//! use unsplash_client::{SearchPhotosRequest, UnsplashClient};
//!
//! let client = UnsplashClient::new("your-access-key");
//!
//! let page = client
//!     .search_photos(&SearchPhotosRequest::new("Tom Cruise actor portrait recent"))
//!     .await?;
//! for photo in &page.results {
//!     println!("{} by {}", photo.urls.regular, photo.user.name);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, UnsplashError};
pub use types::{Orientation, Photo, PhotoUrls, SearchPhotosRequest, SearchPhotosResponse, User};

const BASE_URL: &str = "https://api.unsplash.com";

#[derive(Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_key: access_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a proxy or a local stand-in.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reuse an existing `reqwest::Client` (shared pools, custom timeouts).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search photos. Returns one page of results in Unsplash's relevance order.
    pub async fn search_photos(&self, request: &SearchPhotosRequest) -> Result<SearchPhotosResponse> {
        let url = format!("{}/search/photos", self.base_url);
        let per_page = request.per_page.to_string();

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .query(&[
                ("query", request.query.as_str()),
                ("per_page", per_page.as_str()),
                ("orientation", request.orientation.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), query = %request.query, "Unsplash search failed");
            return Err(UnsplashError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: SearchPhotosResponse = resp.json().await?;
        tracing::debug!(
            query = %request.query,
            count = page.results.len(),
            total = page.total,
            "Unsplash search completed"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 2,
        "total_pages": 1,
        "results": [
            {
                "id": "abc",
                "description": "Tom Cruise at a premiere",
                "alt_description": null,
                "urls": { "regular": "https://images.unsplash.com/photo-1?ixid=1", "small": "https://images.unsplash.com/photo-1?w=400" },
                "user": { "name": "Jane Doe", "username": "jdoe" }
            },
            {
                "id": "def",
                "description": null,
                "alt_description": "red carpet crowd",
                "urls": { "regular": "https://images.unsplash.com/photo-2?ixid=2" },
                "user": { "name": "John Roe" }
            }
        ]
    }"#;

    #[test]
    fn test_client_builder() {
        let client = UnsplashClient::new("key").with_base_url("http://localhost:9000/");

        assert_eq!(client.access_key, "key");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_parse_search_page() {
        let page: SearchPhotosResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].user.name, "Jane Doe");
        assert_eq!(page.results[1].urls.regular, "https://images.unsplash.com/photo-2?ixid=2");
        assert!(page.results[1].description.is_none());
    }

    #[test]
    fn test_missing_results_is_empty_page() {
        let page: SearchPhotosResponse = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_per_page_is_capped() {
        let request = SearchPhotosRequest::new("q").per_page(100);
        assert_eq!(request.per_page, 30);
    }

    #[test]
    fn test_rate_limit_detection() {
        let err = UnsplashError::Api { status: 403, message: "Rate Limit Exceeded".into() };
        assert!(err.is_rate_limited());

        let err = UnsplashError::Api { status: 401, message: "OAuth error".into() };
        assert!(!err.is_rate_limited());
    }
}
