//! Pure Pexels REST API client.
//!
//! # Example
//!
//! ```rust,ignore
//! use pexels_client::{PexelsClient, SearchRequest};
//!
//! let client = PexelsClient::new("your-api-key");
//! let page = client.search(&SearchRequest::new("Porsche 911 GT3 car official")).await?;
//! println!("{} photos", page.photos.len());
//! ```

pub mod error;
pub mod types;

pub use error::{PexelsError, Result};
pub use types::{Orientation, Photo, PhotoSource, SearchRequest, SearchResponse, Size};

const BASE_URL: &str = "https://api.pexels.com/v1";

#[derive(Clone)]
pub struct PexelsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PexelsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search photos. The key goes in a bare `Authorization` header (no scheme).
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/search", self.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("query", request.query.clone()),
            ("per_page", request.per_page.to_string()),
            ("orientation", request.orientation.as_str().to_string()),
        ];
        if let Some(size) = request.size {
            params.push(("size", size.as_str().to_string()));
        }

        let resp = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), query = %request.query, "Pexels search failed");
            return Err(PexelsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: SearchResponse = resp.json().await?;
        tracing::debug!(
            query = %request.query,
            count = page.photos.len(),
            total = page.total_results,
            "Pexels search completed"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = PexelsClient::new("key").with_base_url("http://localhost:9001/v1/");

        assert_eq!(client.api_key, "key");
        assert_eq!(client.base_url(), "http://localhost:9001/v1");
    }

    #[test]
    fn test_default_request_is_large_landscape() {
        let request = SearchRequest::new("Nike logo store");

        assert_eq!(request.per_page, 25);
        assert_eq!(request.orientation, Orientation::Landscape);
        assert_eq!(request.size, Some(Size::Large));
    }

    #[test]
    fn test_parse_search_page() {
        let json = r#"{
            "page": 1,
            "per_page": 25,
            "total_results": 1,
            "photos": [
                {
                    "id": 2014422,
                    "photographer": "Joey Farina",
                    "photographer_url": "https://www.pexels.com/@joey",
                    "alt": "",
                    "src": {
                        "original": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg",
                        "large2x": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=650&w=940"
                    }
                }
            ]
        }"#;

        let page: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.photos.len(), 1);
        assert_eq!(page.photos[0].photographer, "Joey Farina");
        assert!(page.photos[0].src.large2x.starts_with("https://images.pexels.com/"));
    }

    #[test]
    fn test_empty_page() {
        let page: SearchResponse =
            serde_json::from_str(r#"{"page":1,"per_page":25,"total_results":0,"photos":[]}"#).unwrap();
        assert!(page.photos.is_empty());
    }
}
