use serde::{Deserialize, Serialize};

/// Orientation filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

/// Parameters for `GET /search/photos`.
#[derive(Debug, Clone)]
pub struct SearchPhotosRequest {
    pub query: String,
    pub per_page: u32,
    pub orientation: Orientation,
}

impl SearchPhotosRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: 30,
            orientation: Orientation::Landscape,
        }
    }

    /// Unsplash caps a page at 30 results.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, 30);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPhotosResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub results: Vec<Photo>,
}

/// A photo record from the search endpoint. Only the fields we use are mapped.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub raw: Option<String>,
    pub full: Option<String>,
    pub regular: String,
    pub small: Option<String>,
    pub thumb: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: String,
    pub username: Option<String>,
}
