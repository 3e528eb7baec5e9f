use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

/// Minimum photo size filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// 24MP
    #[default]
    Large,
    /// 12MP
    Medium,
    /// 4MP
    Small,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Large => "large",
            Size::Medium => "medium",
            Size::Small => "small",
        }
    }
}

/// Parameters for `GET /v1/search`.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: u32,
    pub orientation: Orientation,
    pub size: Option<Size>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: 25,
            orientation: Orientation::Landscape,
            size: Some(Size::Large),
        }
    }

    /// Pexels caps a page at 80 results.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, 80);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn size(mut self, size: Option<Size>) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub photographer: String,
    pub photographer_url: Option<String>,
    /// Pexels returns an empty string rather than null when there is no alt text.
    #[serde(default)]
    pub alt: Option<String>,
    pub src: PhotoSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSource {
    pub original: Option<String>,
    pub large2x: String,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub landscape: Option<String>,
}
