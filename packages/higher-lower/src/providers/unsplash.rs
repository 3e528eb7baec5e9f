use async_trait::async_trait;
use unsplash_client::{Orientation, Photo, SearchPhotosRequest, UnsplashClient};

use crate::error::ProviderResult;
use crate::traits::{ImageProvider, PhotoQuery, ProviderPhoto};

use super::with_crop_params;

pub(crate) const NAME: &str = "unsplash";

/// Unsplash-backed image provider.
pub struct UnsplashProvider {
    client: UnsplashClient,
}

impl UnsplashProvider {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self::from_client(UnsplashClient::new(access_key))
    }

    pub fn from_client(client: UnsplashClient) -> Self {
        Self { client }
    }
}

fn normalize(photo: Photo) -> ProviderPhoto {
    ProviderPhoto {
        url: with_crop_params(&photo.urls.regular),
        photographer: photo.user.name,
        description: photo.description,
        alt_description: photo.alt_description,
    }
}

#[async_trait]
impl ImageProvider for UnsplashProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn search(&self, query: &PhotoQuery) -> ProviderResult<Vec<ProviderPhoto>> {
        // Unsplash has no size filter; `large` is ignored.
        let request = SearchPhotosRequest::new(query.query.clone())
            .per_page(query.per_page)
            .orientation(Orientation::Landscape);

        let page = self.client.search_photos(&request).await?;
        Ok(page.results.into_iter().map(normalize).collect())
    }
}
