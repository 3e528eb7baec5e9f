use async_trait::async_trait;
use pexels_client::{Orientation, PexelsClient, Photo, SearchRequest, Size};

use crate::error::ProviderResult;
use crate::traits::{ImageProvider, PhotoQuery, ProviderPhoto};

use super::with_crop_params;

pub(crate) const NAME: &str = "pexels";

/// Pexels-backed image provider.
pub struct PexelsProvider {
    client: PexelsClient,
}

impl PexelsProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_client(PexelsClient::new(api_key))
    }

    pub fn from_client(client: PexelsClient) -> Self {
        Self { client }
    }
}

fn normalize(photo: Photo) -> ProviderPhoto {
    ProviderPhoto {
        url: with_crop_params(&photo.src.large2x),
        photographer: photo.photographer,
        description: None,
        alt_description: photo.alt.filter(|alt| !alt.is_empty()),
    }
}

#[async_trait]
impl ImageProvider for PexelsProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn search(&self, query: &PhotoQuery) -> ProviderResult<Vec<ProviderPhoto>> {
        let request = SearchRequest::new(query.query.clone())
            .per_page(query.per_page)
            .orientation(Orientation::Landscape)
            .size(query.large.then_some(Size::Large));

        let page = self.client.search(&request).await?;
        Ok(page.photos.into_iter().map(normalize).collect())
    }
}
