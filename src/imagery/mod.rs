use crate::imagery::env::STREET_VIEW_API_KEY;
use crate::imagery::offline::OfflineImagery;
use crate::imagery::street_view::StreetViewMetadataClient;
use crate::map::models::LatLng;
use crate::warn_if_env_var_is_missing;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub mod env;
pub mod offline;
pub mod street_view;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ImageryLookup {
    /// A panorama exists. `location` is where it was taken, which may differ from the query.
    Found { location: LatLng },
    NotFound,
}

#[derive(Debug, Error)]
pub enum ImageryError {
    #[error("imagery metadata request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Answers whether street-level imagery exists near a point.
#[async_trait]
pub trait ImageryService: Send + Sync {
    async fn check_imagery(
        &self,
        point: LatLng,
        radius_meters: u32,
    ) -> Result<ImageryLookup, ImageryError>;
}

/// Single-shot imagery check with a fixed search radius. Every failure is reported as "no
/// imagery"; retrying is up to the caller.
#[derive(Clone)]
pub struct LocationValidator {
    service: Arc<dyn ImageryService>,
    radius_meters: u32,
}

impl LocationValidator {
    pub fn new(service: Arc<dyn ImageryService>, radius_meters: u32) -> Self {
        Self {
            service,
            radius_meters,
        }
    }

    pub async fn validate(&self, point: LatLng) -> Option<LatLng> {
        match self.service.check_imagery(point, self.radius_meters).await {
            Ok(ImageryLookup::Found { location }) => Some(location),
            Ok(ImageryLookup::NotFound) => {
                tracing::debug!(lat = point.lat, lng = point.lng, "No imagery near candidate.");
                None
            }
            Err(err) => {
                tracing::debug!(
                    lat = point.lat,
                    lng = point.lng,
                    error = %err,
                    "Imagery check failed, treating candidate as unusable."
                );
                None
            }
        }
    }
}

pub fn init() -> Arc<dyn ImageryService> {
    warn_if_env_var_is_missing!(
        STREET_VIEW_API_KEY,
        "Spawn points won't be checked for Street View coverage."
    );
    match std::env::var(STREET_VIEW_API_KEY) {
        Ok(api_key) => Arc::new(StreetViewMetadataClient::new(api_key)),
        Err(_) => Arc::new(OfflineImagery),
    }
}
