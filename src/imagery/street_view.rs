use crate::imagery::{ImageryError, ImageryLookup, ImageryService};
use crate::map::models::LatLng;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const STREET_VIEW_METADATA_URL: &str = "https://maps.googleapis.com/maps/api/streetview/metadata";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Street View Static API metadata lookup. Metadata requests are free of charge and don't return
/// an image, only whether a panorama exists and where it was taken.
#[derive(Debug, Clone)]
pub struct StreetViewMetadataClient {
    http_client: Client,
    endpoint: Url,
    api_key: String,
}

impl StreetViewMetadataClient {
    pub fn new(api_key: String) -> Self {
        let endpoint =
            Url::parse(STREET_VIEW_METADATA_URL).expect("Street View metadata URL is valid.");
        Self::with_endpoint(endpoint, api_key)
    }

    pub fn with_endpoint(endpoint: Url, api_key: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MetadataResponse {
    pub status: String,
    pub location: Option<LatLng>,
}

impl From<MetadataResponse> for ImageryLookup {
    fn from(response: MetadataResponse) -> Self {
        match (response.status.as_str(), response.location) {
            ("OK", Some(location)) => ImageryLookup::Found { location },
            _ => ImageryLookup::NotFound,
        }
    }
}

#[async_trait]
impl ImageryService for StreetViewMetadataClient {
    async fn check_imagery(
        &self,
        point: LatLng,
        radius_meters: u32,
    ) -> Result<ImageryLookup, ImageryError> {
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&[
                ("location", format!("{},{}", point.lat, point.lng)),
                ("radius", radius_meters.to_string()),
                ("source", String::from("outdoor")),
                ("key", self.api_key.clone()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<MetadataResponse>()
            .await?;
        Ok(response.into())
    }
}
