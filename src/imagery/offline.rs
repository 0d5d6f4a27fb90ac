use crate::imagery::{ImageryError, ImageryLookup, ImageryService};
use crate::map::models::LatLng;
use async_trait::async_trait;

/// Pretends imagery exists exactly at every queried point. Used when no Street View key is
/// configured, e.g. for local development.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineImagery;

#[async_trait]
impl ImageryService for OfflineImagery {
    async fn check_imagery(
        &self,
        point: LatLng,
        _radius_meters: u32,
    ) -> Result<ImageryLookup, ImageryError> {
        Ok(ImageryLookup::Found { location: point })
    }
}
