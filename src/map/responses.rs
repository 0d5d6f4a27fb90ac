use crate::app_context::PanoramaView;
use crate::map::models::{BoundingBox, LatLng};
use serde::{Deserialize, Serialize};

/// Everything the client needs to draw the guessing map and the panorama.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfigResponse {
    pub center: LatLng,
    pub zoom: u8,
    pub boundary: Vec<LatLng>,
    pub bounding_box: BoundingBox,
    pub round_duration_secs: u64,
    pub panorama: PanoramaView,
    pub show_spawn_coordinates: bool,
}
