use crate::map::models::{BoundingBox, LatLng};

pub const EARTH_RADIUS: f64 = 6371e3;
pub const MAX_SCORE: f64 = 5000.0;
/// How fast the score decays with distance, in units of `REFERENCE_DISTANCE`.
pub const SCORE_DECAY_RATE: f64 = 10.0;

/// Two fixed corners of the play area. The distance between them is the characteristic scale
/// scores are measured against.
pub const REFERENCE_CORNERS: (LatLng, LatLng) = (
    LatLng::new(33.64141191981308, -117.84915619540708),
    LatLng::new(33.65480941557804, -117.83530280301413),
);

pub const CAMPUS_CENTER: LatLng = LatLng::new(33.646, -117.841);
pub const CAMPUS_ZOOM: u8 = 15;

pub const CAMPUS_BOUNDING_BOX: BoundingBox = BoundingBox {
    min_lat: 33.640,
    max_lat: 33.660,
    min_lng: -117.855,
    max_lng: -117.825,
};

/// Outline of the main UC Irvine campus, clockwise from the north-west corner.
pub const CAMPUS_BOUNDARY: [LatLng; 9] = [
    LatLng::new(33.6560, -117.8460),
    LatLng::new(33.6535, -117.8365),
    LatLng::new(33.6500, -117.8330),
    LatLng::new(33.6440, -117.8320),
    LatLng::new(33.6410, -117.8365),
    LatLng::new(33.6415, -117.8430),
    LatLng::new(33.6430, -117.8490),
    LatLng::new(33.6470, -117.8520),
    LatLng::new(33.6520, -117.8510),
];

pub const MAX_SAMPLE_ATTEMPTS: u32 = 80;

/// Initial panorama camera, in degrees.
pub const PANORAMA_HEADING: f64 = 34.0;
pub const PANORAMA_PITCH: f64 = 10.0;
