use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{BoundingRect, Centroid, Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn as_coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BoundaryError {
    #[error("a boundary needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// Closed polygon delimiting where rounds may spawn. The last vertex connects back to the first.
#[derive(Clone, Debug)]
pub struct Boundary {
    vertices: Vec<LatLng>,
    polygon: Polygon<f64>,
}

impl Boundary {
    pub fn new(vertices: Vec<LatLng>) -> Result<Self, BoundaryError> {
        if vertices.len() < 3 {
            return Err(BoundaryError::TooFewVertices(vertices.len()));
        }
        let exterior = vertices
            .iter()
            .map(LatLng::as_coord)
            .collect::<LineString<f64>>();
        let polygon = Polygon::new(exterior, vec![]);
        Ok(Self { vertices, polygon })
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    /// Points lying exactly on an edge count as inside.
    pub fn contains(&self, point: LatLng) -> bool {
        self.polygon.coordinate_position(&point.as_coord()) != CoordPos::Outside
    }

    pub fn centroid(&self) -> Option<LatLng> {
        self.polygon
            .centroid()
            .map(|point| LatLng::new(point.y(), point.x()))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        // A polygon built from at least 3 vertices always has a bounding rectangle.
        match self.polygon.bounding_rect() {
            Some(rect) => BoundingBox {
                min_lat: rect.min().y,
                max_lat: rect.max().y,
                min_lng: rect.min().x,
                max_lng: rect.max().x,
            },
            None => BoundingBox::around(self.vertices[0]),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn around(point: LatLng) -> Self {
        Self {
            min_lat: point.lat,
            max_lat: point.lat,
            min_lng: point.lng,
            max_lng: point.lng,
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub fn includes(&self, point: LatLng) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::consts::{CAMPUS_BOUNDARY, CAMPUS_BOUNDING_BOX, CAMPUS_CENTER};

    fn campus() -> Boundary {
        Boundary::new(CAMPUS_BOUNDARY.to_vec()).unwrap()
    }

    #[test]
    fn boundary_needs_three_vertices() {
        let result = Boundary::new(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]);
        assert_eq!(result.unwrap_err(), BoundaryError::TooFewVertices(2));
    }

    #[test]
    fn points_inside_the_campus_are_contained() {
        let boundary = campus();
        assert!(boundary.contains(CAMPUS_CENTER));
        assert!(boundary.contains(LatLng::new(33.6500, -117.8450)));
        assert!(boundary.contains(LatLng::new(33.6450, -117.8370)));
    }

    #[test]
    fn points_in_the_box_but_off_campus_are_rejected() {
        let boundary = campus();
        for point in [
            LatLng::new(33.6590, -117.8260),
            LatLng::new(33.6405, -117.8540),
            LatLng::new(33.6595, -117.8545),
            LatLng::new(33.6405, -117.8260),
        ] {
            assert!(CAMPUS_BOUNDING_BOX.includes(point));
            assert!(!boundary.contains(point), "{point:?} should be off campus");
        }
    }

    #[test]
    fn non_convex_notch_is_outside() {
        // An L-shaped boundary: the missing upper-right quadrant is inside the box only.
        let boundary = Boundary::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 2.0),
            LatLng::new(1.0, 2.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(2.0, 1.0),
            LatLng::new(2.0, 0.0),
        ])
        .unwrap();
        assert!(boundary.contains(LatLng::new(0.5, 1.5)));
        assert!(boundary.contains(LatLng::new(1.5, 0.5)));
        assert!(!boundary.contains(LatLng::new(1.5, 1.5)));
        assert!(boundary.bounding_box().includes(LatLng::new(1.5, 1.5)));
    }

    #[test]
    fn campus_boundary_fits_in_the_campus_box() {
        let derived = campus().bounding_box();
        assert!(CAMPUS_BOUNDING_BOX.includes(LatLng::new(derived.min_lat, derived.min_lng)));
        assert!(CAMPUS_BOUNDING_BOX.includes(LatLng::new(derived.max_lat, derived.max_lng)));
    }
}
