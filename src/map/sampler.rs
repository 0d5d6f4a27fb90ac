use crate::map::models::{Boundary, BoundingBox, LatLng};
use rand::Rng;

/// Result of one rejection-sampling run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub point: LatLng,
    /// Number of draws made, at most the sampler's budget.
    pub draws: u32,
    /// `true` when every draw landed outside the boundary.
    pub exhausted: bool,
}

/// Draws uniformly distributed points inside a boundary by sampling its bounding box and
/// rejecting candidates that fall outside the polygon.
#[derive(Clone, Debug)]
pub struct GeoSampler {
    boundary: Boundary,
    bounding_box: BoundingBox,
    max_draws: u32,
    fallback: LatLng,
}

impl GeoSampler {
    pub fn new(boundary: Boundary, bounding_box: BoundingBox, max_draws: u32) -> Self {
        let fallback = boundary
            .centroid()
            .unwrap_or_else(|| bounding_box.center());
        Self {
            boundary,
            bounding_box,
            max_draws,
            fallback,
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn fallback(&self) -> LatLng {
        self.fallback
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        for draw in 1..=self.max_draws {
            let candidate = self.random_point_in_box(rng);
            if self.boundary.contains(candidate) {
                return Sample {
                    point: candidate,
                    draws: draw,
                    exhausted: false,
                };
            }
        }
        Sample {
            point: self.fallback,
            draws: self.max_draws,
            exhausted: true,
        }
    }

    fn random_point_in_box<R: Rng + ?Sized>(&self, rng: &mut R) -> LatLng {
        let BoundingBox {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        } = self.bounding_box;
        // `gen_range` panics on empty ranges, so a box collapsed to a line or a point is sampled
        // on its degenerate axis directly.
        let lat = if min_lat < max_lat {
            rng.gen_range(min_lat..max_lat)
        } else {
            min_lat
        };
        let lng = if min_lng < max_lng {
            rng.gen_range(min_lng..max_lng)
        } else {
            min_lng
        };
        LatLng::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::consts::{CAMPUS_BOUNDARY, CAMPUS_BOUNDING_BOX, MAX_SAMPLE_ATTEMPTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn campus_sampler() -> GeoSampler {
        let boundary = Boundary::new(CAMPUS_BOUNDARY.to_vec()).expect("Campus boundary is valid.");
        GeoSampler::new(boundary, CAMPUS_BOUNDING_BOX, MAX_SAMPLE_ATTEMPTS)
    }

    #[test]
    fn boundary_equal_to_its_box_accepts_the_first_draw() {
        let boundary = Boundary::new(vec![
            LatLng::new(10.0, 20.0),
            LatLng::new(10.0, 21.0),
            LatLng::new(11.0, 21.0),
            LatLng::new(11.0, 20.0),
        ])
        .unwrap();
        let bounding_box = boundary.bounding_box();
        let sampler = GeoSampler::new(boundary, bounding_box, MAX_SAMPLE_ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let sample = sampler.sample(&mut rng);
            assert_eq!(sample.draws, 1);
            assert!(!sample.exhausted);
        }
    }

    #[test]
    fn degenerate_boundary_exhausts_draws_and_falls_back() {
        // Collinear vertices enclose no area, so no random draw can ever be accepted.
        let boundary = Boundary::new(vec![
            LatLng::new(33.640, -117.855),
            LatLng::new(33.650, -117.840),
            LatLng::new(33.660, -117.825),
        ])
        .unwrap();
        let sampler = GeoSampler::new(boundary, CAMPUS_BOUNDING_BOX, MAX_SAMPLE_ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(42);

        let sample = sampler.sample(&mut rng);

        assert!(sample.exhausted);
        assert_eq!(sample.draws, MAX_SAMPLE_ATTEMPTS);
        assert_eq!(sample.point, sampler.fallback());
    }

    #[test]
    fn campus_samples_stay_inside_the_boundary() {
        let sampler = campus_sampler();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let sample = sampler.sample(&mut rng);
            if !sample.exhausted {
                assert!(sampler.boundary().contains(sample.point));
                assert!(CAMPUS_BOUNDING_BOX.includes(sample.point));
            }
        }
    }

    #[test]
    fn campus_fallback_is_inside_the_campus() {
        let sampler = campus_sampler();
        assert!(sampler.boundary().contains(sampler.fallback()));
    }
}
