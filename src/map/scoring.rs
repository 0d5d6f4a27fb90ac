use crate::map::consts::{EARTH_RADIUS, MAX_SCORE, REFERENCE_CORNERS, SCORE_DECAY_RATE};
use crate::map::models::LatLng;
use std::sync::LazyLock;

static REFERENCE_DISTANCE: LazyLock<f64> =
    LazyLock::new(|| distance_meters(REFERENCE_CORNERS.0, REFERENCE_CORNERS.1));

/// Haversine distance in meters.
pub fn distance_meters(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS * c
}

pub fn reference_distance() -> f64 {
    *REFERENCE_DISTANCE
}

pub fn score_for_distance(distance: f64) -> u64 {
    (MAX_SCORE * (-SCORE_DECAY_RATE * distance / reference_distance()).exp()).round() as u64
}

pub fn estimate_guess(guess: LatLng, target: LatLng) -> u64 {
    score_for_distance(distance_meters(guess, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUTH: LatLng = LatLng::new(33.646, -117.841);

    #[test]
    fn exact_guess_gets_max_score() {
        assert_eq!(estimate_guess(TRUTH, TRUTH), 5000);
    }

    #[test]
    fn reference_distance_spans_the_campus() {
        let distance = reference_distance();
        assert!((distance - 1965.6).abs() < 1.0, "got {distance}");
    }

    #[test]
    fn one_kilometer_off_scores_almost_nothing() {
        assert_eq!(score_for_distance(1000.0), 31);
    }

    #[test]
    fn score_never_increases_with_distance() {
        let mut previous = score_for_distance(0.0);
        for meters in (0..20_000).step_by(25) {
            let score = score_for_distance(meters as f64);
            assert!(score <= previous, "{score} > {previous} at {meters} m");
            previous = score;
        }
        assert_eq!(score_for_distance(50_000.0), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let other = LatLng::new(33.6520, -117.8510);
        let there = distance_meters(TRUTH, other);
        let back = distance_meters(other, TRUTH);
        assert!((there - back).abs() < 1e-9);
        assert!(there > 1000.0 && there < 1200.0, "got {there}");
    }
}
