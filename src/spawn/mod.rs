use crate::imagery::LocationValidator;
use crate::map::models::LatLng;
use crate::map::sampler::GeoSampler;
use std::future::Future;


/// Campus centre; known to have Street View coverage.
pub const FALLBACK_SPAWN: LatLng = LatLng::new(33.646, -117.841);

#[derive(Debug, PartialEq)]
pub struct RetryOutcome<T> {
    pub value: T,
    pub attempts: u32,
    /// `true` when no attempt succeeded and `value` is the fallback.
    pub exhausted: bool,
}

/// Runs `attempt` sequentially, at most `max_attempts` times, until one yields a value. Attempt
/// `k + 1` only starts once attempt `k` has settled. Gives back `fallback` if none succeeds.
pub async fn retry_bounded<T, F, Fut>(
    max_attempts: u32,
    fallback: T,
    mut attempt: F,
) -> RetryOutcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for attempt_number in 1..=max_attempts {
        if let Some(value) = attempt(attempt_number).await {
            return RetryOutcome {
                value,
                attempts: attempt_number,
                exhausted: false,
            };
        }
    }
    RetryOutcome {
        value: fallback,
        attempts: max_attempts,
        exhausted: true,
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnResolution {
    pub location: LatLng,
    pub attempts: u32,
    pub used_fallback: bool,
}

pub async fn resolve_spawn(
    sampler: &GeoSampler,
    validator: &LocationValidator,
    max_attempts: u32,
    fallback: LatLng,
) -> SpawnResolution {
    let outcome = retry_bounded(max_attempts, fallback, |attempt| async move {
        let sample = sampler.sample(&mut rand::thread_rng());
        if sample.exhausted {
            tracing::debug!(
                attempt,
                draws = sample.draws,
                "Sampler found no point inside the boundary, using its fallback."
            );
        }
        let validated = validator.validate(sample.point).await;
        tracing::debug!(
            attempt,
            candidate_lat = sample.point.lat,
            candidate_lng = sample.point.lng,
            found = validated.is_some(),
            "Checked spawn candidate."
        );
        validated
    })
    .await;
    if outcome.exhausted {
        tracing::warn!(
            attempts = outcome.attempts,
            lat = fallback.lat,
            lng = fallback.lng,
            "Could not find a spawn point with imagery, defaulting to the fallback."
        );
    }
    SpawnResolution {
        location: outcome.value,
        attempts: outcome.attempts,
        used_fallback: outcome.exhausted,
    }
}

/// Everything needed to pick spawn points, shared by all rounds.
#[derive(Clone)]
pub struct Spawner {
    sampler: GeoSampler,
    validator: LocationValidator,
    max_attempts: u32,
    fallback: LatLng,
}

impl Spawner {
    pub fn new(sampler: GeoSampler, validator: LocationValidator, max_attempts: u32) -> Self {
        Self {
            sampler,
            validator,
            max_attempts,
            fallback: FALLBACK_SPAWN,
        }
    }

    pub fn sampler(&self) -> &GeoSampler {
        &self.sampler
    }

    pub async fn resolve(&self) -> SpawnResolution {
        resolve_spawn(
            &self.sampler,
            &self.validator,
            self.max_attempts,
            self.fallback,
        )
        .await
    }
}
