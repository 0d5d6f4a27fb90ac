use crate::map::models::LatLng;
use crate::rounds::consts::LOCKED_ROUND_RETENTION;
use crate::rounds::models::{
    LockTrigger, Round, RoundError, RoundEvent, RoundOutcome, RoundSnapshot,
};
use crate::storage::interface::{IRoundStorage, RoundGameFlowHandler, RoundRepo};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

#[derive(Clone, Default)]
pub struct HashMapRoundsStorage {
    storage: Arc<RwLock<HashMap<String, Round>>>,
}

impl IRoundStorage for HashMapRoundsStorage {}

impl RoundRepo for HashMapRoundsStorage {
    async fn exists(&self, round_id: &str) -> bool {
        self.storage.read().await.contains_key(round_id)
    }

    async fn snapshot(&self, round_id: &str) -> Result<RoundSnapshot, RoundError> {
        self.storage
            .read()
            .await
            .get(round_id)
            .map(Round::snapshot)
            .ok_or(RoundError::NotFound)
    }

    async fn subscribe(
        &self,
        round_id: &str,
    ) -> Result<broadcast::Receiver<RoundEvent>, RoundError> {
        self.storage
            .read()
            .await
            .get(round_id)
            .map(Round::subscribe)
            .ok_or(RoundError::NotFound)
    }

    async fn remove(&self, round_id: &str) {
        if self.storage.write().await.remove(round_id).is_some() {
            tracing::debug!(round_id, "Dropped round from storage.");
        }
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }
}

impl RoundGameFlowHandler for HashMapRoundsStorage {
    async fn open_round(
        &self,
        duration_secs: u64,
        spawn_location: LatLng,
    ) -> Result<String, RoundError> {
        let round_id = generate_round_id();
        let mut round = Round::new(duration_secs);
        let storage_handle = self.clone();
        let expiring_round_id = round_id.clone();
        // The expiry hook needs the write guard too, so it can't lock the round before it is
        // inserted below.
        let mut storage_guard = self.storage.write().await;
        round.begin(spawn_location, move || async move {
            // Losing the race against an explicit submission is expected.
            if let Ok(outcome) = storage_handle
                .lock_round(&expiring_round_id, LockTrigger::TimerExpired)
                .await
            {
                tracing::info!(
                    round_id = %expiring_round_id,
                    score = outcome.score,
                    "Round timer expired."
                );
            }
        })?;
        storage_guard.insert(round_id.clone(), round);
        tracing::info!(
            round_id = %round_id,
            lat = spawn_location.lat,
            lng = spawn_location.lng,
            "Round started."
        );
        Ok(round_id)
    }

    async fn save_guess(&self, round_id: &str, guess: LatLng) -> Result<(), RoundError> {
        self.storage
            .write()
            .await
            .get_mut(round_id)
            .ok_or(RoundError::NotFound)?
            .place_guess(guess)
    }

    async fn lock_round(
        &self,
        round_id: &str,
        trigger: LockTrigger,
    ) -> Result<RoundOutcome, RoundError> {
        // The state check and the transition happen under one write guard, so a submission
        // racing the timer expiry locks the round exactly once.
        let outcome = self
            .storage
            .write()
            .await
            .get_mut(round_id)
            .ok_or(RoundError::NotFound)?
            .lock(trigger)?;
        tracing::info!(
            round_id,
            trigger = ?trigger,
            score = outcome.score,
            distance_meters = outcome.distance_meters,
            "Round locked."
        );
        let storage_handle = self.clone();
        let round_id = round_id.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(LOCKED_ROUND_RETENTION).await;
            storage_handle.remove(&round_id).await;
        });
        Ok(outcome)
    }
}

fn generate_round_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}
