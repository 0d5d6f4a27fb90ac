use crate::map::models::LatLng;
use crate::rounds::models::{LockTrigger, RoundError, RoundEvent, RoundOutcome, RoundSnapshot};
use tokio::sync::broadcast;

pub trait IRoundStorage: RoundRepo + RoundGameFlowHandler {}

pub trait RoundRepo {
    async fn exists(&self, round_id: &str) -> bool;

    async fn snapshot(&self, round_id: &str) -> Result<RoundSnapshot, RoundError>;

    async fn subscribe(
        &self,
        round_id: &str,
    ) -> Result<broadcast::Receiver<RoundEvent>, RoundError>;

    async fn remove(&self, round_id: &str);

    async fn count(&self) -> usize;
}

pub trait RoundGameFlowHandler {
    /// Stores a new round that is already in progress at `spawn_location` and returns its id.
    async fn open_round(
        &self,
        duration_secs: u64,
        spawn_location: LatLng,
    ) -> Result<String, RoundError>;

    async fn save_guess(&self, round_id: &str, guess: LatLng) -> Result<(), RoundError>;

    async fn lock_round(
        &self,
        round_id: &str,
        trigger: LockTrigger,
    ) -> Result<RoundOutcome, RoundError>;
}
