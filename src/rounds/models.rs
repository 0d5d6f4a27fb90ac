use crate::map::models::LatLng;
use crate::map::scoring;
use crate::rounds::consts::ROUND_EVENTS_CHANNEL_CAPACITY;
use crate::rounds::display;
use crate::rounds::timer::RoundTimer;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundState {
    NotStarted,
    InProgress,
    Locked,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LockTrigger {
    Submitted,
    TimerExpired,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub score: u64,
    /// `None` if no guess was placed before the round locked.
    pub distance_meters: Option<f64>,
    pub distance: Option<String>,
    pub message: String,
    pub locked_by: LockTrigger,
    pub truth: LatLng,
    pub guess: Option<LatLng>,
}

impl RoundOutcome {
    fn evaluate(truth: LatLng, guess: Option<LatLng>, locked_by: LockTrigger) -> Self {
        let distance_meters = guess.map(|guess| scoring::distance_meters(guess, truth));
        let score = guess.map_or(0, |guess| scoring::estimate_guess(guess, truth));
        Self {
            score,
            distance_meters,
            distance: distance_meters.map(display::format_distance),
            message: display::final_message(score, distance_meters),
            locked_by,
            truth,
            guess,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RoundEvent {
    Tick { remaining_secs: u64 },
    Finished(RoundOutcome),
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("round not found")]
    NotFound,
    #[error("round has not started yet")]
    NotStarted,
    #[error("round has already started")]
    AlreadyStarted,
    #[error("round is locked")]
    Locked,
}

/// Read-only view of a round for the HTTP layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub spawn_location: Option<LatLng>,
    pub guess: Option<LatLng>,
    pub duration_secs: u64,
    pub remaining_secs: u64,
    pub outcome: Option<RoundOutcome>,
}

/// One round: spawn, countdown, guessing, and a single lock that freezes the guess and scores
/// it. State only moves forward: `NotStarted -> InProgress -> Locked`.
#[derive(Debug)]
pub struct Round {
    state: RoundState,
    spawn_location: Option<LatLng>,
    guess: Option<LatLng>,
    outcome: Option<RoundOutcome>,
    duration_secs: u64,
    started_at: Option<Instant>,
    timer: RoundTimer,
    events: broadcast::Sender<RoundEvent>,
}

impl Round {
    pub fn new(duration_secs: u64) -> Self {
        let (events, _) = broadcast::channel(ROUND_EVENTS_CHANNEL_CAPACITY);
        Self {
            state: RoundState::NotStarted,
            spawn_location: None,
            guess: None,
            outcome: None,
            duration_secs,
            started_at: None,
            timer: RoundTimer::default(),
            events,
        }
    }

    /// Sets the spawn location and starts the countdown. `on_expire` runs when it reaches zero;
    /// it is expected to lock the round.
    pub fn begin<E, Fut>(
        &mut self,
        spawn_location: LatLng,
        on_expire: E,
    ) -> Result<(), RoundError>
    where
        E: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        match self.state {
            RoundState::NotStarted => {}
            RoundState::InProgress => return Err(RoundError::AlreadyStarted),
            RoundState::Locked => return Err(RoundError::Locked),
        }
        self.spawn_location = Some(spawn_location);
        self.state = RoundState::InProgress;
        self.started_at = Some(Instant::now());
        let events = self.events.clone();
        self.timer.start(
            self.duration_secs,
            move |remaining_secs| {
                // Nobody listening is fine.
                let _ = events.send(RoundEvent::Tick { remaining_secs });
            },
            on_expire,
        );
        Ok(())
    }

    /// Overwrites the previous guess.
    pub fn place_guess(&mut self, guess: LatLng) -> Result<(), RoundError> {
        match self.state {
            RoundState::NotStarted => Err(RoundError::NotStarted),
            RoundState::Locked => Err(RoundError::Locked),
            RoundState::InProgress => {
                self.guess = Some(guess);
                Ok(())
            }
        }
    }

    /// Locks the round and scores the frozen guess. Only the first call on a started round
    /// succeeds; later calls change nothing and return `RoundError::Locked`.
    pub fn lock(&mut self, trigger: LockTrigger) -> Result<RoundOutcome, RoundError> {
        let truth = match (self.state, self.spawn_location) {
            (RoundState::InProgress, Some(truth)) => truth,
            (RoundState::Locked, _) => return Err(RoundError::Locked),
            _ => return Err(RoundError::NotStarted),
        };
        self.state = RoundState::Locked;
        self.timer.cancel();
        let outcome = RoundOutcome::evaluate(truth, self.guess, trigger);
        self.outcome = Some(outcome.clone());
        let _ = self.events.send(RoundEvent::Finished(outcome.clone()));
        Ok(outcome)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RoundEvent> {
        self.events.subscribe()
    }

    pub fn remaining_secs(&self) -> u64 {
        match (self.state, self.started_at) {
            (RoundState::InProgress, Some(started_at)) => self
                .duration_secs
                .saturating_sub(started_at.elapsed().as_secs()),
            (RoundState::NotStarted, _) => self.duration_secs,
            _ => 0,
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            spawn_location: self.spawn_location,
            guess: self.guess,
            duration_secs: self.duration_secs,
            remaining_secs: self.remaining_secs(),
            outcome: self.outcome.clone(),
        }
    }
}
