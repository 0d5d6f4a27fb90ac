use crate::map::models::LatLng;
use crate::rounds::models::{LockTrigger, RoundError, RoundEvent, RoundState};
use crate::storage::interface::{RoundGameFlowHandler, RoundRepo};
use crate::storage::rounds::HashMapRoundsStorage;
use std::time::Duration;

const TRUTH: LatLng = LatLng::new(33.646, -117.841);
const GUESS: LatLng = LatLng::new(33.6470, -117.8400);

#[tokio::test(start_paused = true)]
async fn timer_expiry_locks_the_round() {
    let rounds = HashMapRoundsStorage::default();
    let round_id = rounds.open_round(3, TRUTH).await.unwrap();
    rounds.save_guess(&round_id, GUESS).await.unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;

    let snapshot = rounds.snapshot(&round_id).await.unwrap();
    assert_eq!(snapshot.state, RoundState::Locked);
    let outcome = snapshot.outcome.unwrap();
    assert_eq!(outcome.locked_by, LockTrigger::TimerExpired);
    assert_eq!(outcome.guess, Some(GUESS));
    assert!(outcome.score > 0 && outcome.score < 5000);
}

#[tokio::test(start_paused = true)]
async fn submission_beats_a_later_expiry() {
    let rounds = HashMapRoundsStorage::default();
    let round_id = rounds.open_round(3, TRUTH).await.unwrap();
    rounds.save_guess(&round_id, GUESS).await.unwrap();

    let submitted = rounds
        .lock_round(&round_id, LockTrigger::Submitted)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;

    let snapshot = rounds.snapshot(&round_id).await.unwrap();
    assert_eq!(snapshot.outcome, Some(submitted));
    assert_eq!(
        rounds.lock_round(&round_id, LockTrigger::Submitted).await,
        Err(RoundError::Locked)
    );
    assert_eq!(
        rounds.save_guess(&round_id, TRUTH).await,
        Err(RoundError::Locked)
    );
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_ticks_then_the_result() {
    let rounds = HashMapRoundsStorage::default();
    let round_id = rounds.open_round(2, TRUTH).await.unwrap();
    let mut events = rounds.subscribe(&round_id).await.unwrap();

    assert_eq!(
        events.recv().await.unwrap(),
        RoundEvent::Tick { remaining_secs: 1 }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        RoundEvent::Tick { remaining_secs: 0 }
    );
    match events.recv().await.unwrap() {
        RoundEvent::Finished(outcome) => {
            assert_eq!(outcome.score, 0);
            assert_eq!(outcome.locked_by, LockTrigger::TimerExpired);
        }
        event => panic!("Expected the round to finish, got {event:?}."),
    }
}

#[tokio::test(start_paused = true)]
async fn locked_rounds_are_dropped_after_retention() {
    let rounds = HashMapRoundsStorage::default();
    let round_id = rounds.open_round(120, TRUTH).await.unwrap();
    rounds
        .lock_round(&round_id, LockTrigger::Submitted)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(rounds.exists(&round_id).await);
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert!(!rounds.exists(&round_id).await);
}

#[tokio::test]
async fn unknown_rounds_are_reported() {
    let rounds = HashMapRoundsStorage::default();

    assert_eq!(
        rounds.snapshot("missing").await.unwrap_err(),
        RoundError::NotFound
    );
    assert_eq!(
        rounds.save_guess("missing", GUESS).await,
        Err(RoundError::NotFound)
    );
    assert_eq!(
        rounds.lock_round("missing", LockTrigger::Submitted).await,
        Err(RoundError::NotFound)
    );
}

#[tokio::test]
async fn opened_rounds_are_already_in_progress() {
    let rounds = HashMapRoundsStorage::default();

    let round_id = rounds.open_round(120, TRUTH).await.unwrap();

    let snapshot = rounds.snapshot(&round_id).await.unwrap();
    assert_eq!(snapshot.state, RoundState::InProgress);
    assert_eq!(snapshot.spawn_location, Some(TRUTH));
    assert_eq!(rounds.count().await, 1);
    assert_eq!(rounds.save_guess(&round_id, GUESS).await, Ok(()));
}
