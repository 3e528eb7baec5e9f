//! Integration tests for the round controller.
//!
//! Drive the controller through its host surface and observe it the way a UI
//! would, via the `watch` receiver.

use std::sync::Arc;
use std::time::Duration;

use higher_lower::{
    testing::{MockItemSource, RecordingHost},
    GameConfig, Guess, GuessOutcome, HighScoreStore, MemoryHighScoreStore, Phase,
    RoundController, RoundState, RoundTiming,
};
use tempfile::TempDir;
use tokio::sync::watch;

struct Harness {
    controller: RoundController,
    source: MockItemSource,
    store: Arc<MemoryHighScoreStore>,
    host: Arc<RecordingHost>,
    updates: watch::Receiver<RoundState>,
}

fn setup(source: MockItemSource, store: MemoryHighScoreStore, timing: RoundTiming) -> Harness {
    let store = Arc::new(store);
    let host = Arc::new(RecordingHost::new());
    let controller = RoundController::new(Arc::new(source.clone()), store.clone(), host.clone(), timing);
    let updates = controller.subscribe();

    Harness {
        controller,
        source,
        store,
        host,
        updates,
    }
}

/// Wait until `pred` holds. Fails the test instead of hanging.
async fn wait_until(updates: &mut watch::Receiver<RoundState>, pred: impl FnMut(&RoundState) -> bool) -> RoundState {
    tokio::time::timeout(Duration::from_secs(5), updates.wait_for(pred))
        .await
        .expect("timed out waiting for state")
        .expect("controller dropped")
        .clone()
}

async fn playing(h: &mut Harness) -> RoundState {
    wait_until(&mut h.updates, |s| s.phase == Phase::Playing).await
}

#[tokio::test]
async fn test_start_reaches_playing_with_pair() {
    let mut h = setup(
        MockItemSource::with_volumes(&[10, 20]),
        MemoryHighScoreStore::with_score(4),
        RoundTiming::IMMEDIATE,
    );
    assert_eq!(h.controller.snapshot().phase, Phase::Loading);
    assert_eq!(h.controller.snapshot().high_score, 4);

    h.controller.start();
    let state = playing(&mut h).await;

    assert_eq!(state.round, 1);
    assert_eq!(state.score, 0);
    assert_eq!(state.current.unwrap().search_volume, 10);
    assert_eq!(state.next.unwrap().search_volume, 20);
    assert_eq!(h.source.call_count(), 2);
}

#[tokio::test]
async fn test_tie_lower_is_correct_and_rotates() {
    let mut h = setup(
        MockItemSource::with_volumes(&[500, 500, 7]),
        MemoryHighScoreStore::new(),
        RoundTiming::IMMEDIATE,
    );
    h.controller.start();
    playing(&mut h).await;

    let outcome = h.controller.guess(Guess::Lower);
    assert_eq!(
        outcome,
        GuessOutcome::Correct {
            score: 1,
            new_high_score: true
        }
    );
    assert_eq!(h.controller.snapshot().phase, Phase::Feedback);
    assert_eq!(h.store.raw().as_deref(), Some("1"));

    let state = playing(&mut h).await;
    assert_eq!(state.score, 1);
    assert_eq!(state.high_score, 1);
    assert_eq!(state.current.unwrap().title, "item-1");
    assert_eq!(state.next.unwrap().search_volume, 7);
}

#[tokio::test]
async fn test_wrong_guess_is_game_over() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1_000_000, 999_999]),
        MemoryHighScoreStore::new(),
        RoundTiming::IMMEDIATE,
    );
    h.controller.start();
    playing(&mut h).await;

    assert_eq!(h.controller.guess(Guess::Higher), GuessOutcome::Incorrect { score: 0 });

    let state = h.controller.snapshot();
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.score, 0);
    assert!(state.current.is_some() && state.next.is_some());
    assert_eq!(h.store.raw(), None);

    assert_eq!(h.controller.guess(Guess::Lower), GuessOutcome::Ignored);
}

#[tokio::test]
async fn test_restart_resets_score_with_fresh_pair() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1, 2, 3, 50, 60]),
        MemoryHighScoreStore::new(),
        RoundTiming::IMMEDIATE,
    );
    h.controller.start();
    playing(&mut h).await;
    h.controller.guess(Guess::Higher);
    wait_until(&mut h.updates, |s| s.phase == Phase::Playing && s.score == 1).await;
    h.controller.guess(Guess::Lower);
    assert_eq!(h.controller.snapshot().phase, Phase::GameOver);

    h.controller.restart();
    let state = playing(&mut h).await;

    assert_eq!(state.round, 2);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 1);
    assert_eq!(state.current.unwrap().search_volume, 50);
    assert_eq!(state.next.unwrap().search_volume, 60);
}

#[tokio::test]
async fn test_high_score_never_decreases() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1, 2, 3]),
        MemoryHighScoreStore::with_score(5),
        RoundTiming::IMMEDIATE,
    );
    h.controller.start();
    playing(&mut h).await;

    assert_eq!(
        h.controller.guess(Guess::Higher),
        GuessOutcome::Correct {
            score: 1,
            new_high_score: false
        }
    );

    let state = playing(&mut h).await;
    assert_eq!(state.high_score, 5);
    assert_eq!(h.store.load().unwrap(), Some(5));
}

#[tokio::test]
async fn test_guess_ignored_while_loading() {
    let h = setup(MockItemSource::new(), MemoryHighScoreStore::new(), RoundTiming::IMMEDIATE);

    assert_eq!(h.controller.guess(Guess::Higher), GuessOutcome::Ignored);
    h.controller.start();
    assert_eq!(h.controller.guess(Guess::Lower), GuessOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_pair_fetch_failure_stays_loading() {
    let h = setup(MockItemSource::with_volumes(&[1]), MemoryHighScoreStore::new(), RoundTiming::IMMEDIATE);

    h.controller.start();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let state = h.controller.snapshot();
    assert_eq!(h.source.call_count(), 2);
    assert_eq!(state.phase, Phase::Loading);
    assert!(state.current.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_next_fetch_failure_stays_in_feedback() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1, 2]),
        MemoryHighScoreStore::new(),
        RoundTiming::default(),
    );
    h.controller.start();
    playing(&mut h).await;

    h.source.set_failing(true);
    h.controller.guess(Guess::Higher);
    tokio::time::sleep(Duration::from_secs(3)).await;

    let state = h.controller.snapshot();
    assert_eq!(state.phase, Phase::Feedback);
    assert_eq!(state.score, 1);
}

#[tokio::test(start_paused = true)]
async fn test_feedback_is_paced() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1, 2, 3]),
        MemoryHighScoreStore::new(),
        RoundTiming::default(),
    );
    h.controller.start();
    playing(&mut h).await;

    h.controller.guess(Guess::Higher);
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(h.controller.snapshot().phase, Phase::Feedback);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(h.controller.snapshot().phase, Phase::Loading);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(h.controller.snapshot().phase, Phase::Playing);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_previous_pacing() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1, 2, 3, 4, 5]),
        MemoryHighScoreStore::new(),
        RoundTiming::default(),
    );
    h.controller.start();
    playing(&mut h).await;

    h.controller.guess(Guess::Higher);
    h.controller.restart();
    let fresh = wait_until(&mut h.updates, |s| s.round == 2 && s.phase == Phase::Playing).await;

    tokio::time::sleep(Duration::from_secs(3)).await;

    let state = h.controller.snapshot();
    assert_eq!(state, fresh);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 1);
}

#[tokio::test]
async fn test_exit_notifies_host_without_state_change() {
    let mut h = setup(
        MockItemSource::with_volumes(&[1, 2]),
        MemoryHighScoreStore::new(),
        RoundTiming::IMMEDIATE,
    );
    h.controller.start();
    let before = playing(&mut h).await;

    h.controller.exit();

    assert_eq!(h.host.exit_count(), 1);
    assert_eq!(h.controller.snapshot(), before);
}

#[tokio::test]
async fn test_closure_host() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let controller = RoundController::new(
        Arc::new(MockItemSource::new()),
        Arc::new(MemoryHighScoreStore::new()),
        Arc::new(move || {
            let _ = tx.send(());
        }),
        RoundTiming::IMMEDIATE,
    );

    controller.exit();
    assert!(rx.recv().await.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_updates() {
    let h = setup(
        MockItemSource::with_volumes(&[1, 2]).with_delay(Duration::from_millis(500)),
        MemoryHighScoreStore::new(),
        RoundTiming::IMMEDIATE,
    );
    h.controller.start();
    h.controller.shutdown();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(h.controller.is_shut_down());
    assert_eq!(h.controller.snapshot().phase, Phase::Loading);

    h.controller.start();
    assert_eq!(h.controller.snapshot().round, 1);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_outstanding_work() {
    let h = setup(
        MockItemSource::with_volumes(&[1, 2]).with_delay(Duration::from_secs(10)),
        MemoryHighScoreStore::new(),
        RoundTiming::IMMEDIATE,
    );
    let mut updates = h.updates;
    h.controller.start();
    updates.borrow_and_update();

    drop(h.controller);

    // The sender goes away once the cancelled fetch task lets go of it.
    let closed = tokio::time::timeout(Duration::from_secs(1), updates.changed()).await;
    assert!(matches!(closed, Ok(Err(_))));
}

#[tokio::test]
async fn test_from_config_without_keys_plays_with_stock_photos() {
    let dir = TempDir::new().unwrap();
    let config = GameConfig::default()
        .with_highscore_path(dir.path().join("storage.json"))
        .with_feedback_delay(Duration::ZERO)
        .with_swap_delay(Duration::ZERO);

    let controller = RoundController::from_config(&config, Arc::new(|| {})).unwrap();
    let mut updates = controller.subscribe();
    controller.start();

    let state = wait_until(&mut updates, |s| s.phase == Phase::Playing).await;
    let current = state.current.unwrap();
    let next = state.next.unwrap();

    assert_ne!(current.id, next.id);
    assert_eq!(current.photographer, "Stock Photo");
    assert_eq!(next.photographer, "Stock Photo");
}
