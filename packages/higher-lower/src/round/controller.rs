//! Async driver for the round machine.
//!
//! State lives in a `watch` channel and every transition runs inside
//! `send_modify`, so subscribers see each step as soon as it happens. Fetches
//! and pacing run in spawned tasks owned by a per-round child of the
//! controller's root cancellation token.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::Result;
use crate::factory::ItemFactory;
use crate::highscore::FileHighScoreStore;
use crate::traits::{HighScoreStore, ItemSource};
use crate::types::Guess;

use super::machine::{GuessOutcome, RoundCommand, RoundEvent, RoundState};

/// Receives requests the game core cannot handle itself.
pub trait RoundHost: Send + Sync {
    /// The player asked to leave the game screen.
    fn exit_requested(&self);
}

impl<F> RoundHost for F
where
    F: Fn() + Send + Sync,
{
    fn exit_requested(&self) {
        self()
    }
}

/// Feedback and swap pauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    pub feedback_delay: Duration,
    pub swap_delay: Duration,
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self {
            feedback_delay: Duration::from_millis(1000),
            swap_delay: Duration::from_millis(100),
        }
    }
}

impl RoundTiming {
    /// No pauses. For tests and headless play.
    pub const IMMEDIATE: RoundTiming = RoundTiming {
        feedback_delay: Duration::ZERO,
        swap_delay: Duration::ZERO,
    };
}

impl From<&GameConfig> for RoundTiming {
    fn from(config: &GameConfig) -> Self {
        Self {
            feedback_delay: config.feedback_delay,
            swap_delay: config.swap_delay,
        }
    }
}

struct Inner {
    state: watch::Sender<RoundState>,
    source: Arc<dyn ItemSource>,
    store: Arc<dyn HighScoreStore>,
    host: Arc<dyn RoundHost>,
    timing: RoundTiming,
    root: CancellationToken,
    round_token: Mutex<CancellationToken>,
}

/// Runs a game session.
///
/// Methods that start work spawn Tokio tasks and must be called from within a
/// Tokio runtime. Dropping the controller cancels all outstanding work.
pub struct RoundController {
    inner: Arc<Inner>,
    _root_guard: DropGuard,
}

impl RoundController {
    /// Build a controller. The stored high score is read once, here; a store
    /// failure is logged and play starts from 0.
    pub fn new(
        source: Arc<dyn ItemSource>,
        store: Arc<dyn HighScoreStore>,
        host: Arc<dyn RoundHost>,
        timing: RoundTiming,
    ) -> Self {
        let high_score = match store.load() {
            Ok(score) => score.unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "Failed to load high score, starting from 0");
                0
            }
        };

        let root = CancellationToken::new();
        let (state, _) = watch::channel(RoundState::new(high_score));

        let inner = Arc::new(Inner {
            state,
            source,
            store,
            host,
            timing,
            round_token: Mutex::new(root.child_token()),
            root: root.clone(),
        });

        Self {
            inner,
            _root_guard: root.drop_guard(),
        }
    }

    /// Item factory, file high-score store and timings from configuration.
    pub fn from_config(config: &GameConfig, host: Arc<dyn RoundHost>) -> Result<Self> {
        let factory = ItemFactory::from_config(config)?;
        let store = FileHighScoreStore::new(&config.highscore_path);

        Ok(Self::new(
            Arc::new(factory),
            Arc::new(store),
            host,
            RoundTiming::from(config),
        ))
    }

    /// Start a new run from any phase. Cancels pacing of the previous run.
    pub fn start(&self) {
        self.inner.dispatch(RoundEvent::StartRequested);
    }

    pub fn restart(&self) {
        self.start();
    }

    pub fn guess(&self, guess: Guess) -> GuessOutcome {
        if self.inner.root.is_cancelled() {
            return GuessOutcome::Ignored;
        }

        let mut outcome = GuessOutcome::Ignored;
        let mut command = None;
        self.inner.state.send_modify(|state| {
            outcome = state.evaluate(guess);
            command = state.decide(&RoundEvent::GuessSubmitted(guess));
        });

        match outcome {
            GuessOutcome::Correct { score, new_high_score } => {
                info!(?guess, score, new_high_score, "Correct guess")
            }
            GuessOutcome::Incorrect { score } => info!(?guess, score, "Game over"),
            GuessOutcome::Ignored => debug!(?guess, "Guess ignored outside play"),
        }

        if let Some(command) = command {
            self.inner.execute(command);
        }
        outcome
    }

    pub fn exit(&self) {
        self.inner.dispatch(RoundEvent::ExitRequested);
    }

    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> RoundState {
        self.inner.state.borrow().clone()
    }

    /// Cancel all outstanding work. No state changes are applied afterwards.
    pub fn shutdown(&self) {
        info!("Shutting down round controller");
        self.inner.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.root.is_cancelled()
    }
}

impl Inner {
    fn dispatch(self: &Arc<Self>, event: RoundEvent) {
        if self.root.is_cancelled() {
            return;
        }

        let mut command = None;
        self.state.send_modify(|state| command = state.decide(&event));

        if let Some(command) = command {
            self.execute(command);
        }
    }

    fn execute(self: &Arc<Self>, command: RoundCommand) {
        match command {
            RoundCommand::FetchPair { round } => {
                let token = self.next_round_token();
                info!(round, "Starting round");
                tokio::spawn(Arc::clone(self).fetch_pair(round, token));
            }
            RoundCommand::BeginFeedback { round, new_high_score } => {
                if let Some(score) = new_high_score {
                    if let Err(e) = self.store.save(score) {
                        warn!(score, error = %e, "Failed to save high score");
                    }
                }
                let token = self.current_round_token();
                tokio::spawn(Arc::clone(self).pace_feedback(round, token));
            }
            RoundCommand::NotifyExit => self.host.exit_requested(),
        }
    }

    /// Swap in a fresh child token for the new round and cancel the old one.
    fn next_round_token(&self) -> CancellationToken {
        let token = self.root.child_token();
        let previous = std::mem::replace(
            &mut *self.round_token.lock().unwrap_or_else(PoisonError::into_inner),
            token.clone(),
        );
        previous.cancel();
        token
    }

    fn current_round_token(&self) -> CancellationToken {
        self.round_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn fetch_pair(self: Arc<Self>, round: u64, token: CancellationToken) {
        let (first, second) = tokio::select! {
            _ = token.cancelled() => return,
            pair = async { tokio::join!(self.source.next_item(), self.source.next_item()) } => pair,
        };

        match (first, second) {
            (Ok(first), Ok(second)) => {
                debug!(round, first = %first.title, second = %second.title, "Pair fetched");
                self.dispatch(RoundEvent::PairFetched { round, first, second });
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(round, error = %e, "Failed to fetch starting pair");
                self.dispatch(RoundEvent::FetchFailed { round });
            }
        }
    }

    async fn pace_feedback(self: Arc<Self>, round: u64, token: CancellationToken) {
        let fetched = tokio::select! {
            _ = token.cancelled() => return,
            (item, _) = async {
                tokio::join!(self.source.next_item(), tokio::time::sleep(self.timing.feedback_delay))
            } => item,
        };

        let item = match fetched {
            Ok(item) => item,
            Err(e) => {
                warn!(round, error = %e, "Failed to fetch next item");
                self.dispatch(RoundEvent::FetchFailed { round });
                return;
            }
        };

        self.dispatch(RoundEvent::FeedbackElapsed { round });

        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(self.timing.swap_delay) => {}
        }

        self.dispatch(RoundEvent::NextFetched { round, item });
    }
}
