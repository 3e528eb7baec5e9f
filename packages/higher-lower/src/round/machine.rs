//! Pure round state machine.
//!
//! `decide` is synchronous and does no IO: it updates the state and returns at
//! most one command for the driver to execute. Every fetch result carries the
//! round it was requested for, and results from a superseded round are dropped.

use serde::Serialize;

use crate::types::{ComparisonItem, Guess};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Waiting for the starting pair, or between feedback and the rotated pair.
    #[default]
    Loading,
    Playing,
    /// Showing the result of a correct guess while the next item loads.
    Feedback,
    GameOver,
}

/// Observable game state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub score: u32,
    pub high_score: u32,
    pub current: Option<ComparisonItem>,
    pub next: Option<ComparisonItem>,
    pub phase: Phase,
    /// Generation counter, bumped on every start.
    pub round: u64,
}

#[derive(Debug, Clone)]
pub enum RoundEvent {
    StartRequested,
    PairFetched {
        round: u64,
        first: ComparisonItem,
        second: ComparisonItem,
    },
    FetchFailed {
        round: u64,
    },
    GuessSubmitted(Guess),
    FeedbackElapsed {
        round: u64,
    },
    NextFetched {
        round: u64,
        item: ComparisonItem,
    },
    ExitRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundCommand {
    FetchPair {
        round: u64,
    },
    /// Fetch the next item and pace the feedback screen. Carries the score to
    /// persist when the guess set a new best.
    BeginFeedback {
        round: u64,
        new_high_score: Option<u32>,
    },
    NotifyExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    Correct { score: u32, new_high_score: bool },
    Incorrect { score: u32 },
    /// Not in `Playing`.
    Ignored,
}

impl RoundState {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    /// What `guess` would do right now, without changing anything.
    pub fn evaluate(&self, guess: Guess) -> GuessOutcome {
        let (Phase::Playing, Some(current), Some(next)) = (self.phase, &self.current, &self.next) else {
            return GuessOutcome::Ignored;
        };

        if guess.is_correct(current.search_volume, next.search_volume) {
            let score = self.score + 1;
            GuessOutcome::Correct {
                score,
                new_high_score: score > self.high_score,
            }
        } else {
            GuessOutcome::Incorrect { score: self.score }
        }
    }

    pub fn decide(&mut self, event: &RoundEvent) -> Option<RoundCommand> {
        match event {
            RoundEvent::StartRequested => {
                self.round += 1;
                self.score = 0;
                self.current = None;
                self.next = None;
                self.phase = Phase::Loading;
                Some(RoundCommand::FetchPair { round: self.round })
            }

            RoundEvent::PairFetched { round, first, second } => {
                if *round != self.round || self.phase != Phase::Loading || self.current.is_some() {
                    return None;
                }
                self.current = Some(first.clone());
                self.next = Some(second.clone());
                self.phase = Phase::Playing;
                None
            }

            // Nothing to undo; the phase stays where it is.
            RoundEvent::FetchFailed { .. } => None,

            RoundEvent::GuessSubmitted(guess) => match self.evaluate(*guess) {
                GuessOutcome::Ignored => None,
                GuessOutcome::Incorrect { .. } => {
                    self.phase = Phase::GameOver;
                    None
                }
                GuessOutcome::Correct { score, new_high_score } => {
                    self.score = score;
                    if new_high_score {
                        self.high_score = score;
                    }
                    self.phase = Phase::Feedback;
                    Some(RoundCommand::BeginFeedback {
                        round: self.round,
                        new_high_score: new_high_score.then_some(score),
                    })
                }
            },

            RoundEvent::FeedbackElapsed { round } => {
                if *round == self.round && self.phase == Phase::Feedback {
                    self.phase = Phase::Loading;
                }
                None
            }

            RoundEvent::NextFetched { round, item } => {
                if *round != self.round || self.phase != Phase::Loading || self.current.is_none() {
                    return None;
                }
                self.current = self.next.take();
                self.next = Some(item.clone());
                self.phase = Phase::Playing;
                None
            }

            RoundEvent::ExitRequested => Some(RoundCommand::NotifyExit),
        }
    }
}

/// Closing line for the game-over screen.
pub fn game_over_verdict(score: u32) -> &'static str {
    match score {
        0 => "Better luck next time!",
        1..=3 => "Not bad! Keep practicing!",
        4..=7 => "Great job! You're getting good at this!",
        _ => "Amazing! You're a search trends master!",
    }
}
