//! Round control: the pure machine and its async driver.

mod controller;
mod machine;

pub use controller::{RoundController, RoundHost, RoundTiming};
pub use machine::{game_over_verdict, GuessOutcome, Phase, RoundCommand, RoundEvent, RoundState};
