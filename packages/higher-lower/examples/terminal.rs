//! Play in the terminal.
//!
//! ```sh
//! UNSPLASH_ACCESS_KEY=... PEXELS_API_KEY=... cargo run -p higher-lower --example terminal
//! ```
//!
//! Type `h` (higher), `l` (lower), `r` (restart) or `q` (quit).

use std::sync::Arc;

use anyhow::{Context, Result};
use higher_lower::{game_over_verdict, GameConfig, Guess, GuessOutcome, Phase, RoundController, RoundState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_pair(state: &RoundState) {
    let (Some(current), Some(next)) = (&state.current, &state.next) else {
        return;
    };
    println!();
    println!("Score: {}   Best: {}", state.score, state.high_score);
    println!(
        "  {} [{}] has {} monthly searches  (photo: {})",
        current.title, current.category, current.search_volume, current.photographer
    );
    println!(
        "  {} [{}] has ... higher or lower?  (photo: {})",
        next.title, next.category, next.photographer
    );
}

async fn wait_for_play(updates: &mut watch::Receiver<RoundState>) -> Result<RoundState> {
    let state = updates
        .wait_for(|s| s.phase == Phase::Playing)
        .await
        .context("controller stopped")?
        .clone();
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,higher_lower=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GameConfig::from_env().context("Failed to load configuration")?;
    if config.unsplash_access_key.is_none() && config.pexels_api_key.is_none() {
        tracing::warn!("No image provider keys set, every card will use a stock photo");
    }

    let (exit_tx, mut exit_rx) = mpsc::unbounded_channel();
    let controller = RoundController::from_config(
        &config,
        Arc::new(move || {
            let _ = exit_tx.send(());
        }),
    )
    .context("Failed to build game")?;

    let mut updates = controller.subscribe();
    controller.start();
    print_pair(&wait_for_play(&mut updates).await?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = exit_rx.recv() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };

        let guess = match line.trim() {
            "h" | "higher" => Guess::Higher,
            "l" | "lower" => Guess::Lower,
            "r" | "restart" => {
                controller.restart();
                print_pair(&wait_for_play(&mut updates).await?);
                continue;
            }
            "q" | "quit" => {
                controller.exit();
                continue;
            }
            _ => {
                println!("h, l, r or q");
                continue;
            }
        };

        let revealed = controller.snapshot().next.map(|item| item.search_volume);
        match controller.guess(guess) {
            GuessOutcome::Correct { score, new_high_score } => {
                if let Some(volume) = revealed {
                    println!("Correct! It has {} searches.", volume);
                }
                if new_high_score {
                    println!("New best: {}", score);
                }
                print_pair(&wait_for_play(&mut updates).await?);
            }
            GuessOutcome::Incorrect { score } => {
                if let Some(volume) = revealed {
                    println!("Wrong, it has {} searches.", volume);
                }
                println!("Game over. Score: {}. {}", score, game_over_verdict(score));
                println!("r to play again, q to quit");
            }
            GuessOutcome::Ignored => println!("Hold on, still loading"),
        }
    }

    controller.shutdown();
    Ok(())
}
