//! Patience simulation command
//!
//! Runs a batch of patience games with a progress bar, or a single traced
//! game in verbose mode.

use crate::patience::{Deck, SimulationResult, many_plays_with, play};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Play one game with a move-by-move trace and report its score
pub fn run_single_game(seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = Deck::shuffled(&mut rng);

    let remaining = play(&mut deck, true);
    if remaining == 0 {
        println!("\nDeck empty: you win!");
    } else {
        println!("\nGame over with {remaining} card(s) left in the deck");
    }
}

/// Simulate `games` games, showing progress, and return the tally
///
/// # Panics
/// Panics if the progress bar template is invalid, which it statically is not.
#[must_use]
pub fn run_simulation(games: usize, seed: Option<u64>) -> SimulationResult {
    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let result = many_plays_with(games, seed, || pb.inc(1));
    pb.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_tallies_every_game() {
        let result = run_simulation(50, Some(5));
        assert_eq!(result.games, 50);
        assert_eq!(result.counts.iter().sum::<usize>(), 50);
    }
}
