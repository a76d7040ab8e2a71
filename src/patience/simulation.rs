//! Batch patience simulation
//!
//! Plays many independent games in parallel and tallies how many cards each
//! game left in the deck.

use super::deck::{DECK_SIZE, Deck};
use super::game::play;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Outcome tally of a batch of games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of games played
    pub games: usize,
    /// `counts[r]` is the number of games that ended with `r` cards left
    pub counts: Vec<usize>,
}

impl SimulationResult {
    /// Games that emptied the deck
    #[must_use]
    pub fn wins(&self) -> usize {
        self.counts[0]
    }
}

/// Play `games` games and tally the remaining-cards outcomes
///
/// Games run in parallel; each derives its own generator from the base seed
/// and its index, so a fixed `seed` reproduces the same tally regardless of
/// scheduling. With `None` a random base seed is drawn.
#[must_use]
pub fn many_plays(games: usize, seed: Option<u64>) -> SimulationResult {
    many_plays_with(games, seed, || {})
}

/// `many_plays` with a per-game callback, e.g. for progress reporting
pub fn many_plays_with<F>(games: usize, seed: Option<u64>, on_game: F) -> SimulationResult
where
    F: Fn() + Sync,
{
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());

    let counts = (0..games)
        .into_par_iter()
        .map(|game| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(game as u64));
            let mut deck = Deck::shuffled(&mut rng);
            let remaining = play(&mut deck, false);
            on_game();
            remaining
        })
        .fold(
            || vec![0usize; DECK_SIZE + 1],
            |mut counts, remaining| {
                counts[remaining] += 1;
                counts
            },
        )
        .reduce(
            || vec![0usize; DECK_SIZE + 1],
            |mut a, b| {
                for (total, count) in a.iter_mut().zip(b) {
                    *total += count;
                }
                a
            },
        );

    SimulationResult { games, counts }
}

/// Percentage of games per remaining-cards outcome
///
/// Returns `(remaining, percentage)` rows for every outcome that occurred at
/// least once, ascending by remaining count — histogram input.
#[must_use]
pub fn distribution(result: &SimulationResult) -> Vec<(usize, f64)> {
    result
        .counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(remaining, &count)| (remaining, (count as f64 / result.games as f64) * 100.0))
        .collect()
}
