//! A single game of patience
//!
//! Deal two piles, then repeatedly cover pairs of visible cards adding to 11
//! or a visible Jack/Queen/King triple; deal a new pile when neither move is
//! available. The game ends when nine piles are open or the deck runs dry,
//! and scores as the number of cards left in the deck (zero is a win).

use super::deck::{Deck, JACK, KING, QUEEN};

/// The game is lost once this many piles are open
pub const MAX_PILES: usize = 9;

/// Play one game from a shuffled deck, returning the cards left over
///
/// Only each pile's top card matters, so the table state is the sequence of
/// visible cards in pile order. With `verbose` the game prints a move-by-move
/// trace.
pub fn play(deck: &mut Deck, verbose: bool) -> usize {
    let mut piles: Vec<u8> = Vec::with_capacity(MAX_PILES);
    for _ in 0..2 {
        if let Some(card) = deck.draw() {
            piles.push(card);
        }
    }

    if verbose {
        println!("Game started");
        print_piles(&piles);
    }

    while piles.len() < MAX_PILES && deck.remaining() > 0 {
        let pairs = elevens(&piles);
        if pairs.is_empty() {
            if let Some(triple) = jqk(&piles) {
                if verbose {
                    println!("Covering J/Q/K");
                }
                cover(&mut piles, &triple, deck, verbose);
            } else if let Some(card) = deck.draw() {
                if verbose {
                    println!("No move, dealing new pile: {card}");
                }
                piles.push(card);
            }
        } else {
            if verbose {
                println!("Covering {} pair(s) adding to 11", pairs.len() / 2);
            }
            cover(&mut piles, &pairs, deck, verbose);
        }

        if verbose {
            print_piles(&piles);
        }
    }

    deck.remaining()
}

/// Indices of every pile pair whose top cards add to 11, flattened
///
/// Greedy single pass: the first unpaired pile showing a value is remembered;
/// a later pile showing its complement closes the pair, and a pile that
/// closes a pair is not itself available for another.
fn elevens(piles: &[u8]) -> Vec<usize> {
    let mut seen: [Option<usize>; 14] = [None; 14];
    let mut to_cover = Vec::new();

    for (i, &value) in piles.iter().enumerate() {
        let needed = 11 - i32::from(value);
        if (1..=10).contains(&needed) {
            if let Some(partner) = seen[needed as usize].take() {
                to_cover.push(partner);
                to_cover.push(i);
                continue;
            }
        }
        seen[value as usize] = Some(i);
    }

    to_cover
}

/// Indices of the first Jack, Queen, and King piles, if all three are visible
fn jqk(piles: &[u8]) -> Option<[usize; 3]> {
    let position = |rank: u8| piles.iter().position(|&v| v == rank);
    Some([position(JACK)?, position(QUEEN)?, position(KING)?])
}

/// Replace the top card of each listed pile with a fresh card from the deck
///
/// Stops early if the deck runs out mid-cover.
fn cover(piles: &mut [u8], indices: &[usize], deck: &mut Deck, verbose: bool) {
    for &i in indices {
        let Some(card) = deck.draw() else { break };
        piles[i] = card;
        if verbose {
            println!("Covered pile {} with {card}", i + 1);
        }
    }
}

fn print_piles(piles: &[u8]) {
    let tops: Vec<String> = piles.iter().map(|v| format!("[{v}]")).collect();
    println!("{} ← deck", tops.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn elevens_pairs_first_seen_with_complement() {
        // 5+6 and 1+10 pair up; 7 is left unmatched
        assert_eq!(elevens(&[5, 7, 6, 1, 10]), vec![0, 2, 3, 4]);
    }

    #[test]
    fn elevens_ignores_face_cards() {
        assert_eq!(elevens(&[11, 12, 13]), Vec::<usize>::new());
    }

    #[test]
    fn elevens_later_duplicate_replaces_remembered_pile() {
        // The second 5 shadows the first, and a closed pair frees neither
        // pile for reuse, so the trailing 6 stays unmatched
        assert_eq!(elevens(&[5, 5, 6, 6]), vec![1, 2]);
    }

    #[test]
    fn elevens_empty_table() {
        assert_eq!(elevens(&[]), Vec::<usize>::new());
    }

    #[test]
    fn jqk_requires_all_three() {
        assert_eq!(jqk(&[11, 3, 12, 13]), Some([0, 2, 3]));
        assert_eq!(jqk(&[11, 12]), None);
        assert_eq!(jqk(&[]), None);
    }

    #[test]
    fn jqk_takes_first_of_each_rank() {
        assert_eq!(jqk(&[13, 11, 13, 12, 11]), Some([1, 3, 0]));
    }

    #[test]
    fn cover_stops_when_deck_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::shuffled(&mut rng);
        while deck.remaining() > 1 {
            deck.draw();
        }

        let mut piles = vec![5, 6];
        cover(&mut piles, &[0, 1], &mut deck, false);
        assert_eq!(deck.remaining(), 0);
        assert_eq!(piles[1], 6); // Second cover never happened
    }

    #[test]
    fn play_scores_between_zero_and_fifty() {
        // Two cards are always dealt, so at most 50 can remain
        for seed in 0..50 {
            let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
            let remaining = play(&mut deck, false);
            assert!(remaining <= 50, "seed {seed}: {remaining}");
        }
    }

    #[test]
    fn play_is_deterministic_for_a_seed() {
        let a = play(&mut Deck::shuffled(&mut StdRng::seed_from_u64(9)), false);
        let b = play(&mut Deck::shuffled(&mut StdRng::seed_from_u64(9)), false);
        assert_eq!(a, b);
    }
}
