//! Patience card-game simulator
//!
//! A standalone solitaire variant with no shared logic with the anagram
//! engine; it feeds the same histogram renderer.

pub mod deck;
pub mod game;
pub mod simulation;

pub use deck::Deck;
pub use game::play;
pub use simulation::{SimulationResult, distribution, many_plays, many_plays_with};
