//! Core game logic: board storage, player identity, and the game state
//! machine that enforces turn order, placement rules, and win detection.

mod board;
mod player;
mod state;

pub use board::{Board, MoveError, Occupant};
pub use player::PlayerId;
pub use state::{GameOutcome, GameState};
