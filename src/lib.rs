//! # Connect Engine
//!
//! Rules engine and win detection for generalized Connect-Four-style games:
//! an M×N grid where tokens drop into columns and stack, with a configurable
//! line length required to win and a configurable number of players.
//!
//! The crate is the game-logic core only. A presentation layer (rendering,
//! input handling, notifications) sits on top of it, feeding validated column
//! picks into [`game::GameState::place_token`] and reading board contents,
//! turn state, and outcome back out.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identity, state machine
//! - [`config`] — Game parameters with validation and TOML loading
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_engine::config::GameConfig;
//! use connect_engine::game::{GameState, PlayerId};
//!
//! let mut game = GameState::new(GameConfig::default());
//! let p1 = PlayerId::FIRST;
//! let p2 = p1.next(2);
//!
//! assert!(game.place_token(3, p1));
//! assert!(game.place_token(3, p2));
//! assert_eq!(game.outcome(), None);
//! ```

pub mod config;
pub mod error;
pub mod game;
