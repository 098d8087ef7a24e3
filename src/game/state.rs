use super::{Board, Occupant, PlayerId};
use crate::config::GameConfig;
use crate::error::CoordinateError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// The full state of one game: grid contents, whose turn it is, and the
/// outcome once decided. All mutation goes through [`place_token`] and
/// [`reset`]; callers never touch cells directly.
///
/// Everything here is synchronous and non-blocking. Callers sharing a game
/// across threads must serialize placements themselves (a mutex around the
/// state); the engine assumes each placement runs to completion alone.
///
/// [`place_token`]: GameState::place_token
/// [`reset`]: GameState::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_player: PlayerId,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state for a validated configuration. Player 1
    /// moves first.
    pub fn new(config: GameConfig) -> Self {
        GameState {
            board: Board::new(config.rows, config.columns),
            current_player: PlayerId::FIRST,
            outcome: None,
            config,
        }
    }

    /// Get the active player.
    pub fn active_player(&self) -> PlayerId {
        self.current_player
    }

    /// Get reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the configuration this game was created with.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Get the game outcome if the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the game is over.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get the cell at a specific position. Row 0 is the bottom row.
    pub fn get_token(&self, column: usize, row: usize) -> Result<Occupant, CoordinateError> {
        self.board.get(column, row)
    }

    /// Get the list of legal columns (not full). Empty once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.config.columns)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop a token for `player` into `column`.
    ///
    /// Returns `false` without mutating anything when the game is already
    /// decided, it is not `player`'s turn, the column index is out of range,
    /// or the column is full. These are normal rejected moves, not errors.
    ///
    /// On success the win scan runs against the just-placed cell; the turn
    /// only advances when the game continues.
    pub fn place_token(&mut self, column: usize, player: PlayerId) -> bool {
        if self.is_terminal() || player != self.current_player {
            return false;
        }

        let row = match self.board.drop_token(column, player) {
            Ok(row) => row,
            Err(_) => return false,
        };

        if self.board.check_win(column, row, self.config.connect_length) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.next(self.config.player_count);
        }

        true
    }

    /// Start over with the same configuration: empty board, player 1 to
    /// move, no outcome.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = PlayerId::FIRST;
        self.outcome = None;
    }
}
