use super::player::PlayerId;
use crate::error::CoordinateError;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Empty,
    Taken(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// The four line directions through a cell, as (column, row) steps.
/// Each covers both of its orientations because the win scan walks the
/// direction forwards and backwards from the placed cell.
const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // horizontal
    (0, 1),  // vertical
    (1, 1),  // diagonal /
    (1, -1), // diagonal \
];

/// An `rows x columns` grid with per-column fill heights. Row 0 is the
/// bottom; tokens stack bottom-to-top, so every cell at or above a column's
/// fill height is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Occupant>,
    heights: Vec<usize>,
}

impl Board {
    /// Create a new empty board.
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Occupant::Empty; rows * columns],
            heights: vec![0; columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tokens currently stacked in `column`.
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    /// Get the cell at a specific position. Row 0 is the bottom row.
    pub fn get(&self, column: usize, row: usize) -> Result<Occupant, CoordinateError> {
        if column >= self.columns || row >= self.rows {
            return Err(CoordinateError {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.cells[self.index(column, row)])
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns {
            return true;
        }
        self.heights[column] == self.rows
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    /// Drop a token in a column, returns the row where it landed.
    pub fn drop_token(&mut self, column: usize, player: PlayerId) -> Result<usize, MoveError> {
        if column >= self.columns {
            return Err(MoveError::InvalidColumn);
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull);
        }

        let row = self.heights[column];
        let index = self.index(column, row);
        self.cells[index] = Occupant::Taken(player);
        self.heights[column] += 1;
        Ok(row)
    }

    /// Remove every token and reset all fill heights.
    pub fn clear(&mut self) {
        self.cells.fill(Occupant::Empty);
        self.heights.fill(0);
    }

    /// Check whether the token just placed at (column, row) completed a line
    /// of at least `connect_length`.
    ///
    /// Each direction is walked both ways from the placed cell, so lines
    /// touching any edge of the board are counted in full. The first
    /// satisfied direction is enough.
    pub fn check_win(&self, column: usize, row: usize, connect_length: usize) -> bool {
        let player = match self.cells[self.index(column, row)] {
            Occupant::Taken(player) => player,
            Occupant::Empty => return false,
        };

        DIRECTIONS.iter().any(|&(dc, dr)| {
            let count = 1
                + self.run_length(column, row, dc, dr, player)
                + self.run_length(column, row, -dc, -dr, player);
            count >= connect_length
        })
    }

    /// Count consecutive tokens of `player` starting one step away from
    /// (column, row) in direction (dc, dr).
    fn run_length(&self, column: usize, row: usize, dc: isize, dr: isize, player: PlayerId) -> usize {
        let mut count = 0;
        let mut c = column as isize + dc;
        let mut r = row as isize + dr;
        while c >= 0
            && r >= 0
            && (c as usize) < self.columns
            && (r as usize) < self.rows
            && self.cells[self.index(c as usize, r as usize)] == Occupant::Taken(player)
        {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::FIRST;

    fn p2() -> PlayerId {
        P1.next(2)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        for row in 0..6 {
            for column in 0..7 {
                assert_eq!(board.get(column, row).unwrap(), Occupant::Empty);
            }
        }
        for column in 0..7 {
            assert_eq!(board.height(column), 0);
        }
    }

    #[test]
    fn test_drop_token_stacks_from_bottom() {
        let mut board = Board::new(6, 7);

        let row = board.drop_token(3, P1).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(3, 0).unwrap(), Occupant::Taken(P1));

        let row = board.drop_token(3, p2()).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(3, 1).unwrap(), Occupant::Taken(p2()));
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7);

        for _ in 0..6 {
            board.drop_token(0, P1).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_token(0, p2()), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.drop_token(7, P1), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(6, 7);
        for column in 0..7 {
            for _ in 0..6 {
                board.drop_token(column, P1).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new(6, 7);
        assert!(board.get(7, 0).is_err());
        assert!(board.get(0, 6).is_err());
        let err = board.get(9, 2).unwrap_err();
        assert_eq!(err.column, 9);
        assert_eq!(err.row, 2);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(6, 7);
        board.drop_token(2, P1).unwrap();
        board.drop_token(2, p2()).unwrap();
        board.clear();
        assert_eq!(board.get(2, 0).unwrap(), Occupant::Empty);
        assert_eq!(board.height(2), 0);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(6, 7);
        for column in 0..4 {
            board.drop_token(column, P1).unwrap();
        }
        // Check from the middle of the line, not just the end.
        assert!(board.check_win(2, 0, 4));
    }

    #[test]
    fn test_horizontal_win_touching_last_column() {
        let mut board = Board::new(6, 7);
        for column in 3..7 {
            board.drop_token(column, P1).unwrap();
        }
        assert!(board.check_win(6, 0, 4));
        assert!(board.check_win(3, 0, 4));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(6, 7);
        let mut row = 0;
        for _ in 0..4 {
            row = board.drop_token(3, p2()).unwrap();
        }
        assert!(board.check_win(3, row, 4));
    }

    #[test]
    fn test_vertical_win_touching_top_row() {
        let mut board = Board::new(6, 7);
        board.drop_token(0, p2()).unwrap();
        board.drop_token(0, p2()).unwrap();
        let mut row = 0;
        for _ in 0..4 {
            row = board.drop_token(0, P1).unwrap();
        }
        assert_eq!(row, 5);
        assert!(board.check_win(0, row, 4));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(6, 7);
        // Staircase: P1 at (0,0), (1,1), (2,2), (3,3).
        board.drop_token(0, P1).unwrap();

        board.drop_token(1, p2()).unwrap();
        board.drop_token(1, P1).unwrap();

        board.drop_token(2, p2()).unwrap();
        board.drop_token(2, p2()).unwrap();
        board.drop_token(2, P1).unwrap();

        board.drop_token(3, p2()).unwrap();
        board.drop_token(3, p2()).unwrap();
        board.drop_token(3, p2()).unwrap();
        let row = board.drop_token(3, P1).unwrap();

        assert!(board.check_win(3, row, 4));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(6, 7);
        // Staircase the other way: P1 at (6,0), (5,1), (4,2), (3,3).
        board.drop_token(6, P1).unwrap();

        board.drop_token(5, p2()).unwrap();
        board.drop_token(5, P1).unwrap();

        board.drop_token(4, p2()).unwrap();
        board.drop_token(4, p2()).unwrap();
        board.drop_token(4, P1).unwrap();

        board.drop_token(3, p2()).unwrap();
        board.drop_token(3, p2()).unwrap();
        board.drop_token(3, p2()).unwrap();
        let row = board.drop_token(3, P1).unwrap();

        assert!(board.check_win(3, row, 4));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(6, 7);
        for column in 0..3 {
            board.drop_token(column, P1).unwrap();
        }
        assert!(!board.check_win(1, 0, 4));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new(6, 7);
        board.drop_token(0, P1).unwrap();
        board.drop_token(1, P1).unwrap();
        board.drop_token(2, p2()).unwrap();
        board.drop_token(3, P1).unwrap();
        board.drop_token(4, P1).unwrap();
        assert!(!board.check_win(1, 0, 4));
        assert!(!board.check_win(3, 0, 4));
    }

    #[test]
    fn test_configurable_connect_length() {
        let mut board = Board::new(3, 3);
        for column in 0..3 {
            board.drop_token(column, P1).unwrap();
        }
        assert!(board.check_win(1, 0, 3));
        assert!(!board.check_win(1, 0, 4));
    }
}
