use super::player::PlayerId;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Run directions as (row, col) deltas: horizontal, vertical, diagonal
/// down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Number of consecutive same-owner cells that wins the game.
const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece into a column, returning the row where it landed or
    /// `None` if the column is full. The caller is responsible for column
    /// bounds; pieces always settle to the lowest empty cell.
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Option<usize> {
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Owned(player);
                return Some(row);
            }
        }
        None
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether `player` owns a run of four anywhere on the board.
    ///
    /// Every cell is tried as the start of a run in each of the four
    /// directions. A run only counts if all four positions are in bounds,
    /// so runs touching an edge never wrap around.
    pub fn has_run(&self, player: PlayerId) -> bool {
        for row in 0..ROWS {
            for col in 0..COLS {
                for &(dr, dc) in &DIRECTIONS {
                    if self.is_run(row, col, dr, dc, player) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn is_run(&self, row: usize, col: usize, dr: isize, dc: isize, player: PlayerId) -> bool {
        (0..RUN_LENGTH as isize).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == Cell::Owned(player)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
