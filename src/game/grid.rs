use super::direction::Direction;

/// A cell position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position one step away in the given direction
    pub fn translate(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Snake,
    Food,
}

/// The game board: a fixed rows x cols grid of cell states
///
/// Cells outside the bounds are not represented; lookups outside return
/// `None` and the tick resolver treats them as a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows as i32 && pos.col >= 0 && pos.col < self.cols as i32
    }

    /// Get the state of a cell, or `None` if out of bounds
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Set the state of an in-bounds cell
    pub fn set(&mut self, pos: Position, state: CellState) {
        debug_assert!(self.contains(pos));
        let idx = self.index(pos);
        self.cells[idx] = state;
    }

    /// All empty cells in row-major order, recomputed on each call
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.cells[self.index(pos)] == CellState::Empty)
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }
}
