use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{CellState, Grid, Position};

/// Most direction changes a session will hold ahead of the next tick.
/// Anything past that is dropped rather than queued indefinitely.
pub const MAX_QUEUED_TURNS: usize = 2;

/// The snake's body, head-first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: VecDeque<Position>,
}

impl Snake {
    pub fn new(body: impl IntoIterator<Item = Position>) -> Self {
        Self {
            body: body.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body positions from head to tail
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }
}

/// One playthrough's full mutable state
///
/// Holds the board, the snake, the committed facing direction and the queue
/// of direction changes waiting for the next tick. Only
/// [`GameEngine::advance`](super::GameEngine::advance) mutates committed
/// state; `change_direction` only feeds the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub direction: Direction,
    pub score: u32,
    pub game_over: bool,
    queued_turns: VecDeque<Direction>,
}

impl GameState {
    /// Create a session around an already-seeded snake, facing `direction`.
    /// Marks the snake's cells on the grid; food is placed by the engine.
    pub fn new(rows: usize, cols: usize, snake: Snake, direction: Direction) -> Self {
        let mut grid = Grid::new(rows, cols);
        for pos in snake.positions() {
            grid.set(pos, CellState::Snake);
        }

        Self {
            grid,
            snake,
            direction,
            score: 0,
            game_over: false,
            queued_turns: VecDeque::new(),
        }
    }

    pub fn head_position(&self) -> Position {
        self.snake.head()
    }

    pub fn tail_position(&self) -> Position {
        self.snake.tail()
    }

    /// Snake cells from head to tail
    pub fn snake_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.positions()
    }

    /// Cell state at (row, col), or `None` if out of bounds
    pub fn cell_at(&self, row: i32, col: i32) -> Option<CellState> {
        self.grid.cell(Position::new(row, col))
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The direction a queued change is measured against: the last queued
    /// turn if any, else the committed facing direction.
    pub fn last_direction(&self) -> Direction {
        self.queued_turns.back().copied().unwrap_or(self.direction)
    }

    /// Whether a requested turn would be admitted right now
    pub fn can_change_direction(&self, direction: Direction) -> bool {
        if self.queued_turns.len() >= MAX_QUEUED_TURNS {
            return false;
        }

        let last = self.last_direction();
        direction != last && direction != last.opposite()
    }

    /// Queue a direction change for the next tick
    ///
    /// Requests that would reverse the snake into its own neck, repeat the
    /// direction already in effect, or overflow the queue are silently
    /// dropped.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.can_change_direction(direction) {
            self.queued_turns.push_back(direction);
        }
    }

    /// Pop the next queued turn, if any
    pub(super) fn take_queued_turn(&mut self) -> Option<Direction> {
        self.queued_turns.pop_front()
    }

    /// Push a new head cell, growing the body by one
    pub(super) fn add_head(&mut self, pos: Position) {
        self.snake.body.push_front(pos);
        self.grid.set(pos, CellState::Snake);
    }

    /// Vacate the tail cell and drop it from the body
    pub(super) fn remove_tail(&mut self) {
        if let Some(tail) = self.snake.body.pop_back() {
            self.grid.set(tail, CellState::Empty);
        }
    }
}
