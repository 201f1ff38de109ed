use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{GameConfig, INITIAL_SNAKE_LENGTH};
use super::direction::Direction;
use super::grid::{CellState, Position};
use super::state::{GameState, Snake};

/// Type of collision that ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What a single tick did, reported to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the session is over after this tick
    pub terminated: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// The collision that ended the session, if one did
    pub collision: Option<CollisionType>,
    /// Food placement found no empty cell and was skipped
    pub board_full: bool,
}

impl TickOutcome {
    fn moved() -> Self {
        Self {
            terminated: false,
            ate_food: false,
            collision: None,
            board_full: false,
        }
    }
}

/// Where a prospective head move lands
enum MoveClass {
    /// Off the board
    Outside,
    /// A cell the head may enter
    Open,
    /// A body cell that is not vacating this tick
    Body,
    /// A food cell
    Food,
}

/// The game engine: owns the configuration and the PRNG, seeds sessions
/// and advances them one tick at a time
///
/// Sessions are plain data ([`GameState`]); all mutation of committed state
/// happens in [`advance`](Self::advance).
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a deterministic PRNG, for tests
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh session: a 4-cell snake in the middle row, head at
    /// column 4 facing Right, and one food cell
    ///
    /// Fails when the configured board cannot hold the seeded snake.
    pub fn new_session(&mut self) -> Result<GameState> {
        self.config.validate()?;

        let row = (self.config.rows / 2) as i32;
        let body = (1..=INITIAL_SNAKE_LENGTH as i32)
            .rev()
            .map(|col| Position::new(row, col));
        let snake = Snake::new(body);

        let mut state = GameState::new(self.config.rows, self.config.cols, snake, Direction::Right);
        self.place_food(&mut state);

        Ok(state)
    }

    /// Advance the session by one tick
    ///
    /// Commits the oldest queued turn, moves the head one cell, and resolves
    /// the move: off-board or body cells end the session, open cells shift
    /// the snake, food cells grow it and respawn food. Calling this on a
    /// finished session changes nothing.
    pub fn advance(&mut self, state: &mut GameState) -> TickOutcome {
        if state.game_over {
            return TickOutcome {
                terminated: true,
                ..TickOutcome::moved()
            };
        }

        if let Some(turn) = state.take_queued_turn() {
            state.direction = turn;
        }

        let candidate = state.head_position().translate(state.direction);

        match Self::classify(state, candidate) {
            MoveClass::Outside => {
                state.game_over = true;
                TickOutcome {
                    terminated: true,
                    collision: Some(CollisionType::Wall),
                    ..TickOutcome::moved()
                }
            }
            MoveClass::Body => {
                state.game_over = true;
                TickOutcome {
                    terminated: true,
                    collision: Some(CollisionType::SelfCollision),
                    ..TickOutcome::moved()
                }
            }
            MoveClass::Open => {
                state.remove_tail();
                state.add_head(candidate);
                TickOutcome::moved()
            }
            MoveClass::Food => {
                state.add_head(candidate);
                state.score += 1;
                let placed = self.place_food(state);
                TickOutcome {
                    ate_food: true,
                    board_full: !placed,
                    ..TickOutcome::moved()
                }
            }
        }
    }

    fn classify(state: &GameState, candidate: Position) -> MoveClass {
        match state.grid.cell(candidate) {
            None => MoveClass::Outside,
            // The tail vacates its cell this same tick, so following it is
            // not a collision
            Some(_) if candidate == state.tail_position() => MoveClass::Open,
            Some(CellState::Empty) => MoveClass::Open,
            Some(CellState::Snake) => MoveClass::Body,
            Some(CellState::Food) => MoveClass::Food,
        }
    }

    /// Put food on a uniformly random empty cell
    ///
    /// Returns false when no cell is empty; the board is left unchanged and
    /// the session continues without food until a cell frees up.
    fn place_food(&mut self, state: &mut GameState) -> bool {
        let empty: Vec<Position> = state.grid.empty_positions().collect();

        if empty.is_empty() {
            return false;
        }

        let pos = empty[self.rng.gen_range(0..empty.len())];
        state.grid.set(pos, CellState::Food);
        true
    }
}
