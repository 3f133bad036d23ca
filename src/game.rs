use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    BASE_TICK_INTERVAL_MS, GridSize, MIN_TICK_INTERVAL_MS, POINTS_PER_SPEED_STEP,
    TICK_INTERVAL_STEP_MS,
};
use crate::food::{self, Food, FoodPlacement};
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Over,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    BoardFull,
}

/// What one call to [`GameState::advance`] produced.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickOutcome {
    pub status: GameStatus,
    pub ate_food: bool,
}

/// Read-only view of the board handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: GridSize,
    pub head: Position,
    /// Non-head segments, head-adjacent first.
    pub body: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Option<Direction>,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    /// The finished game beat the previous high score.
    pub new_high_score: bool,
    pub tick_interval: Duration,
}

impl Snapshot {
    /// Snake length including the head.
    #[must_use]
    pub fn snake_len(&self) -> usize {
        self.body.len() + 1
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Food>,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub tick_count: u64,
    new_high_score: bool,
    direction: Option<Direction>,
    pending_direction: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh, not-yet-started game with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, high_score: u32) -> Self {
        Self::with_rng(bounds, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, high_score: u32, seed: u64) -> Self {
        Self::with_rng(bounds, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, high_score: u32, rng: StdRng) -> Self {
        debug_assert!(bounds.total_cells() > 1);

        let origin = Self::origin(bounds);
        let mut state = Self {
            snake: Snake::new(origin),
            food: None,
            score: 0,
            high_score,
            status: GameStatus::NotStarted,
            end_reason: None,
            tick_count: 0,
            new_high_score: false,
            direction: None,
            pending_direction: None,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Fixed starting cell: the grid center.
    #[must_use]
    pub fn origin(bounds: GridSize) -> Position {
        Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        }
    }

    /// Puts a single-cell snake back at the origin and clears the round.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Self::origin(self.bounds));
        self.direction = None;
        self.pending_direction = None;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::NotStarted;
        self.end_reason = None;
        self.new_high_score = false;
        self.food = food::spawn(&mut self.rng, self.bounds, &self.snake).food();
    }

    /// Begins play from the title screen. Ignored in any other status.
    pub fn start(&mut self) {
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
            info!("game started on {}x{} grid", self.bounds.width, self.bounds.height);
        }
    }

    /// Resets and starts immediately.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Buffers a direction change for the next tick.
    ///
    /// Reversals of the current heading and input outside of play are dropped.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if !direction_change_is_valid(self.direction, direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return self.outcome(false);
        }

        if let Some(pending) = self.pending_direction.take() {
            self.direction = Some(pending);
        }
        let Some(direction) = self.direction else {
            return self.outcome(false);
        };

        self.tick_count += 1;
        let next_head = self.snake.head().step(direction);

        if !next_head.is_within_bounds(self.bounds) {
            self.finish(EndReason::WallCollision);
            return self.outcome(false);
        }

        if self.snake.occupies(next_head) {
            self.finish(EndReason::SelfCollision);
            return self.outcome(false);
        }

        let ate_food = self.food.is_some_and(|food| food.position == next_head);
        self.snake.advance_to(next_head, ate_food);

        if ate_food {
            self.score += 1;
            match food::spawn(&mut self.rng, self.bounds, &self.snake) {
                FoodPlacement::Placed(food) => self.food = Some(food),
                FoodPlacement::BoardFull => {
                    self.food = None;
                    self.finish(EndReason::BoardFull);
                }
            }
        }

        self.outcome(ate_food)
    }

    /// Milliseconds between ticks at the current score.
    ///
    /// Every `POINTS_PER_SPEED_STEP` points shave `TICK_INTERVAL_STEP_MS` off
    /// the base interval, never going below `MIN_TICK_INTERVAL_MS`.
    #[must_use]
    pub fn current_speed_interval(&self) -> Duration {
        speed_interval_for_score(self.score)
    }

    /// Raises the in-memory high score after a finished game that beat it.
    ///
    /// Returns the new record so the caller can persist it.
    pub fn commit_high_score(&mut self) -> Option<u32> {
        if self.status != GameStatus::Over || self.score <= self.high_score {
            return None;
        }
        self.high_score = self.score;
        self.new_high_score = true;
        Some(self.high_score)
    }

    /// Builds the renderer's view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.bounds,
            head: self.snake.head(),
            body: self.snake.segments().skip(1).copied().collect(),
            food: self.food.map(|food| food.position),
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            status: self.status,
            end_reason: self.end_reason,
            new_high_score: self.new_high_score,
            tick_interval: self.current_speed_interval(),
        }
    }

    /// Heading applied at the last tick, `None` before the first move.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Direction queued for the next tick, if any.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    fn finish(&mut self, reason: EndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        debug!("game over after {} ticks: {reason:?}", self.tick_count);
    }

    fn outcome(&self, ate_food: bool) -> TickOutcome {
        TickOutcome {
            status: self.status,
            ate_food,
        }
    }
}

/// Tick interval for a given score.
#[must_use]
pub fn speed_interval_for_score(score: u32) -> Duration {
    let speed_penalty_ms = u64::from(score / POINTS_PER_SPEED_STEP) * TICK_INTERVAL_STEP_MS;
    let clamped_ms = BASE_TICK_INTERVAL_MS
        .saturating_sub(speed_penalty_ms)
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(clamped_ms)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{EndReason, GameState, GameStatus, speed_interval_for_score};

    fn running_state(bounds: GridSize, seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(bounds, 0, seed);
        state.start();
        state
    }

    #[test]
    fn reset_places_single_cell_at_origin() {
        let state = GameState::new_with_seed(GridSize::default(), 4, 1);

        assert_eq!(state.status, GameStatus::NotStarted);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(10, 10));
        assert_eq!(state.direction(), None);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 4);
        let food = state.food.expect("fresh board has room for food");
        assert!(!state.snake.occupies(food.position));
    }

    #[test]
    fn advance_without_direction_is_noop() {
        let mut state = running_state(GridSize::default(), 2);
        let food_before = state.food;

        let outcome = state.advance();

        assert_eq!(outcome.status, GameStatus::Running);
        assert!(!outcome.ate_food);
        assert_eq!(state.snake.head(), Position::new(10, 10));
        assert_eq!(state.food, food_before);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn advance_before_start_does_not_move() {
        let mut state = GameState::new_with_seed(GridSize::default(), 0, 3);
        state.set_direction(Direction::Right);

        state.advance();

        assert_eq!(state.snake.head(), Position::new(10, 10));
        assert_eq!(state.pending_direction(), None);
    }

    #[test]
    fn single_cell_moves_right() {
        let mut state = running_state(GridSize::default(), 4);
        state.food = Some(Food::new(Position::new(0, 0)));
        state.set_direction(Direction::Right);

        let outcome = state.advance();

        assert_eq!(outcome.status, GameStatus::Running);
        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            vec![Position::new(11, 10)]
        );
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut state = running_state(GridSize::default(), 5);
        state.snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ]);
        state.food = Some(Food::new(Position::new(6, 5)));
        state.set_direction(Direction::Right);

        let outcome = state.advance();

        assert!(outcome.ate_food);
        assert_eq!(state.score, 1);
        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            vec![
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ]
        );
        let food = state.food.expect("food replaced");
        assert_ne!(food.position, Position::new(6, 5));
        assert!(!state.snake.occupies(food.position));
    }

    #[test]
    fn wall_collision_sets_game_over_and_keeps_snake() {
        let mut left = running_state(GridSize::default(), 6);
        left.snake = Snake::new(Position::new(0, 4));
        left.set_direction(Direction::Left);

        assert_eq!(left.advance().status, GameStatus::Over);
        assert_eq!(left.end_reason, Some(EndReason::WallCollision));
        assert_eq!(left.snake.head(), Position::new(0, 4));
        assert_eq!(left.snake.len(), 1);

        let mut right = running_state(GridSize::default(), 7);
        right.snake = Snake::new(Position::new(19, 4));
        right.set_direction(Direction::Right);

        assert_eq!(right.advance().status, GameStatus::Over);
        assert_eq!(right.snake.head(), Position::new(19, 4));
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut state = running_state(GridSize::square(6), 8);
        state.snake = Snake::from_segments(vec![
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(1, 3),
            Position::new(2, 3),
            Position::new(3, 3),
            Position::new(3, 2),
        ]);
        state.food = Some(Food::new(Position::new(5, 5)));
        state.set_direction(Direction::Left);

        let outcome = state.advance();

        assert_eq!(outcome.status, GameStatus::Over);
        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn moving_onto_tail_cell_is_self_collision() {
        let mut state = running_state(GridSize::default(), 16);
        let loop_cells = vec![
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
        ];
        state.snake = Snake::from_segments(loop_cells.clone());
        state.food = Some(Food::new(Position::new(0, 0)));
        state.set_direction(Direction::Down);

        let outcome = state.advance();

        assert_eq!(outcome.status, GameStatus::Over);
        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
        assert_eq!(state.snake.segments().copied().collect::<Vec<_>>(), loop_cells);
    }

    #[test]
    fn reverse_direction_is_ignored() {
        let mut state = running_state(GridSize::default(), 9);
        state.food = Some(Food::new(Position::new(0, 0)));
        state.set_direction(Direction::Right);
        state.advance();

        state.set_direction(Direction::Left);

        assert_eq!(state.pending_direction(), None);
        state.advance();
        assert_eq!(state.direction(), Some(Direction::Right));
        assert_eq!(state.snake.head(), Position::new(12, 10));
    }

    #[test]
    fn quick_turns_are_checked_against_applied_heading() {
        let mut state = running_state(GridSize::default(), 10);
        state.food = Some(Food::new(Position::new(0, 0)));
        state.set_direction(Direction::Right);
        state.advance();

        // Up is accepted, Left would reverse the applied heading.
        state.set_direction(Direction::Up);
        state.set_direction(Direction::Left);
        state.advance();

        assert_eq!(state.direction(), Some(Direction::Up));
        assert_eq!(state.snake.head(), Position::new(11, 9));
    }

    #[test]
    fn direction_input_ignored_when_over() {
        let mut state = running_state(GridSize::default(), 11);
        state.status = GameStatus::Over;

        state.set_direction(Direction::Up);

        assert_eq!(state.pending_direction(), None);
    }

    #[test]
    fn over_is_terminal_until_reset() {
        let mut state = running_state(GridSize::default(), 12);
        state.snake = Snake::new(Position::new(0, 0));
        state.set_direction(Direction::Up);
        state.advance();
        assert_eq!(state.status, GameStatus::Over);

        state.start();
        assert_eq!(state.status, GameStatus::Over);
        state.advance();
        assert_eq!(state.snake.head(), Position::new(0, 0));

        state.restart();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.end_reason, None);
        assert_eq!(state.snake.head(), Position::new(10, 10));
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        let mut state = running_state(
            GridSize {
                width: 2,
                height: 1,
            },
            13,
        );
        state.snake = Snake::new(Position::new(0, 0));
        state.food = Some(Food::new(Position::new(1, 0)));
        state.set_direction(Direction::Right);

        let outcome = state.advance();

        assert!(outcome.ate_food);
        assert_eq!(outcome.status, GameStatus::Over);
        assert_eq!(state.end_reason, Some(EndReason::BoardFull));
        assert_eq!(state.food, None);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn speed_interval_steps_down_and_floors() {
        assert_eq!(speed_interval_for_score(0), Duration::from_millis(150));
        assert_eq!(speed_interval_for_score(4), Duration::from_millis(150));
        assert_eq!(speed_interval_for_score(5), Duration::from_millis(140));
        assert_eq!(speed_interval_for_score(34), Duration::from_millis(90));
        assert_eq!(speed_interval_for_score(35), Duration::from_millis(80));
        assert_eq!(speed_interval_for_score(500), Duration::from_millis(80));

        let mut previous = speed_interval_for_score(0);
        for score in 1..200 {
            let interval = speed_interval_for_score(score);
            assert!(interval <= previous);
            previous = interval;
        }
    }

    #[test]
    fn high_score_commit_only_on_record() {
        let mut state = running_state(GridSize::default(), 14);
        state.high_score = 3;
        state.score = 7;
        assert_eq!(state.commit_high_score(), None, "still running");

        state.status = GameStatus::Over;
        assert_eq!(state.commit_high_score(), Some(7));
        assert_eq!(state.high_score, 7);
        assert!(state.snapshot().new_high_score);
        assert_eq!(state.commit_high_score(), None);

        state.score = 2;
        state.high_score = 5;
        assert_eq!(state.commit_high_score(), None);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn snapshot_marks_head_separately() {
        let mut state = running_state(GridSize::default(), 15);
        state.snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ]);

        let snapshot = state.snapshot();

        assert_eq!(snapshot.head, Position::new(5, 5));
        assert_eq!(snapshot.body, vec![Position::new(4, 5), Position::new(3, 5)]);
        assert_eq!(snapshot.snake_len(), 3);
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.tick_interval, Duration::from_millis(150));
    }
}
