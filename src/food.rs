use rand::Rng;

use crate::config::{GridSize, MAX_FOOD_SPAWN_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Result of trying to put new food on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodPlacement {
    Placed(Food),
    /// Every cell is covered by the snake.
    BoardFull,
}

impl FoodPlacement {
    #[must_use]
    pub fn food(self) -> Option<Food> {
        match self {
            Self::Placed(food) => Some(food),
            Self::BoardFull => None,
        }
    }
}

/// Places food on a cell not covered by the snake.
///
/// Samples uniformly and retries on occupied cells. After
/// `MAX_FOOD_SPAWN_ATTEMPTS` misses it picks uniformly among the remaining
/// free cells instead, so a nearly full board still terminates.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> FoodPlacement {
    if snake.len() >= bounds.total_cells() {
        return FoodPlacement::BoardFull;
    }

    for _ in 0..MAX_FOOD_SPAWN_ATTEMPTS {
        let candidate = random_position(rng, bounds);
        if !snake.occupies(candidate) {
            return FoodPlacement::Placed(Food::new(candidate));
        }
    }

    spawn_from_free_cells(rng, bounds, snake)
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

fn spawn_from_free_cells<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> FoodPlacement {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return FoodPlacement::BoardFull;
    }

    let index = rng.gen_range(0..candidates.len());
    FoodPlacement::Placed(Food::new(candidates[index]))
}
