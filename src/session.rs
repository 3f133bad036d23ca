use log::{info, warn};

use crate::config::GridSize;
use crate::game::{GameState, GameStatus, Snapshot, TickOutcome};
use crate::input::GameInput;
use crate::score::HighScoreStore;

/// One player's run of games against a persisted high score.
///
/// The store is read once here at construction and written only when a
/// finished game sets a new record.
#[derive(Debug)]
pub struct Session<S: HighScoreStore> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    /// Loads the high score and builds a fresh game.
    pub fn new(bounds: GridSize, store: S) -> Self {
        let high_score = load_or_default(&store);
        Self {
            state: GameState::new(bounds, high_score),
            store,
        }
    }

    /// Same as [`Session::new`] with a deterministic RNG.
    pub fn new_with_seed(bounds: GridSize, store: S, seed: u64) -> Self {
        let high_score = load_or_default(&store);
        Self {
            state: GameState::new_with_seed(bounds, high_score, seed),
            store,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Applies one external input event. Returns false on quit.
    pub fn apply_input(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Direction(direction) => self.state.set_direction(direction),
            GameInput::Confirm => match self.state.status {
                GameStatus::NotStarted => self.state.start(),
                GameStatus::Over => self.state.restart(),
                GameStatus::Running => {}
            },
            GameInput::Restart => self.state.restart(),
            GameInput::Quit => return false,
        }
        true
    }

    /// Advances one tick and persists a new record when the game just ended.
    pub fn advance(&mut self) -> TickOutcome {
        let was_running = self.state.status == GameStatus::Running;
        let outcome = self.state.advance();

        if was_running && outcome.status == GameStatus::Over {
            self.on_game_over();
        }

        outcome
    }

    fn on_game_over(&mut self) {
        info!(
            "game over: score {} ({:?})",
            self.state.score, self.state.end_reason
        );

        let Some(record) = self.state.commit_high_score() else {
            return;
        };

        match self.store.save(record) {
            Ok(()) => info!("new high score {record} saved"),
            Err(error) => warn!("failed to save high score {record}: {error}"),
        }
    }
}

fn load_or_default<S: HighScoreStore>(store: &S) -> u32 {
    match store.load() {
        Ok(score) => {
            info!("loaded high score {score}");
            score
        }
        Err(error) => {
            warn!("could not load high score, starting from 0: {error}");
            0
        }
    }
}
