//! Classic single-player grid Snake.
//!
//! [`game::GameState`] holds all rules; everything else feeds it input,
//! persists its high score, or draws its [`game::Snapshot`].

pub mod config;
pub mod food;
pub mod game;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
