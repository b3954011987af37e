//! Random perfect mazes for a terminal player to walk through.
//!
//! [`maze::GridMaze`] carves and answers wall queries, [`game::Game`] moves
//! the player and swaps in a fresh maze at the goal, and the `input` and
//! `render` modules connect both to a crossterm terminal.

pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod input;
pub mod maze;
pub mod player;
pub mod render;
pub mod terminal;

pub use direction::{Direction, Pos};
pub use error::MazeError;
pub use game::{Action, Game, Outcome};
pub use maze::{GridMaze, Walls};
