//! Core game logic - pure, deterministic, and testable
//!
//! Everything the hidden games need to run, with **zero dependencies** on
//! terminal I/O, so the same seed always replays the same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with collision, locking and row clearing
//! - [`shape`]: the seven tetromino matrices and 90° matrix rotation
//! - [`rng`]: seedable LCG with uniform piece selection
//! - [`game_state`]: the Tetris engine (piece, score, gravity, status)
//! - [`snapshot`]: a plain copy of engine state for views
//! - [`canvas`]: the freehand drawing surface
//!
//! # Game Rules
//!
//! - **Uniform pieces**: every spawn picks one of 7 kinds at random (no bag, no preview, no hold)
//! - **Simple rotation**: 90° clockwise matrix turn, applied only if it fits (no wall kicks)
//! - **Immediate lock**: a piece locks the moment it cannot move down
//! - **Scoring**: 100 points per cleared row
//! - **Gravity**: starts at 1000ms per row, 50ms faster per clearing lock, never below 100ms
//! - **Game over**: a piece that locks with any cell above the top row
//!
//! # Example
//!
//! ```
//! use secret_arcade_core::GameState;
//! use secret_arcade_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod canvas;
pub mod game_state;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use secret_arcade_types as types;

pub use board::{Board, LockResult};
pub use canvas::Canvas;
pub use game_state::{DropOutcome, GameState, LockEvent, Piece};
pub use rng::{PiecePicker, SimpleRng};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
