//! Core module - pure game logic with no external dependencies
//!
//! Game rules, state management and logic. Zero dependencies on UI,
//! timing sources or I/O, so everything here is unit-testable by direct
//! calls (gravity is injected by the driver through `GameState::tick`).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use game_state::{ActivePiece, GameState, GhostPiece};
pub use pieces::Shape;
pub use rng::{PiecePicker, SimpleRng};
