//! Blockfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure, deterministic [`core`] (board, piece
//! catalog, game state), a [`term`] rendering layer, an [`input`] key
//! mapping, and shared [`types`]. The binary in `main.rs` wires them into a
//! synchronous game loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
