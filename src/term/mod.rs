//! Terminal rendering module.
//!
//! Renders into a plain framebuffer of styled character cells which a
//! crossterm backend then flushes. The view layer is pure, so presentation
//! is testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
