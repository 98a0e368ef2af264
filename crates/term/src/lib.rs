//! Terminal presentation for the snake simulation.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: raw-mode terminal lifecycle and frame flushing
//!
//! Only [`renderer`] touches the terminal; everything else is testable
//! without one.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
