//! Terminal rendering for the arcade.
//!
//! Views draw into a plain framebuffer that the renderer flushes to the
//! terminal. No widget toolkit is involved; every screen is a function from
//! state to cells, so all of them can be tested without a terminal.

pub mod canvas_view;
pub mod fb;
pub mod game_view;
pub mod home_view;
pub mod renderer;

pub use secret_arcade_core as core;
pub use secret_arcade_types as types;

pub use canvas_view::{CanvasArea, CanvasView};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use home_view::HomeView;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
