//! Terminal "game renderer" module.
//!
//! A small rendering layer for the simulator. It avoids widget toolkits and
//! renders into a plain framebuffer that a [`Surface`] then shows.
//!
//! - [`GameView`] draws a running session and resyncs its grid to the viewport
//! - [`MenuView`] draws list menus
//! - [`TerminalRenderer`] flushes frames to the real terminal, diffing
//!   against the previous frame

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;
pub mod surface;

pub use clife_core as core;
pub use clife_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
pub use game_view::{hint_line, DrawReport, GameView, Glyphs};
pub use menu_view::{LineKind, MenuLine, MenuScreen, MenuView};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
pub use surface::{HeadlessSurface, Surface};
