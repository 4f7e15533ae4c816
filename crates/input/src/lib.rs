//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the frame loop. It maps
//! `crossterm` key events into [`crate::types::GameAction`] /
//! [`crate::types::MenuAction`] values and gates them through a debounce
//! window, since raw terminal input floods repeated presses while a key is
//! held.

pub mod controller;
pub mod debounce;
pub mod map;

pub use clife_types as types;

pub use controller::{Input, InputController};
pub use debounce::DebounceGate;
pub use map::{game_action, menu_action, should_quit};
