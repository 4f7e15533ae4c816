//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input handling, persistence).
//!
//! # Timing and speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FRAME_MS` | 500 | Frame interval at 1x speed |
//! | `SPEED_STEP_TENTHS` | 5 | Speed change per key press (0.5x) |
//! | `MAX_SPEED_TENTHS` | 50 | Upper speed bound (5.0x) |
//! | `INPUT_COOLDOWN_MS` | 100 | Debounce window for key events |
//!
//! Speed is stored in tenths so repeated stepping stays exact.
//!
//! # Examples
//!
//! ```
//! use clife_types::{Cell, Speed, BASE_FRAME_MS};
//!
//! assert_eq!(Cell::from_raw(Some(1)), Cell::Alive);
//! assert_eq!(Cell::from_raw(Some(7)), Cell::Malformed);
//! assert_eq!(Cell::from_raw(None), Cell::Malformed);
//!
//! let speed = Speed::NORMAL.faster(5, 50);
//! assert_eq!(speed.to_string(), "1.5x");
//! assert_eq!(speed.frame_interval_ms(BASE_FRAME_MS), 333);
//! ```

use std::fmt;

/// Frame interval at 1x speed, in milliseconds.
pub const BASE_FRAME_MS: u64 = 500;

/// Speed change applied per speed-up/down key press, in tenths (0.5x).
pub const SPEED_STEP_TENTHS: u16 = 5;

/// Maximum speed multiplier, in tenths (5.0x).
pub const MAX_SPEED_TENTHS: u16 = 50;

/// Minimum interval between two accepted key events.
pub const INPUT_COOLDOWN_MS: u64 = 100;

/// Extra rows/columns required around the active area before the viewport
/// is considered large enough.
pub const DEFAULT_SIZE_SLACK: u16 = 2;

/// Default padding around the board box: left, right, top, bottom.
pub const DEFAULT_PADDING: [u16; 4] = [1, 1, 2, 2];

/// Default glyph for a live cell.
pub const DEFAULT_ALIVE_CHAR: char = '■';

/// Default glyph for a dead cell.
pub const DEFAULT_DEAD_CHAR: char = ' ';

/// Glyph choices offered by the settings screen for live cells.
pub const ALIVE_CHAR_CHOICES: [char; 8] = ['∙', 'x', 'o', '◘', '■', '♦', '☼', '█'];

/// Glyph choices offered by the settings screen for dead cells.
pub const DEAD_CHAR_CHOICES: [char; 6] = [' ', '_', '.', '\'', '∟', '…'];

/// Application display name (window title, menu header).
pub const APP_NAME: &str = "Conway's CLIfe";

/// A single cell of the simulated universe.
///
/// - **Dead** / **Alive**: the two states of the automaton
/// - **Malformed**: a value from external data that is not the integer 0 or 1
///   (another number, a string, `null`); it is drawn as dead but carried
///   through evolution and resync untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    Malformed,
}

impl Cell {
    /// Interpret a preset pattern value; `None` stands for a non-integer.
    pub fn from_raw(raw: Option<i64>) -> Self {
        match raw {
            Some(0) => Cell::Dead,
            Some(1) => Cell::Alive,
            _ => Cell::Malformed,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Numeric weight used when summing neighbors; `None` for malformed cells.
    pub fn weight(self) -> Option<u8> {
        match self {
            Cell::Dead => Some(0),
            Cell::Alive => Some(1),
            Cell::Malformed => None,
        }
    }
}

/// Simulation speed multiplier in tenths (`Speed(10)` is 1.0x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u16);

impl Speed {
    pub const NORMAL: Speed = Speed(10);

    pub const fn from_tenths(tenths: u16) -> Self {
        Speed(tenths)
    }

    pub fn tenths(self) -> u16 {
        self.0
    }

    /// Step up by `step`, clamped to `[step, max]`.
    pub fn faster(self, step: u16, max: u16) -> Self {
        Speed(self.0.saturating_add(step)).clamped(step, max)
    }

    /// Step down by `step`, clamped to `[step, max]`.
    pub fn slower(self, step: u16, max: u16) -> Self {
        Speed(self.0.saturating_sub(step)).clamped(step, max)
    }

    /// Clamp into `[step, max]`. A `step` above `max` pins to `max`.
    pub fn clamped(self, step: u16, max: u16) -> Self {
        let lo = step.min(max).max(1);
        Speed(self.0.clamp(lo, max.max(lo)))
    }

    /// Delay between frames for a given base interval at this speed.
    ///
    /// Saturates instead of overflowing for huge base intervals.
    pub fn frame_interval_ms(self, base_ms: u64) -> u64 {
        base_ms.saturating_mul(10) / u64::from(self.0.max(1))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::NORMAL
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}x", self.0 / 10)
        } else {
            write!(f, "{}.{}x", self.0 / 10, self.0 % 10)
        }
    }
}

/// Actions available while a game session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pause or resume the simulation
    TogglePause,
    /// Decrease the speed multiplier by one step
    SpeedDown,
    /// Increase the speed multiplier by one step
    SpeedUp,
    /// End the session and go back to the menu
    ReturnToMenu,
}

/// Actions available on menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_raw_flags_unknown_values() {
        assert_eq!(Cell::from_raw(Some(0)), Cell::Dead);
        assert_eq!(Cell::from_raw(Some(1)), Cell::Alive);
        assert_eq!(Cell::from_raw(Some(-1)), Cell::Malformed);
        assert_eq!(Cell::from_raw(None), Cell::Malformed);
        assert_eq!(Cell::Malformed.weight(), None);
        assert!(!Cell::Malformed.is_alive());
    }

    #[test]
    fn test_speed_steps_are_clamped() {
        let mut s = Speed::NORMAL;
        for _ in 0..20 {
            s = s.faster(SPEED_STEP_TENTHS, MAX_SPEED_TENTHS);
        }
        assert_eq!(s.tenths(), MAX_SPEED_TENTHS);

        for _ in 0..20 {
            s = s.slower(SPEED_STEP_TENTHS, MAX_SPEED_TENTHS);
        }
        assert_eq!(s.tenths(), SPEED_STEP_TENTHS);
    }

    #[test]
    fn test_speed_display_drops_trailing_zero() {
        assert_eq!(Speed::NORMAL.to_string(), "1x");
        assert_eq!(Speed::from_tenths(5).to_string(), "0.5x");
        assert_eq!(Speed::from_tenths(25).to_string(), "2.5x");
    }

    #[test]
    fn test_frame_interval_divides_base_by_speed() {
        assert_eq!(Speed::NORMAL.frame_interval_ms(500), 500);
        assert_eq!(Speed::from_tenths(20).frame_interval_ms(500), 250);
        assert_eq!(Speed::from_tenths(5).frame_interval_ms(500), 1000);
    }

    #[test]
    fn test_frame_interval_saturates_for_huge_base() {
        assert_eq!(Speed::NORMAL.frame_interval_ms(u64::MAX / 5), u64::MAX / 10);
        assert_eq!(Speed::from_tenths(5).frame_interval_ms(u64::MAX), u64::MAX / 5);
    }
}
