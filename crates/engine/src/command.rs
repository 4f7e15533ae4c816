//! Commands applied to a running session.
//!
//! Timer ticks, key presses and terminal resizes are all turned into
//! [`Command`]s. The coordinator applies them one at a time in arrival order.

use crate::types::Speed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one generation (no-op while paused).
    Evolve,
    /// Draw the grid. Unforced draws are skipped while paused.
    Draw { force: bool },
    SetPaused(bool),
    SetSpeed(Speed),
    /// The terminal changed size.
    Resize { cols: u16, rows: u16 },
    /// End the session and clear its grid.
    Terminate,
}

/// Whether the frame loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
