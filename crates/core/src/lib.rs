//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the automaton, the session state, and the viewport
//! arithmetic. It has **zero dependencies** on terminals, files, or timers,
//! making it:
//!
//! - **Deterministic**: same grid in, same grid out
//! - **Testable**: every rule and sizing decision is a plain function
//! - **Portable**: the frame loop and renderer sit on top of it
//!
//! # Module Structure
//!
//! - [`grid`]: rows of cells with bounds-checked neighbor lookup
//! - [`rules`]: the Game of Life step (no wraparound)
//! - [`viewport`]: terminal size -> usable cell area, active-area fit checks
//! - [`session`]: grid plus pause/speed/iteration state of a running game
//! - [`rng`]: seeded random starting grids
//!
//! # Example
//!
//! ```
//! use clife_core::{Grid, Session};
//!
//! let blinker = Grid::from_ascii("
//!     ...
//!     ###
//!     ...
//! ");
//!
//! let mut session = Session::new("Blinker", blinker.clone());
//! session.set_paused(false);
//!
//! session.advance();
//! assert_eq!(session.grid().to_ascii(), ".#.\n.#.\n.#.\n");
//!
//! session.advance();
//! assert_eq!(session.grid(), &blinker);
//! assert_eq!(session.iteration(), 2);
//! ```

pub mod grid;
pub mod rng;
pub mod rules;
pub mod session;
pub mod viewport;

pub use clife_types as types;

pub use grid::Grid;
pub use rng::{random_grid, SimpleRng};
pub use rules::{evolve, live_neighbors, next_generation, outcome, RuleOutcome};
pub use session::Session;
pub use viewport::{check_fit, ActiveArea, Padding, SizeCheck, ViewportGeometry};
