//! Frame loop, menus and configuration.
//!
//! A running game is owned by a [`Coordinator`], which applies [`Command`]s
//! one at a time. [`run_session`] feeds it from the tick timer and the
//! terminal event stream; [`App`] wraps sessions in the menus.

pub mod app;
pub mod command;
pub mod config;
pub mod coordinator;
pub mod menu;
pub mod runtime;
pub mod scheduler;

pub use clife_core as core;
pub use clife_input as input;
pub use clife_store as store;
pub use clife_term as term;
pub use clife_types as types;

pub use app::App;
pub use command::{Command, Flow};
pub use config::GameConfig;
pub use coordinator::Coordinator;
pub use menu::{Menu, MenuOutcome, Page};
pub use runtime::{run_session, SessionEnd};
pub use scheduler::{LoopState, Scheduler, TICK};
