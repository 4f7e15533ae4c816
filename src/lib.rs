//! Conway's CLIfe (workspace facade crate).
//!
//! Re-exports the member crates as `clife::{core, engine, input, store, term, types}`
//! so the binary, integration tests and benchmarks use one import root.

pub use clife_core as core;
pub use clife_engine as engine;
pub use clife_input as input;
pub use clife_store as store;
pub use clife_term as term;
pub use clife_types as types;
