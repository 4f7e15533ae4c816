//! On-disk collaborators of the game: preset files and the preferences file.
//!
//! Both are small JSON documents read with `serde_json`. Nothing here touches
//! the terminal; callers decide how to report a [`StoreError`].

pub mod error;
pub mod preferences;
pub mod preset;

pub use clife_core as core;
pub use clife_types as types;

pub use error::StoreError;
pub use preferences::{parse_hex_color, Preferences};
pub use preset::{scan_presets, Preset, PresetEntry};
