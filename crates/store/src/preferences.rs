//! The preferences file edited by the settings screen.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::{DEFAULT_ALIVE_CHAR, DEFAULT_DEAD_CHAR};

/// User preferences. Keys are camelCase on disk (`aliveCellChar`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_alive")]
    pub alive_cell_char: char,
    #[serde(default = "default_dead")]
    pub dead_cell_char: char,
    /// `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_color: Option<String>,
}

fn default_alive() -> char {
    DEFAULT_ALIVE_CHAR
}

fn default_dead() -> char {
    DEFAULT_DEAD_CHAR
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            alive_cell_char: DEFAULT_ALIVE_CHAR,
            dead_cell_char: DEFAULT_DEAD_CHAR,
            alive_color: None,
            dead_color: None,
        }
    }
}

impl Preferences {
    /// Read preferences. A missing file is not an error and yields defaults.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(StoreError::io(path, e)),
        };
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| StoreError::io(path, e))
    }

    pub fn alive_rgb(&self) -> Option<(u8, u8, u8)> {
        self.alive_color.as_deref().and_then(parse_hex_color)
    }

    pub fn dead_rgb(&self) -> Option<(u8, u8, u8)> {
        self.dead_color.as_deref().and_then(parse_hex_color)
    }
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
