//! Preset files.
//!
//! A preset is a JSON document:
//!
//! ```json
//! { "name": "Glider", "size": [10, 10], "pattern": [[0, 1, 0], [0, 0, 1], [1, 1, 1]] }
//! ```
//!
//! `pattern` values other than the integers 0 and 1 (other numbers, strings,
//! `null`, nested arrays) are kept as malformed cells. The
//! declared `size` is informational (shown in the preset list); the grid is
//! resized to the viewport on first draw.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Grid;
use crate::error::StoreError;
use crate::types::Cell;

#[derive(Debug, Serialize, Deserialize)]
struct PresetDocument {
    name: String,
    size: [usize; 2],
    pattern: Vec<Vec<Value>>,
}

/// A parsed preset ready to be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub grid: Grid,
}

impl Preset {
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let doc: PresetDocument = serde_json::from_str(text)?;
        let [width, height] = doc.size;
        if width == 0 || height == 0 {
            return Err(StoreError::InvalidSize { width, height });
        }

        let rows = doc
            .pattern
            .into_iter()
            .map(|row| row.iter().map(|v| Cell::from_raw(v.as_i64())).collect())
            .collect();

        Ok(Self {
            name: doc.name,
            width,
            height,
            grid: Grid::from_rows(rows),
        })
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Name the session started from this preset is shown under.
    pub fn session_name(&self) -> String {
        format!("Preset: {}", self.name)
    }

    /// `name [WxH]`, as listed in the preset browser.
    pub fn label(&self) -> String {
        format!("{} [{}x{}]", self.name, self.width, self.height)
    }
}

/// One file found in the presets directory.
#[derive(Debug, Clone)]
pub enum PresetEntry {
    Ready {
        file_name: String,
        preset: Preset,
    },
    Corrupted {
        file_name: String,
        reason: String,
    },
}

impl PresetEntry {
    pub fn file_name(&self) -> &str {
        match self {
            PresetEntry::Ready { file_name, .. } | PresetEntry::Corrupted { file_name, .. } => {
                file_name
            }
        }
    }

    pub fn preset(&self) -> Option<&Preset> {
        match self {
            PresetEntry::Ready { preset, .. } => Some(preset),
            PresetEntry::Corrupted { .. } => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            PresetEntry::Ready { preset, .. } => preset.label(),
            PresetEntry::Corrupted { file_name, .. } => format!("{} [CORRUPTED]", file_name),
        }
    }
}

/// List every file in `dir`, sorted by file name.
///
/// A file that cannot be read or parsed becomes a [`PresetEntry::Corrupted`]
/// entry instead of failing the scan. A missing directory yields an empty
/// list; any other directory error is returned.
pub fn scan_presets(dir: &Path) -> Result<Vec<PresetEntry>, StoreError> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(dir, e)),
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files
        .into_iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match Preset::load(&path) {
                Ok(preset) => PresetEntry::Ready { file_name, preset },
                Err(e) => PresetEntry::Corrupted {
                    file_name,
                    reason: e.to_string(),
                },
            }
        })
        .collect())
}
