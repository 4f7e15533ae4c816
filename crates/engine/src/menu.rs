//! Menu screens shown between sessions.
//!
//! [`Menu`] is a small state machine driven by [`MenuAction`]s. It never
//! touches the terminal; [`Menu::screen`] describes what to draw and
//! [`Menu::handle`] says what the caller should do next.

use std::path::PathBuf;

use tracing::warn;

use crate::store::{scan_presets, Preferences, Preset, PresetEntry};
use crate::term::{MenuLine, MenuScreen};
use crate::types::{MenuAction, ALIVE_CHAR_CHOICES, APP_NAME, DEAD_CHAR_CHOICES};

const MAIN_ITEMS: [&str; 4] = ["Presets", "Random", "Settings", "About"];
const RANDOM_ITEMS: [&str; 1] = ["True Random"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Presets,
    Random,
    Settings,
    About,
}

/// What the caller should do after a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Nothing beyond redrawing the menu.
    Stay,
    StartPreset(Preset),
    /// Start a random grid of the given generator.
    StartRandom(&'static str),
    /// Persist these preferences and apply them.
    SavePreferences(Preferences),
    Exit,
}

#[derive(Debug, Clone)]
pub struct Menu {
    page: Page,
    cursor: usize,
    presets_dir: PathBuf,
    presets: Vec<PresetEntry>,
    preferences: Preferences,
    draft: Preferences,
}

impl Menu {
    pub fn new(presets_dir: PathBuf, preferences: Preferences) -> Self {
        Self {
            page: Page::Main,
            cursor: 0,
            presets_dir,
            presets: Vec::new(),
            draft: preferences.clone(),
            preferences,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Go back to the main menu (after a session ends).
    pub fn reset(&mut self) {
        self.open(Page::Main);
    }

    pub fn handle(&mut self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                MenuOutcome::Stay
            }
            MenuAction::Down => {
                if self.cursor + 1 < self.row_count() {
                    self.cursor += 1;
                }
                MenuOutcome::Stay
            }
            MenuAction::Left | MenuAction::Right => {
                if self.page == Page::Settings {
                    self.cycle_setting(action == MenuAction::Right);
                }
                MenuOutcome::Stay
            }
            MenuAction::Select => self.select(),
            MenuAction::Back => match self.page {
                Page::Main => MenuOutcome::Exit,
                Page::Settings => {
                    self.draft = self.preferences.clone();
                    self.open(Page::Main);
                    MenuOutcome::Stay
                }
                _ => {
                    self.open(Page::Main);
                    MenuOutcome::Stay
                }
            },
        }
    }

    /// Describe the current page for the menu renderer.
    pub fn screen(&self) -> MenuScreen {
        match self.page {
            Page::Main => MenuScreen {
                heading: APP_NAME.to_string(),
                lines: MAIN_ITEMS.iter().map(|s| MenuLine::item(*s)).collect(),
                cursor: Some(self.cursor),
                footer: "[▲ ▼] Navigate - [Enter] Select - [Escape] Exit".to_string(),
            },
            Page::Presets if self.presets.is_empty() => MenuScreen {
                heading: "No presets found".to_string(),
                lines: vec![MenuLine::text(format!(
                    "Put preset files into {}",
                    self.presets_dir.display()
                ))],
                cursor: None,
                footer: "[Escape] Back".to_string(),
            },
            Page::Presets => MenuScreen {
                heading: format!("{} presets found:", self.presets.len()),
                lines: self
                    .presets
                    .iter()
                    .map(|entry| match entry {
                        PresetEntry::Ready { .. } => MenuLine::item(entry.label()),
                        PresetEntry::Corrupted { .. } => MenuLine::disabled(entry.label()),
                    })
                    .collect(),
                cursor: Some(self.cursor),
                footer: "[▲ ▼] Navigate - [Enter] Start - [Escape] Back".to_string(),
            },
            Page::Random => MenuScreen {
                heading: "Random".to_string(),
                lines: RANDOM_ITEMS.iter().map(|s| MenuLine::item(*s)).collect(),
                cursor: Some(self.cursor),
                footer: "[Enter] Start - [Escape] Back".to_string(),
            },
            Page::Settings => MenuScreen {
                heading: "Settings".to_string(),
                lines: vec![
                    MenuLine::item(format!("Alive Cell: ◄ {} ►", self.draft.alive_cell_char)),
                    MenuLine::item(format!("Dead Cell:  ◄ {} ►", self.draft.dead_cell_char)),
                ],
                cursor: Some(self.cursor),
                footer: "[◄ ►] Change - [Enter] Save - [Escape] Discard".to_string(),
            },
            Page::About => MenuScreen {
                heading: format!("About {}", APP_NAME),
                lines: vec![
                    MenuLine::text(format!("Version: {}", env!("CARGO_PKG_VERSION"))),
                    MenuLine::text("Conway's Game of Life (B3/S23) on a bounded grid"),
                    MenuLine::text("Licensed under the MIT License"),
                ],
                cursor: None,
                footer: "[Enter] Back".to_string(),
            },
        }
    }

    fn row_count(&self) -> usize {
        match self.page {
            Page::Main => MAIN_ITEMS.len(),
            Page::Presets => self.presets.len(),
            Page::Random => RANDOM_ITEMS.len(),
            Page::Settings => 2,
            Page::About => 0,
        }
    }

    fn open(&mut self, page: Page) {
        if page == Page::Presets {
            self.presets = match scan_presets(&self.presets_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, dir = %self.presets_dir.display(), "cannot list presets");
                    Vec::new()
                }
            };
            for entry in &self.presets {
                if let PresetEntry::Corrupted { file_name, reason } = entry {
                    warn!(file = %file_name, reason = %reason, "corrupted preset");
                }
            }
        }
        self.page = page;
        self.cursor = 0;
    }

    fn select(&mut self) -> MenuOutcome {
        match self.page {
            Page::Main => {
                let page = match self.cursor {
                    0 => Page::Presets,
                    1 => Page::Random,
                    2 => Page::Settings,
                    _ => Page::About,
                };
                self.open(page);
                MenuOutcome::Stay
            }
            Page::Presets => match self.presets.get(self.cursor).and_then(PresetEntry::preset) {
                Some(preset) => MenuOutcome::StartPreset(preset.clone()),
                None => MenuOutcome::Stay,
            },
            Page::Random => MenuOutcome::StartRandom(RANDOM_ITEMS[0]),
            Page::Settings => {
                self.preferences = self.draft.clone();
                self.open(Page::Main);
                MenuOutcome::SavePreferences(self.preferences.clone())
            }
            Page::About => {
                self.open(Page::Main);
                MenuOutcome::Stay
            }
        }
    }

    fn cycle_setting(&mut self, forward: bool) {
        match self.cursor {
            0 => {
                self.draft.alive_cell_char =
                    cycle(&ALIVE_CHAR_CHOICES, self.draft.alive_cell_char, forward)
            }
            _ => {
                self.draft.dead_cell_char =
                    cycle(&DEAD_CHAR_CHOICES, self.draft.dead_cell_char, forward)
            }
        }
    }
}

/// Next (or previous) entry of `choices` after `current`, wrapping around.
///
/// A value not in `choices` moves to the first entry.
fn cycle(choices: &[char], current: char, forward: bool) -> char {
    let len = choices.len();
    let next = match choices.iter().position(|c| *c == current) {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    choices[next]
}
