//! Input controller: key events in, debounced actions out.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::debounce::DebounceGate;
use crate::map::{game_action, menu_action, should_quit};
use crate::types::{GameAction, MenuAction};

/// An accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Game(GameAction),
    Menu(MenuAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keymap {
    Game,
    Menu,
}

/// Per-screen input controller.
///
/// Each screen owns one controller, so the cooldown of one screen never leaks
/// into the next.
#[derive(Debug, Clone)]
pub struct InputController {
    keymap: Keymap,
    gate: DebounceGate,
}

impl InputController {
    /// Controller for the running game.
    pub fn game(cooldown: Duration) -> Self {
        Self {
            keymap: Keymap::Game,
            gate: DebounceGate::new(cooldown),
        }
    }

    /// Controller for menu screens.
    pub fn menu(cooldown: Duration) -> Self {
        Self {
            keymap: Keymap::Menu,
            gate: DebounceGate::new(cooldown),
        }
    }

    /// Translate a key event observed at `now`.
    ///
    /// Releases and repeats are ignored. Ctrl+C is never debounced. Keys
    /// with no binding do not consume the cooldown.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Option<Input> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if should_quit(key) {
            return Some(Input::Quit);
        }

        let input = match self.keymap {
            Keymap::Game => game_action(key).map(Input::Game),
            Keymap::Menu => menu_action(key).map(Input::Menu),
        }?;

        if !self.gate.accept(now) {
            return None;
        }
        Some(input)
    }

    pub fn reset(&mut self) {
        self.gate.reset();
    }
}
