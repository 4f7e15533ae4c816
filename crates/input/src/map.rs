//! Key mapping from terminal events to game and menu actions.

use crate::types::{GameAction, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to gameplay actions.
pub fn game_action(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') => Some(GameAction::TogglePause),

        // Speed
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::SpeedDown),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::SpeedUp),

        KeyCode::Esc => Some(GameAction::ReturnToMenu),

        _ => None,
    }
}

/// Map keyboard input to menu navigation.
pub fn menu_action(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuAction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MenuAction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MenuAction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Select),
        KeyCode::Esc => Some(MenuAction::Back),
        _ => None,
    }
}

/// Check if key should terminate the process.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_game_keys() {
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::TogglePause)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::SpeedDown)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::SpeedUp)
        );
        assert_eq!(
            game_action(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::ReturnToMenu)
        );
        assert_eq!(game_action(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Char('w'))),
            Some(MenuAction::Up)
        );
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Down)),
            Some(MenuAction::Down)
        );
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Enter)),
            Some(MenuAction::Select)
        );
        assert_eq!(
            menu_action(KeyEvent::from(KeyCode::Esc)),
            Some(MenuAction::Back)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
