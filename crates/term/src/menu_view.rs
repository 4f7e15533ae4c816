//! Menu screens: a heading, a list of lines with an optional cursor, a footer.
//!
//! The engine builds a [`MenuScreen`] from its menu state; this module only
//! lays it out.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const HEADING: Rgb = Rgb::new(80, 120, 220);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const ACCENT: Rgb = Rgb::new(240, 220, 80);
const WARN: Rgb = Rgb::new(220, 80, 80);
const FOOTER: Rgb = Rgb::new(140, 140, 140);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Selectable entry.
    Item,
    /// Shown in the list but cannot be chosen (e.g. a corrupted preset).
    Disabled,
    /// Plain informational text.
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub text: String,
    pub kind: LineKind,
}

impl MenuLine {
    pub fn item(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Item,
        }
    }

    pub fn disabled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Disabled,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuScreen {
    pub heading: String,
    pub lines: Vec<MenuLine>,
    /// Index into `lines` of the highlighted line.
    pub cursor: Option<usize>,
    pub footer: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn draw(&self, screen: &MenuScreen, cols: u16, rows: u16, fb: &mut FrameBuffer) {
        fb.resize(cols, rows);
        fb.clear();

        fb.put_str(2, 1, &screen.heading, CellStyle::fg(HEADING).bold());

        let mut y: u16 = 3;
        for (i, line) in screen.lines.iter().enumerate() {
            // Keep the footer row free.
            if y.saturating_add(2) >= rows {
                break;
            }
            let selected = screen.cursor == Some(i);
            let marker = if selected { "> " } else { "  " };
            let style = match (line.kind, selected) {
                (LineKind::Disabled, _) => CellStyle::fg(WARN),
                (_, true) => CellStyle::fg(ACCENT).bold(),
                _ => CellStyle::fg(TEXT),
            };
            let x = fb.put_str(2, y, marker, CellStyle::fg(ACCENT));
            fb.put_str(x, y, &line.text, style);
            y += 1;
        }

        if rows > 0 && !screen.footer.is_empty() {
            fb.put_str(2, rows - 1, &screen.footer, CellStyle::fg(FOOTER));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout_marks_cursor() {
        let screen = MenuScreen {
            heading: "Conway's CLIfe".to_string(),
            lines: vec![MenuLine::item("Presets"), MenuLine::item("Random")],
            cursor: Some(1),
            footer: "[Enter] Select".to_string(),
        };
        let mut fb = FrameBuffer::new(0, 0);
        MenuView.draw(&screen, 30, 10, &mut fb);

        assert!(fb.row_text(1).contains("Conway's CLIfe"));
        assert_eq!(fb.row_text(3).trim_end(), "    Presets");
        assert_eq!(fb.row_text(4).trim_end(), "  > Random");
        assert!(fb.row_text(9).contains("[Enter] Select"));
    }

    #[test]
    fn test_disabled_lines_are_red() {
        let screen = MenuScreen {
            heading: String::new(),
            lines: vec![MenuLine::disabled("bad.json [CORRUPTED]")],
            cursor: None,
            footer: String::new(),
        };
        let mut fb = FrameBuffer::new(0, 0);
        MenuView.draw(&screen, 40, 8, &mut fb);
        assert_eq!(fb.get(4, 3).unwrap().style.fg, WARN);
    }
}
