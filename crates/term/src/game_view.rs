//! GameView: maps a running `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout for an `cols x rows` terminal with padding `(l, r, t, b)`:
//!
//! ```text
//! row 0        name [WxH] 1x - i=42 - Paused
//! row t        ┌───────┐          (box at column l)
//!              │ cells │          W x H interior
//!              └───────┘
//! row rows-1   [Space] Play - [◄ ►] Change Speed - [Escape] Menu
//! ```
//!
//! Drawing is also where the grid is resynced to the viewport: the cells that
//! were actually drawn become the session's new grid. Growing pads with dead
//! cells; shrinking drops whatever fell outside the interior.

use crate::core::{check_fit, Grid, Padding, Session, SizeCheck, ViewportGeometry};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, APP_NAME, DEFAULT_ALIVE_CHAR, DEFAULT_DEAD_CHAR, DEFAULT_SIZE_SLACK};

const CYAN: Rgb = Rgb::new(80, 220, 220);
const YELLOW: Rgb = Rgb::new(240, 220, 80);
const RED: Rgb = Rgb::new(220, 80, 80);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(220, 220, 220);

/// `W + H` at or above which the size in the title turns red.
const LARGE_FIELD: usize = 200;

/// Characters and colors used for cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
    pub alive_color: Option<Rgb>,
    pub dead_color: Option<Rgb>,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(DEFAULT_ALIVE_CHAR, DEFAULT_DEAD_CHAR)
    }
}

impl Glyphs {
    pub fn new(alive: char, dead: char) -> Self {
        Self {
            alive,
            dead,
            alive_color: None,
            dead_color: None,
        }
    }

    pub fn with_colors(mut self, alive: Option<Rgb>, dead: Option<Rgb>) -> Self {
        self.alive_color = alive;
        self.dead_color = dead;
        self
    }

    fn style_for(&self, cell: Cell) -> (char, CellStyle) {
        if cell.is_alive() {
            (self.alive, CellStyle::fg(self.alive_color.unwrap_or(TEXT)))
        } else {
            let style = match self.dead_color {
                Some(c) => CellStyle::fg(c),
                None => CellStyle {
                    dim: true,
                    ..CellStyle::fg(Rgb::new(90, 90, 100))
                },
            };
            (self.dead, style)
        }
    }
}

/// What a call to [`GameView::draw`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawReport {
    pub viewport: ViewportGeometry,
    pub size_check: SizeCheck,
    /// The viewport differs from the one seen on the previous draw.
    pub viewport_changed: bool,
    /// The session grid was replaced by the drawn cells.
    pub resynced: bool,
}

/// Renderer for a running game.
#[derive(Debug, Clone)]
pub struct GameView {
    glyphs: Glyphs,
    padding: Padding,
    slack: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(Glyphs::default(), Padding::default(), DEFAULT_SIZE_SLACK)
    }
}

impl GameView {
    pub fn new(glyphs: Glyphs, padding: Padding, slack: u16) -> Self {
        Self {
            glyphs,
            padding,
            slack,
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    pub fn set_glyphs(&mut self, glyphs: Glyphs) {
        self.glyphs = glyphs;
    }

    /// Interior cell area for a terminal of `cols x rows`.
    pub fn viewport(&self, cols: u16, rows: u16) -> ViewportGeometry {
        ViewportGeometry::from_terminal(cols, rows, self.padding)
    }

    /// Size check of the session grid against a terminal of `cols x rows`.
    pub fn check(&self, session: &Session, cols: u16, rows: u16) -> SizeCheck {
        check_fit(session.grid(), self.viewport(cols, rows), self.slack)
    }

    /// Draw one frame of `session` and resync its grid to the viewport.
    ///
    /// When the active area does not fit, a notice replaces the board and
    /// the grid is left untouched.
    pub fn draw(
        &self,
        session: &mut Session,
        cols: u16,
        rows: u16,
        fb: &mut FrameBuffer,
    ) -> DrawReport {
        fb.resize(cols, rows);
        fb.clear();

        let viewport = self.viewport(cols, rows);
        let viewport_changed = session.observe_viewport(viewport);
        let size_check = check_fit(session.grid(), viewport, self.slack);

        self.draw_status(fb, session, viewport);

        let resynced = match size_check {
            SizeCheck::Fits => {
                self.draw_board(fb, session, viewport);
                true
            }
            SizeCheck::TooSmall {
                required_width,
                required_height,
            } => {
                self.draw_too_small(fb, viewport, required_width, required_height);
                false
            }
        };

        if rows > 0 {
            fb.put_str(
                self.padding.left,
                rows - 1,
                hint_line(session.paused()),
                CellStyle::fg(TEXT),
            );
        }

        DrawReport {
            viewport,
            size_check,
            viewport_changed,
            resynced,
        }
    }

    /// Terminal window title for `session`.
    pub fn title(session: &Session) -> String {
        let mut title = format!("{} - {}", APP_NAME, session.name());
        if session.paused() {
            title.push_str(" - Paused");
        }
        title
    }

    fn draw_status(&self, fb: &mut FrameBuffer, session: &Session, viewport: ViewportGeometry) {
        if self.padding.top == 0 || session.name().is_empty() {
            return;
        }
        let yellow = CellStyle::fg(YELLOW);
        let plain = CellStyle::fg(TEXT);
        let size_style = if usize::from(viewport.width) + usize::from(viewport.height) >= LARGE_FIELD
        {
            CellStyle::fg(RED)
        } else {
            yellow
        };

        let mut x = fb.put_str(0, 0, session.name(), CellStyle::fg(CYAN));
        x = fb.put_str(x, 0, " ", plain);
        x = fb.put_str(
            x,
            0,
            &format!("[{}x{}]", viewport.width, viewport.height),
            size_style,
        );
        x = fb.put_str(x, 0, &format!(" {} ", session.speed()), yellow);
        x = fb.put_str(x, 0, "-", plain);
        x = fb.put_str(x, 0, &format!(" i={}", session.iteration()), yellow);
        if session.paused() {
            x = fb.put_str(x, 0, " -", plain);
            fb.put_str(x, 0, " Paused", yellow);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, session: &mut Session, viewport: ViewportGeometry) {
        let left = self.padding.left;
        let top = self.padding.top;
        draw_border(
            fb,
            left,
            top,
            viewport.width.saturating_add(2),
            viewport.height.saturating_add(2),
            CellStyle::fg(BORDER),
        );

        let grid = session.grid();
        let mut rows = Vec::with_capacity(usize::from(viewport.height));
        for y in 0..viewport.height {
            let mut row = Vec::with_capacity(usize::from(viewport.width));
            for x in 0..viewport.width {
                let cell = grid.get(usize::from(x), usize::from(y)).unwrap_or_default();
                let (ch, style) = self.glyphs.style_for(cell);
                fb.put_char(left + 1 + x, top + 1 + y, ch, style);
                row.push(cell);
            }
            rows.push(row);
        }
        session.replace_grid(Grid::from_rows(rows));
    }

    fn draw_too_small(
        &self,
        fb: &mut FrameBuffer,
        viewport: ViewportGeometry,
        required_width: usize,
        required_height: usize,
    ) {
        let y = self.padding.top;
        let x = self.padding.left;
        fb.put_str(x, y, "Terminal too small", CellStyle::fg(RED).bold());
        fb.put_str(
            x,
            y.saturating_add(1),
            &format!(
                "Need {}x{}, have {}x{}",
                required_width, required_height, viewport.width, viewport.height
            ),
            CellStyle::fg(TEXT),
        );
        fb.put_str(
            x,
            y.saturating_add(2),
            "Enlarge the window to continue",
            CellStyle::fg(TEXT),
        );
    }
}

/// Control hint shown on the last row.
pub fn hint_line(paused: bool) -> &'static str {
    if paused {
        "[Space] Play - [◄ ►] Change Speed - [Escape] Menu"
    } else {
        "[Space] Pause - [◄ ►] Change Speed - [Escape] Menu"
    }
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
