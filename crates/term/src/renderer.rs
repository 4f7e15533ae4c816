//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after [`Surface::invalidate`] or a size
//! change) is a full redraw; later frames only rewrite the runs of cells that
//! changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
use crate::surface::Surface;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// The frame currently on screen; `None` until the first present.
    shown: Option<FrameBuffer>,
    full_redraw: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            full_redraw: true,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_restore_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalRenderer {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Show `fb`. The caller gets the previously shown frame back in `fb`
    /// and is expected to redraw it completely before the next call.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.shown.as_ref() {
            Some(shown)
                if !self.full_redraw
                    && shown.width() == fb.width()
                    && shown.height() == fb.height() =>
            {
                encode_diff_into(shown, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.full_redraw = false;
        self.flush_buf()?;

        let mut previous = self
            .shown
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut previous, fb);
        self.shown = Some(previous);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::SetTitle(title))?;
        self.flush_buf()
    }

    /// Force the next frame to be a full redraw (resize, screen switch).
    fn invalidate(&mut self) {
        self.full_redraw = true;
    }
}

/// Put the terminal back the way we found it, without a renderer at hand.
///
/// Used from the panic hook, so errors are swallowed.
pub fn restore_terminal() {
    let mut buf = Vec::new();
    if encode_restore_into(&mut buf).is_ok() {
        let mut out = io::stdout();
        let _ = out.write_all(&buf);
        let _ = out.flush();
    }
    let _ = terminal::disable_raw_mode();
}

fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Clear the screen and print every cell of `fb`, one row at a time.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = FrameEncoder::new(out);
    for y in 0..fb.height() {
        enc.print_span(fb, 0, y, fb.width())?;
    }
    enc.finish()
}

/// Print only the cells of `next` that differ from `prev` (same size).
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = FrameEncoder::new(out);
    for run in changed_runs(prev, next) {
        enc.print_span(next, run.x, run.y, run.len)?;
    }
    enc.finish()
}

/// Writes cells while remembering the last style sent, so a style is only
/// re-sent when it changes.
struct FrameEncoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> FrameEncoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn print_span(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            self.print_cell(fb.get(x + dx, y).unwrap_or_default())?;
        }
        Ok(())
    }

    fn print_cell(&mut self, cell: ScreenCell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            self.out.queue(SetForegroundColor(color(style.fg)))?;
            self.out.queue(SetBackgroundColor(color(style.bg)))?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal span of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Maximal runs of cells that differ between two frames, row by row.
///
/// Frames of different sizes are entirely dirty.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let (w, h) = (next.width(), next.height());
    if (prev.width(), prev.height()) != (w, h) {
        return (0..h).map(|y| Run { x: 0, y, len: w }).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut start: Option<u16> = None;
        for x in 0..=w {
            let dirty = x < w && prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
    }
    runs
}
