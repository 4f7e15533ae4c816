//! The terminal as seen by the frame loop.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Something frames can be presented on.
///
/// [`crate::TerminalRenderer`] is the real implementation; [`HeadlessSurface`]
/// keeps frames in memory for tests and benchmarks.
pub trait Surface {
    /// Terminal size as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;

    /// Show `fb`. Implementations may swap its contents with their own buffer.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()>;

    /// Drop any cached screen state so the next frame is drawn in full.
    fn invalidate(&mut self);
}

/// In-memory surface with a settable size.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    cols: u16,
    rows: u16,
    last_frame: Option<FrameBuffer>,
    title: String,
    frames: u64,
    invalidations: u64,
}

impl HeadlessSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            last_frame: None,
            title: String::new(),
            frames: 0,
            invalidations: 0,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Text of the last presented frame, or an empty string.
    pub fn last_text(&self) -> String {
        self.last_frame
            .as_ref()
            .map(FrameBuffer::to_text)
            .unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.last_frame = Some(fb.clone());
        self.frames += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.title.clear();
        self.title.push_str(title);
        Ok(())
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}
