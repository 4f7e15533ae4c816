//! Viewport sizing - how much of the terminal the simulation may use
//!
//! The board is drawn as a bordered box placed inside the terminal with some
//! padding around it. The *viewport* is the interior of that box: the number
//! of cell columns and rows actually available to the grid.
//!
//! ```text
//!  top padding (title line, spacer)
//!  ┌──────────┐
//!  │ viewport │   left/right padding on either side
//!  └──────────┘
//!  bottom padding (spacer, hint line)
//! ```

use crate::grid::Grid;
use crate::types::DEFAULT_PADDING;

/// Terminal margins around the board box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Padding {
    pub const fn new(left: u16, right: u16, top: u16, bottom: u16) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl Default for Padding {
    fn default() -> Self {
        let [left, right, top, bottom] = DEFAULT_PADDING;
        Self::new(left, right, top, bottom)
    }
}

/// Interior dimensions of the board box, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportGeometry {
    pub width: u16,
    pub height: u16,
}

impl ViewportGeometry {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Derive the viewport from the raw terminal size.
    ///
    /// Padding and the one-cell border on each side are subtracted; the result
    /// saturates at zero for tiny terminals.
    pub fn from_terminal(cols: u16, rows: u16, padding: Padding) -> Self {
        Self {
            width: cols.saturating_sub(padding.horizontal()).saturating_sub(2),
            height: rows.saturating_sub(padding.vertical()).saturating_sub(2),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Smallest rectangle containing every live cell (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveArea {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl ActiveArea {
    /// Bounding box of the live cells; `None` when the grid is entirely dead.
    pub fn of(grid: &Grid) -> Option<Self> {
        let mut cells = grid.live_cells();
        let (x0, y0) = cells.next()?;
        let mut area = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in cells {
            area.min_x = area.min_x.min(x);
            area.min_y = area.min_y.min(y);
            area.max_x = area.max_x.max(x);
            area.max_y = area.max_y.max(y);
        }
        Some(area)
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Result of comparing the active area against the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
    Fits,
    TooSmall {
        required_width: usize,
        required_height: usize,
    },
}

impl SizeCheck {
    pub fn is_too_small(&self) -> bool {
        matches!(self, SizeCheck::TooSmall { .. })
    }
}

/// Decide whether `viewport` can still show the grid's active area plus `slack`
/// cells on each axis.
///
/// The requirement never exceeds the grid's own extent, so a grid whose live
/// cells reach its border still fits a viewport of exactly its size. An
/// entirely dead grid has no active area and always fits.
pub fn check_fit(grid: &Grid, viewport: ViewportGeometry, slack: u16) -> SizeCheck {
    let Some(area) = ActiveArea::of(grid) else {
        return SizeCheck::Fits;
    };
    let required_width = (area.width() + usize::from(slack)).min(grid.width());
    let required_height = (area.height() + usize::from(slack)).min(grid.height());
    if usize::from(viewport.width) < required_width || usize::from(viewport.height) < required_height
    {
        SizeCheck::TooSmall {
            required_width,
            required_height,
        }
    } else {
        SizeCheck::Fits
    }
}
