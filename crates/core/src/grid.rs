//! Grid module - the simulated universe
//!
//! The grid is a list of rows, each row a list of cells.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom).
//!
//! Rows normally share one length, but grids loaded from external presets may
//! be jagged. Every lookup is bounded by the addressed row's own length, so a
//! short row simply has no cells past its end.

use arrayvec::ArrayVec;

use crate::types::Cell;

/// Offsets of the eight orthogonal/diagonal neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The cell grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an all-dead grid of `width` x `height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Dead; width]; height],
        }
    }

    /// Wrap existing rows without reshaping them.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid from an ASCII picture: `#`/`O`/`*` alive, anything else dead.
    ///
    /// Leading/trailing blank lines are ignored, which keeps test fixtures readable.
    ///
    /// ```
    /// use clife_core::Grid;
    ///
    /// let g = Grid::from_ascii("
    ///     .#.
    ///     .#.
    /// ");
    /// assert_eq!((g.width(), g.height()), (3, 2));
    /// assert!(g.is_alive(1, 0));
    /// ```
    pub fn from_ascii(picture: &str) -> Self {
        let rows = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.chars()
                    .map(|c| match c {
                        '#' | 'O' | '*' => Cell::Alive,
                        _ => Cell::Dead,
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Render back to the `#`/`.` picture used by [`Grid::from_ascii`].
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for cell in row {
                out.push(if cell.is_alive() { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Get cell at (x, y); `None` if out of bounds for that row.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Cell::Alive))
    }

    /// In-bounds neighbors of (x, y). Cells outside the grid are not returned.
    pub fn neighbors(&self, x: usize, y: usize) -> ArrayVec<Cell, 8> {
        let mut out = ArrayVec::new();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if let Some(cell) = self.get(nx, ny) {
                out.push(cell);
            }
        }
        out
    }

    /// Positions of all live cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, c)| c.is_alive())
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn live_count(&self) -> usize {
        self.live_cells().count()
    }

    /// Kill every cell and drop all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
