//! Evolution rules - one generation step of Conway's Game of Life
//!
//! Grid edges are hard boundaries: neighbors outside the grid do not exist and
//! are simply not counted. There is no wraparound.
//!
//! | Cell | Live neighbors | Outcome |
//! |------|----------------|---------|
//! | alive | 2 or 3 | survive |
//! | alive | <= 1 or >= 4 | die |
//! | dead | exactly 3 | birth |
//! | dead | anything else | stay dead |
//!
//! If any neighbor holds a malformed value the count is undefined and the cell
//! is left as it is. Malformed cells themselves are never rewritten.

use crate::grid::Grid;
use crate::types::Cell;

/// Per-cell result of applying the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Survive,
    Die,
    Birth,
    StayDead,
    /// Malformed input: the cell is carried over as is.
    Unchanged,
}

impl RuleOutcome {
    /// Apply this outcome to the cell it was computed for.
    pub fn apply(self, cell: Cell) -> Cell {
        match self {
            RuleOutcome::Survive | RuleOutcome::Birth => Cell::Alive,
            RuleOutcome::Die | RuleOutcome::StayDead => Cell::Dead,
            RuleOutcome::Unchanged => cell,
        }
    }
}

/// Rule table for a single cell.
///
/// `live_neighbors` is `None` when a malformed neighbor made the count undefined.
pub fn outcome(cell: Cell, live_neighbors: Option<u8>) -> RuleOutcome {
    let Some(n) = live_neighbors else {
        return RuleOutcome::Unchanged;
    };
    match (cell, n) {
        (Cell::Alive, 2 | 3) => RuleOutcome::Survive,
        (Cell::Alive, _) => RuleOutcome::Die,
        (Cell::Dead, 3) => RuleOutcome::Birth,
        (Cell::Dead, _) => RuleOutcome::StayDead,
        (Cell::Malformed, _) => RuleOutcome::Unchanged,
    }
}

/// Count live in-bounds neighbors of (x, y); `None` if any neighbor is malformed.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> Option<u8> {
    grid.neighbors(x, y)
        .iter()
        .try_fold(0u8, |acc, cell| cell.weight().map(|w| acc + w))
}

/// Compute the next generation. The result has exactly the input's shape.
pub fn next_generation(grid: &Grid) -> Grid {
    let rows = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &cell)| outcome(cell, live_neighbors(grid, x, y)).apply(cell))
                .collect()
        })
        .collect();
    Grid::from_rows(rows)
}

/// Advance `grid` by one generation unless `paused`, in which case an identical
/// copy is returned.
pub fn evolve(grid: &Grid, paused: bool) -> Grid {
    if paused {
        return grid.clone();
    }
    next_generation(grid)
}
