//! The B3/S23 transition: neighbor enumeration, the survival rule, and the
//! simultaneous whole-grid step.
//!
//! # Invariants
//!
//! 1. Neighbor counting never wraps: edge and corner cells have fewer than
//!    eight neighbors.
//! 2. [`next_grid`] evaluates every cell against the *input* grid only; no
//!    cell's update can observe another cell's already-updated value within
//!    the same step.
//! 3. All functions here are pure; nothing retains a reference to any grid
//!    after returning.

use crate::grid::{CellIndex, Grid};

/// In-bounds orthogonal and diagonal neighbors of `idx`.
///
/// Order is up, down, left, right, up-left, up-right, down-left,
/// down-right, with out-of-bounds directions omitted. The order carries no
/// meaning for the rule, but it is deterministic.
#[must_use]
pub fn neighbor_indices(rows: usize, cols: usize, idx: CellIndex) -> Vec<CellIndex> {
    let CellIndex { row, col } = idx;
    let top = row == 0;
    let bottom = row == rows - 1;
    let left = col == 0;
    let right = col == cols - 1;

    let mut out = Vec::with_capacity(8);
    if !top {
        out.push(CellIndex::new(row - 1, col));
    }
    if !bottom {
        out.push(CellIndex::new(row + 1, col));
    }
    if !left {
        out.push(CellIndex::new(row, col - 1));
    }
    if !right {
        out.push(CellIndex::new(row, col + 1));
    }
    if !top && !left {
        out.push(CellIndex::new(row - 1, col - 1));
    }
    if !top && !right {
        out.push(CellIndex::new(row - 1, col + 1));
    }
    if !bottom && !left {
        out.push(CellIndex::new(row + 1, col - 1));
    }
    if !bottom && !right {
        out.push(CellIndex::new(row + 1, col + 1));
    }
    out
}

/// Whether the cell at `idx` lives in the next generation.
///
/// Standard B3/S23: a live cell survives with two or three live neighbors,
/// a dead cell is born with exactly three.
#[must_use]
pub fn should_live(grid: &Grid, idx: CellIndex, neighbors: &[CellIndex]) -> bool {
    let live = neighbors.iter().filter(|&&n| grid.is_alive(n)).count();
    if grid.is_alive(idx) {
        live == 2 || live == 3
    } else {
        live == 3
    }
}

/// One simultaneous evolution step over the whole grid.
#[must_use]
pub fn next_grid(grid: &Grid) -> Grid {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut next = Grid::clean(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let idx = CellIndex::new(row, col);
            let neighbors = neighbor_indices(rows, cols, idx);
            next.set(idx, should_live(grid, idx, &neighbors));
        }
    }
    next
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
