//! Grid value type: a bounded `rows × cols` matrix of cell states.
//!
//! # Design
//!
//! Cells live in a flat row-major `Vec<bool>`. Dimensions are fixed at
//! creation and never change. Every operation that "modifies" a grid
//! ([`toggled`](Grid::toggled), [`shifted`](Grid::shifted)) allocates a
//! fresh grid and leaves the receiver untouched; downstream change
//! detection is value comparison on the replaced grid.
//!
//! # Failure Modes
//!
//! - Zero dimensions at construction: panic.
//! - Out-of-bounds [`CellIndex`]: panic. Indices are never clamped or
//!   wrapped, so a bad index surfaces at the call site instead of showing
//!   up as a silently displaced cell.

use std::fmt;

use rand::Rng;

/// Probability that a freshly seeded cell is alive. Fixed design
/// parameter, not user-configurable.
pub const LIFE_FACTOR: f64 = 0.05;

/// Position of one cell as `(row, col)`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A bounded two-dimensional field of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Grid {
    /// All-dead grid of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn clean(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "grid dimensions must be positive (got {rows}x{cols})"
        );
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Grid seeded from the thread-local RNG: each cell is independently
    /// alive with probability [`LIFE_FACTOR`].
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with(rows, cols, &mut rand::rng())
    }

    /// Seeded variant of [`random`](Grid::random) taking an explicit RNG,
    /// for deterministic tests.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn random_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut grid = Self::clean(rows, cols);
        for cell in &mut grid.cells {
            *cell = rng.random_bool(LIFE_FACTOR);
        }
        grid
    }

    /// Build a grid from explicit rows, for fixtures and generators.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, the first row is empty, or the rows have
    /// uneven lengths.
    #[must_use]
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        let cols = rows[0].as_ref().len();
        assert!(cols > 0, "grid needs at least one column");

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "all rows must have the same length");
            cells.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Grid {
    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `idx` is alive.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, idx: CellIndex) -> bool {
        self.cells[self.offset(idx)]
    }

    /// Count of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn offset(&self, idx: CellIndex) -> usize {
        assert!(
            idx.row < self.rows && idx.col < self.cols,
            "cell index {idx} out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        idx.row * self.cols + idx.col
    }

    pub(crate) fn set(&mut self, idx: CellIndex, alive: bool) {
        let offset = self.offset(idx);
        self.cells[offset] = alive;
    }
}

// ---------------------------------------------------------------------------
// Value operations
// ---------------------------------------------------------------------------

impl Grid {
    /// Fresh grid identical to `self` except the cell at `idx` is negated.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn toggled(&self, idx: CellIndex) -> Self {
        let offset = self.offset(idx);
        let mut next = self.clone();
        next.cells[offset] = !next.cells[offset];
        next
    }

    /// Toroidal rotation of the whole field.
    ///
    /// Output row `r` takes input row `(r - by_y) mod rows`, output column
    /// `c` takes input column `(c - by_x) mod cols`: positive `by_y` moves
    /// content down, positive `by_x` moves content right, and content
    /// leaving one edge re-enters at the opposite edge. A shift of zero in
    /// both axes returns an equal grid.
    #[must_use]
    pub fn shifted(&self, by_x: isize, by_y: isize) -> Self {
        let mut next = Self::clean(self.rows, self.cols);
        for row in 0..self.rows {
            let src_row = wrap(row, by_y, self.rows);
            for col in 0..self.cols {
                let src_col = wrap(col, by_x, self.cols);
                let alive = self.is_alive(CellIndex::new(src_row, src_col));
                next.set(CellIndex::new(row, col), alive);
            }
        }
        next
    }
}

/// `(pos - by) mod extent` in signed arithmetic.
fn wrap(pos: usize, by: isize, extent: usize) -> usize {
    (pos as isize - by).rem_euclid(extent as isize) as usize
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{})\n{self}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
