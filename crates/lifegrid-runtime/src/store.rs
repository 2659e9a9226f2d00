#![forbid(unsafe_code)]

//! Canonical session state with selector-based change notification.
//!
//! # Design
//!
//! [`LifeStore`] owns a [`SessionState`] and funnels every mutation through
//! methods that replace the affected fields and then walk the watcher list.
//! A watcher pairs a pure selector with the last value it produced; its
//! handler fires with `(new, previous)` only when the selected value
//! differs from the previous result by value. Grids are replaced wholesale
//! on every change, so "differs by value" is a plain `==` on the selected
//! slice.
//!
//! Mutations take `&mut self`: a handler can never re-enter the store
//! mid-notification, so subscribers always observe a single, fully
//! consistent post-mutation snapshot.
//!
//! # Invariants
//!
//! 1. After any operation, each watcher whose selected value changed is
//!    invoked exactly once, synchronously, before the operation returns.
//! 2. A watcher whose selected value is unchanged is not invoked.
//! 3. `age` resets to 0 on clear/randomize/restore and increments by
//!    exactly 1 on evolve; no other operation touches it.
//! 4. `saved_life` changes only through `save()`; restoring does not
//!    consume the snapshot.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use lifegrid_core::{CellIndex, Grid, next_grid};

use crate::error::{Result, RuntimeError};

/// Minimum inter-tick interval for a fresh session.
pub const DEFAULT_FREQUENCY: Duration = Duration::from_millis(200);

// ─── Session state ───────────────────────────────────────────────────────────

/// Everything a running session knows.
///
/// `rows` and `cols` are fixed for the session's lifetime; `life` is
/// always a `rows × cols` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub rows: usize,
    pub cols: usize,
    /// Current generation.
    pub life: Grid,
    /// Snapshot captured by the last `save()`, if any.
    pub saved_life: Option<Grid>,
    /// Whether the host loop should be advancing the simulation.
    pub running: bool,
    /// Minimum interval between evolution ticks.
    pub frequency: Duration,
    /// Completed evolution steps since the grid was last cleared,
    /// randomized, or restored.
    pub age: u64,
}

type Watcher = Box<dyn FnMut(&SessionState)>;

// ─── LifeStore ───────────────────────────────────────────────────────────────

/// Owner of the canonical [`SessionState`] and of all subscriptions.
pub struct LifeStore {
    state: SessionState,
    watchers: Vec<Watcher>,
}

impl fmt::Debug for LifeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifeStore")
            .field("state", &self.state)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}

impl LifeStore {
    /// Create a store with an all-dead grid, no snapshot, `running =
    /// false`, the default frequency, and age 0.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidDimensions`] if `rows` or `cols` is
    /// zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(RuntimeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            state: SessionState {
                rows,
                cols,
                life: Grid::clean(rows, cols),
                saved_life: None,
                running: false,
                frequency: DEFAULT_FREQUENCY,
                age: 0,
            },
            watchers: Vec::new(),
        })
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Current state snapshot.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current generation.
    #[inline]
    #[must_use]
    pub fn life(&self) -> &Grid {
        &self.state.life
    }

    /// Completed evolution steps since the last reset.
    #[inline]
    #[must_use]
    pub fn age(&self) -> u64 {
        self.state.age
    }

    /// Whether the session wants its loop running.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Minimum inter-tick interval.
    #[inline]
    #[must_use]
    pub fn frequency(&self) -> Duration {
        self.state.frequency
    }

    // ── Subscriptions ────────────────────────────────────────────────

    /// Register a watcher for the slice of state that `selector` derives.
    ///
    /// The handler fires with `(new, previous)` whenever a mutation changes
    /// the selected value; registration itself never fires it. Watchers
    /// live as long as the store; there is no unsubscribe.
    pub fn subscribe<S, Sel, H>(&mut self, selector: Sel, mut handler: H)
    where
        S: Clone + PartialEq + 'static,
        Sel: Fn(&SessionState) -> S + 'static,
        H: FnMut(&S, &S) + 'static,
    {
        let mut last = selector(&self.state);
        self.watchers.push(Box::new(move |state| {
            let next = selector(state);
            if next != last {
                handler(&next, &last);
                last = next;
            }
        }));
    }

    fn notify(&mut self) {
        let Self { state, watchers } = self;
        for watcher in watchers.iter_mut() {
            watcher(&*state);
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Reseed the grid randomly and reset the age.
    pub fn randomize(&mut self) {
        self.state.life = Grid::random(self.state.rows, self.state.cols);
        self.state.age = 0;
        info!(population = self.state.life.population(), "life randomized");
        self.notify();
    }

    /// Kill every cell and reset the age.
    pub fn clear(&mut self) {
        self.state.life = Grid::clean(self.state.rows, self.state.cols);
        self.state.age = 0;
        info!("life cleared");
        self.notify();
    }

    /// Advance the simulation by one generation.
    pub fn evolve(&mut self) {
        self.state.life = next_grid(&self.state.life);
        self.state.age += 1;
        debug!(age = self.state.age, "life evolved");
        self.notify();
    }

    /// Negate a single cell. Does not touch the age.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn toggle_cell(&mut self, idx: CellIndex) {
        self.state.life = self.state.life.toggled(idx);
        debug!(row = idx.row, col = idx.col, "cell toggled");
        self.notify();
    }

    /// Capture the current generation as the session snapshot.
    pub fn save(&mut self) {
        self.state.saved_life = Some(self.state.life.clone());
        info!("life saved");
        self.notify();
    }

    /// Replace the grid with the saved snapshot and reset the age.
    ///
    /// A no-op when nothing has been saved.
    pub fn restore(&mut self) {
        if let Some(saved) = self.state.saved_life.clone() {
            self.state.life = saved;
            self.state.age = 0;
            info!("life restored");
        }
        self.notify();
    }

    /// Rotate the whole field toroidally. Does not touch the age.
    ///
    /// Sign convention follows [`Grid::shifted`]: positive `by_x` moves
    /// content right, positive `by_y` moves it down.
    pub fn shift(&mut self, by_x: isize, by_y: isize) {
        self.state.life = self.state.life.shifted(by_x, by_y);
        debug!(by_x, by_y, "life shifted");
        self.notify();
    }

    /// Set the running flag. The store never starts or stops a loop
    /// itself; the host reacts to the `running` subscription.
    pub fn set_running(&mut self, running: bool) {
        self.state.running = running;
        debug!(running, "running flag set");
        self.notify();
    }

    /// Set the minimum inter-tick interval.
    ///
    /// # Panics
    ///
    /// Panics if `frequency` is zero.
    pub fn set_frequency(&mut self, frequency: Duration) {
        assert!(!frequency.is_zero(), "tick frequency must be positive");
        self.state.frequency = frequency;
        debug!(frequency_ms = frequency.as_millis() as u64, "frequency set");
        self.notify();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
