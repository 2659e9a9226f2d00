#![forbid(unsafe_code)]

//! lifegrid public facade crate.
//!
//! A bounded Game of Life core in three pieces: the pure transition rules
//! (`lifegrid-core`), the reactive session store, and the frame-gated
//! ticker (`lifegrid-runtime`). Rendering and UI wiring stay with the
//! host; it subscribes to the slices of state it cares about and drives
//! the ticker from its frame source.
//!
//! ```
//! use lifegrid::prelude::*;
//!
//! let mut store = LifeStore::new(24, 32).expect("positive dimensions");
//! store.subscribe(
//!     |state| state.age,
//!     |&age, _| println!("generation {age}"),
//! );
//! store.randomize();
//! store.evolve();
//! ```

pub mod prelude {
    pub use lifegrid_core as core;
    pub use lifegrid_runtime as runtime;

    pub use lifegrid_core::{CellIndex, Grid, LIFE_FACTOR};
    pub use lifegrid_runtime::{
        DEFAULT_FREQUENCY, FRAME_INTERVAL, FramePump, LifeStore, RuntimeError, SessionState,
        Ticker,
    };
}
