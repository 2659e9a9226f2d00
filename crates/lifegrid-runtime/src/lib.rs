#![forbid(unsafe_code)]

//! Runtime: the reactive session store and the frame-gated ticker.
//!
//! [`LifeStore`] owns the canonical session state and notifies
//! selector-based subscriptions after every mutation. [`Ticker`] turns a
//! stream of per-frame timestamps into rate-limited ticks, and
//! [`FramePump`] supplies those timestamps on native hosts. The pieces are
//! plain constructed values; whoever owns the loop wires them together.

pub mod error;
pub mod pump;
pub mod store;
pub mod ticker;

pub use error::RuntimeError;
pub use pump::{FRAME_INTERVAL, FramePump};
pub use store::{DEFAULT_FREQUENCY, LifeStore, SessionState};
pub use ticker::Ticker;
