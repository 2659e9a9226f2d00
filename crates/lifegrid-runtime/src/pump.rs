//! Native frame source: feeds wall-clock timestamps to a [`Ticker`].
//!
//! The browser hands frame timestamps to whoever asks for them; a native
//! host has to make its own. [`FramePump`] sleeps for one frame interval
//! at a time and reports elapsed time since the loop started, which keeps
//! the timestamps monotonic. The pump blocks the calling thread for the
//! duration of the loop; the ticker itself never blocks and stays fully
//! testable with synthetic timestamps.

use std::thread;

use web_time::{Duration, Instant};

use crate::ticker::Ticker;

/// Default frame interval, roughly a 60Hz host.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drives [`Ticker::on_frame`] from the wall clock.
#[derive(Debug, Clone, Copy)]
pub struct FramePump {
    interval: Duration,
}

impl FramePump {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Feed frames until `keep_going` returns false or the ticker stops.
    ///
    /// Each iteration sleeps one frame interval and then delivers a frame
    /// carrying the elapsed time since this call began.
    pub fn run_while<F, K>(&self, ticker: &mut Ticker<F>, mut keep_going: K)
    where
        F: FnMut(Duration),
        K: FnMut() -> bool,
    {
        let epoch = Instant::now();
        while ticker.is_running() && keep_going() {
            thread::sleep(self.interval);
            ticker.on_frame(epoch.elapsed());
        }
    }
}

impl Default for FramePump {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}
