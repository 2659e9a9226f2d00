#![forbid(unsafe_code)]

//! Variable-frequency tick gate over a per-frame callback source.
//!
//! # Design
//!
//! The host's frame primitive is modeled as calls to
//! [`Ticker::on_frame`] carrying a monotonically increasing timestamp.
//! The ticker fires its callback at most once per configured interval:
//! the first frame after [`start`](Ticker::start) only anchors the
//! reference time, and every later frame fires iff the elapsed time since
//! the reference has reached the frequency, resetting the reference on
//! fire. The frame source keeps calling every frame regardless, so tick
//! granularity is bounded by the host frame rate; frequencies below one
//! frame clamp in effect, not in value.
//!
//! # Invariants
//!
//! 1. The callback never fires while stopped, and never on the first
//!    frame after a start.
//! 2. A fire resets the reference time to the firing frame's timestamp.
//! 3. [`set_frequency`](Ticker::set_frequency) never resets the reference
//!    time; it is simply used at the next gate check.
//! 4. `start` and `stop` are idempotent, and a start after a stop behaves
//!    like a fresh start.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Result, RuntimeError};

/// Rate-limits a per-frame callback stream into ticks.
pub struct Ticker<F> {
    frequency: Duration,
    /// Timestamp of the loop start or of the last fired tick.
    reference: Option<Duration>,
    /// Whether a frame callback is pending (the loop is live).
    armed: bool,
    callback: F,
}

impl<F> fmt::Debug for Ticker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker")
            .field("frequency", &self.frequency)
            .field("reference", &self.reference)
            .field("armed", &self.armed)
            .finish()
    }
}

impl<F: FnMut(Duration)> Ticker<F> {
    /// Create a stopped ticker.
    ///
    /// `callback` is invoked with the firing frame's timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::ZeroFrequency`] if `frequency` is zero.
    pub fn new(frequency: Duration, callback: F) -> Result<Self> {
        if frequency.is_zero() {
            return Err(RuntimeError::ZeroFrequency);
        }
        Ok(Self {
            frequency,
            reference: None,
            armed: false,
            callback,
        })
    }

    /// Begin ticking. Idempotent: starting a running ticker changes
    /// nothing, not even the timing state.
    pub fn start(&mut self) {
        if self.armed {
            return;
        }
        self.reference = None;
        self.armed = true;
        info!(
            frequency_ms = self.frequency.as_millis() as u64,
            "ticker started"
        );
    }

    /// Stop ticking and clear the timing state. Idempotent. Subsequent
    /// frames are ignored until the next `start`.
    pub fn stop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        self.reference = None;
        info!("ticker stopped");
    }

    /// Change the minimum inter-tick interval, effective at the next gate
    /// check. Does not reset elapsed-time tracking.
    ///
    /// # Panics
    ///
    /// Panics if `frequency` is zero.
    pub fn set_frequency(&mut self, frequency: Duration) {
        assert!(!frequency.is_zero(), "tick frequency must be positive");
        self.frequency = frequency;
        debug!(
            frequency_ms = frequency.as_millis() as u64,
            "ticker retuned"
        );
    }

    /// Whether a frame callback is pending.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.armed
    }

    /// Current minimum inter-tick interval.
    #[inline]
    #[must_use]
    pub fn frequency(&self) -> Duration {
        self.frequency
    }

    /// Host frame callback entry point.
    ///
    /// `now` must be monotonically non-decreasing between a `start` and
    /// the matching `stop`. Frames arriving while stopped are ignored.
    pub fn on_frame(&mut self, now: Duration) {
        if !self.armed {
            return;
        }
        let reference = *self.reference.get_or_insert(now);
        let elapsed = now.saturating_sub(reference);
        if elapsed >= self.frequency {
            (self.callback)(now);
            self.reference = Some(now);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    type Fired = Rc<RefCell<Vec<u64>>>;

    /// Ticker whose callback records firing timestamps in milliseconds.
    fn recording_ticker(frequency_ms: u64) -> (Ticker<impl FnMut(Duration)>, Fired) {
        let fired: Fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        let ticker = Ticker::new(ms(frequency_ms), move |t| {
            sink.borrow_mut().push(t.as_millis() as u64);
        })
        .expect("positive frequency");
        (ticker, fired)
    }

    #[test]
    fn new_rejects_zero_frequency() {
        let err = Ticker::new(Duration::ZERO, |_| {}).unwrap_err();
        assert_eq!(err, RuntimeError::ZeroFrequency);
    }

    #[test]
    fn fires_only_when_the_interval_has_elapsed() {
        let (mut ticker, fired) = recording_ticker(200);
        ticker.start();
        for t in [0, 50, 150, 210, 260, 420] {
            ticker.on_frame(ms(t));
        }
        // 210 is the first frame at least 200ms past the anchor frame at 0;
        // 260 is only 50ms past the fire at 210; 420 is 210ms past it.
        assert_eq!(*fired.borrow(), vec![210, 420]);
    }

    #[test]
    fn first_frame_anchors_without_firing() {
        let (mut ticker, fired) = recording_ticker(200);
        ticker.start();
        ticker.on_frame(ms(500));
        assert!(fired.borrow().is_empty());
        ticker.on_frame(ms(650));
        assert!(fired.borrow().is_empty());
        ticker.on_frame(ms(710));
        assert_eq!(*fired.borrow(), vec![710]);
    }

    #[test]
    fn frames_are_ignored_while_stopped() {
        let (mut ticker, fired) = recording_ticker(100);
        ticker.on_frame(ms(0));
        ticker.on_frame(ms(500));
        assert!(fired.borrow().is_empty());
        assert!(!ticker.is_running());
    }

    #[test]
    fn start_is_idempotent_and_keeps_the_reference() {
        let (mut ticker, fired) = recording_ticker(200);
        ticker.start();
        ticker.on_frame(ms(100));
        ticker.start();
        // Had the second start reset timing, 320 would only re-anchor.
        ticker.on_frame(ms(320));
        assert_eq!(*fired.borrow(), vec![320]);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut ticker, _fired) = recording_ticker(100);
        ticker.stop();
        ticker.start();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn restart_after_stop_is_a_fresh_start() {
        let (mut ticker, fired) = recording_ticker(200);
        ticker.start();
        ticker.on_frame(ms(0));
        ticker.on_frame(ms(210));
        ticker.stop();

        ticker.start();
        ticker.on_frame(ms(400)); // anchors only, despite 190ms since last fire
        ticker.on_frame(ms(610));
        assert_eq!(*fired.borrow(), vec![210, 610]);
    }

    #[test]
    fn retune_takes_effect_without_resetting_the_reference() {
        let (mut ticker, fired) = recording_ticker(200);
        ticker.start();
        ticker.on_frame(ms(0));
        ticker.on_frame(ms(100));
        assert!(fired.borrow().is_empty());

        ticker.set_frequency(ms(50));
        // Elapsed since the untouched anchor is 120 >= 50.
        ticker.on_frame(ms(120));
        assert_eq!(*fired.borrow(), vec![120]);
    }

    #[test]
    fn retune_while_stopped_applies_to_the_next_run() {
        let (mut ticker, fired) = recording_ticker(500);
        ticker.set_frequency(ms(100));
        ticker.start();
        ticker.on_frame(ms(0));
        ticker.on_frame(ms(100));
        assert_eq!(*fired.borrow(), vec![100]);
        assert_eq!(ticker.frequency(), ms(100));
    }

    #[test]
    fn callback_receives_the_firing_timestamp() {
        let (mut ticker, fired) = recording_ticker(10);
        ticker.start();
        ticker.on_frame(ms(3));
        ticker.on_frame(ms(17));
        assert_eq!(*fired.borrow(), vec![17]);
    }

    #[test]
    fn is_running_reflects_the_lifecycle() {
        let (mut ticker, _fired) = recording_ticker(100);
        assert!(!ticker.is_running());
        ticker.start();
        assert!(ticker.is_running());
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    #[should_panic(expected = "frequency must be positive")]
    fn retune_rejects_zero() {
        let (mut ticker, _fired) = recording_ticker(100);
        ticker.set_frequency(Duration::ZERO);
    }
}
