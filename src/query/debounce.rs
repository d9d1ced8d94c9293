//! Debouncing of raw search input.
//!
//! The plugin runtime only offers fire-and-forget timers, so a [`Debouncer`]
//! cannot literally cancel a scheduled callback. Instead it counts the timers
//! it has asked for: every [`Debouncer::feed`] supersedes the pending value
//! and requests one more timer, and only the timer belonging to the latest
//! feed releases the value. All timers share the same delay, so they fire in
//! the order they were requested and the release happens one full delay after
//! the last keystroke.

use std::time::Duration;

/// Default idle window before a search term takes effect.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// A timer the caller must schedule on behalf of the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub delay: Duration,
}

impl TimerRequest {
    /// Delay in (fractional) seconds, the unit the Zellij timer API takes.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.delay.as_secs_f64()
    }
}

/// Coalesces rapid values into a single delayed delivery of the last one.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use memeverse::query::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(500));
/// debouncer.feed("d");
/// debouncer.feed("do");
/// debouncer.feed("doge");
///
/// assert_eq!(debouncer.on_timer(), None);
/// assert_eq!(debouncer.on_timer(), None);
/// assert_eq!(debouncer.on_timer(), Some("doge"));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    outstanding: usize,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            outstanding: 0,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value with `value` and restarts the idle window.
    ///
    /// The returned request must be scheduled; its firing is reported back
    /// through [`Debouncer::on_timer`].
    pub fn feed(&mut self, value: T) -> TimerRequest {
        self.pending = Some(value);
        self.outstanding += 1;
        TimerRequest { delay: self.delay }
    }

    /// Reports that one previously requested timer fired.
    ///
    /// Returns the pending value only when this was the most recent timer,
    /// i.e. no newer input arrived during the window.
    pub fn on_timer(&mut self) -> Option<T> {
        if self.outstanding == 0 {
            return None;
        }
        self.outstanding -= 1;
        if self.outstanding == 0 {
            self.pending.take()
        } else {
            None
        }
    }

    /// Delivers the pending value immediately, without waiting for the window.
    ///
    /// Timers still in flight become no-ops.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
