// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked debouncing for change emission.
//!
//! The track reports every change immediately. Hosts that want to delay the
//! externally visible change event (for example until a drag settles) put a
//! [`Debouncer`] between the track and their listeners. Time is supplied by
//! the host as a monotonic millisecond counter, so the debouncer never reads a
//! clock and works without `std`.
//!
//! ```
//! use understory_range::{RangeValue, debounce::Debouncer};
//!
//! let mut debouncer = Debouncer::new(250);
//! debouncer.push(RangeValue::Single(10), 1_000);
//! debouncer.push(RangeValue::Single(12), 1_100);
//!
//! assert_eq!(debouncer.poll(1_300), None);
//! assert_eq!(debouncer.poll(1_350), Some(RangeValue::Single(12)));
//! assert_eq!(debouncer.poll(2_000), None);
//! ```

/// Delays a value until no newer value has arrived for `wait` milliseconds.
#[derive(Clone, Debug, Default)]
pub struct Debouncer<T> {
    wait: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given delay in milliseconds.
    ///
    /// A delay of `0` releases each value on the first poll at or after its
    /// push.
    #[must_use]
    pub fn new(wait: u64) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// The delay in milliseconds.
    #[must_use]
    pub fn wait(&self) -> u64 {
        self.wait
    }

    /// Changes the delay. A pending value keeps its current deadline.
    pub fn set_wait(&mut self, wait: u64) {
        self.wait = wait;
    }

    /// Replaces the pending value and restarts the delay from `now`.
    pub fn push(&mut self, value: T, now: u64) {
        self.pending = Some((value, now.saturating_add(self.wait)));
    }

    /// Releases the pending value if its deadline has passed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.flush()
        } else {
            None
        }
    }

    /// Releases the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the pending value becomes due, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Returns `true` while a value is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn zero_wait_releases_on_next_poll() {
        let mut debouncer = Debouncer::new(0);
        debouncer.push(5, 100);
        assert_eq!(debouncer.deadline(), Some(100));
        assert_eq!(debouncer.poll(100), Some(5));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn push_restarts_the_timer() {
        let mut debouncer = Debouncer::new(50);
        debouncer.push(1, 0);
        debouncer.push(2, 40);
        assert_eq!(debouncer.poll(60), None);
        assert_eq!(debouncer.deadline(), Some(90));
        assert_eq!(debouncer.poll(90), Some(2));
    }

    #[test]
    fn flush_and_cancel() {
        let mut debouncer = Debouncer::new(1_000);
        debouncer.push("a", 0);
        assert_eq!(debouncer.flush(), Some("a"));
        assert_eq!(debouncer.flush(), None);

        debouncer.push("b", 0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(u64::MAX), None);
    }

    #[test]
    fn set_wait_keeps_existing_deadline() {
        let mut debouncer = Debouncer::new(10);
        debouncer.push(1, 0);
        debouncer.set_wait(100);
        assert_eq!(debouncer.wait(), 100);
        assert_eq!(debouncer.poll(10), Some(1));
    }

    #[test]
    fn deadline_saturates() {
        let mut debouncer = Debouncer::new(10);
        debouncer.push(1, u64::MAX - 1);
        assert_eq!(debouncer.deadline(), Some(u64::MAX));
    }
}
