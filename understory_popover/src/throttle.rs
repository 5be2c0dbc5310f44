// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting for pointer samples.
//!
//! A [`Throttle`] passes at most one value per interval. Values offered inside
//! the interval are not dropped outright: the most recent one is kept as a
//! trailing sample and released by [`Throttle::flush`] once the interval has
//! elapsed, so the final pointer position of a burst is never lost.
//!
//! ```
//! use understory_popover::throttle::Throttle;
//!
//! let mut t = Throttle::new(16);
//! assert_eq!(t.offer(0, 'a'), Some('a'));
//! assert_eq!(t.offer(5, 'b'), None);
//! assert_eq!(t.offer(9, 'c'), None);
//! assert_eq!(t.next_flush(), Some(16));
//! assert_eq!(t.flush(16), Some('c'));
//! ```

/// Leading-and-trailing throttle over millisecond timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Throttle<T> {
    interval_ms: u64,
    last_emit: Option<u64>,
    pending: Option<T>,
}

impl<T: Copy> Throttle<T> {
    /// Create a throttle that emits at most once per `interval_ms`.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_emit: None,
            pending: None,
        }
    }

    /// The configured interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Offer a value at `now`. Returns it if the interval has elapsed since the
    /// last emitted value, otherwise keeps it as the trailing sample.
    pub fn offer(&mut self, now: u64, value: T) -> Option<T> {
        if self.ready(now) {
            self.last_emit = Some(now);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the trailing sample if the interval has elapsed.
    pub fn flush(&mut self, now: u64) -> Option<T> {
        if self.pending.is_some() && self.ready(now) {
            self.last_emit = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the trailing sample immediately, regardless of the interval.
    pub fn take_pending(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// When a trailing sample becomes eligible for [`flush`](Self::flush).
    pub fn next_flush(&self) -> Option<u64> {
        self.pending?;
        Some(
            self.last_emit
                .map_or(0, |last| last.saturating_add(self.interval_ms)),
        )
    }

    /// Forget the trailing sample and the last emission time.
    pub fn reset(&mut self) {
        self.last_emit = None;
        self.pending = None;
    }

    fn ready(&self, now: u64) -> bool {
        match self.last_emit {
            Some(last) => now.saturating_sub(last) >= self.interval_ms,
            None => true,
        }
    }
}
