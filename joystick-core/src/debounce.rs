//! Shared edge debouncer
//!
//! One timestamp gates every monitored button: an edge on either pin inside
//! the window of the last accepted edge (on any pin) is dropped.

use core::sync::atomic::{AtomicU32, Ordering};

/// Debouncer over a wrapping 32-bit microsecond clock
pub struct Debouncer {
    last_accepted_us: AtomicU32,
    window_us: u32,
}

impl Debouncer {
    /// Create a debouncer whose last accepted edge is at time zero
    pub const fn new(window_us: u32) -> Self {
        Self {
            last_accepted_us: AtomicU32::new(0),
            window_us,
        }
    }

    /// Accept or reject an edge seen at `now_us`
    ///
    /// Accepts only when strictly more than the window has elapsed since the
    /// last accepted edge, and records `now_us` as the new reference.
    pub fn accept(&self, now_us: u32) -> bool {
        let last = self.last_accepted_us.load(Ordering::Acquire);
        if now_us.wrapping_sub(last) > self.window_us {
            self.last_accepted_us.store(now_us, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_us(&self) -> u32 {
        self.last_accepted_us.load(Ordering::Acquire)
    }

    pub fn window_us(&self) -> u32 {
        self.window_us
    }
}
