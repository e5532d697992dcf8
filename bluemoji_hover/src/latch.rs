// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover latch: turn raw pointer movement into a single hover-start.
//!
//! Pointer-enter also fires when scrolling reflows content under a
//! stationary pointer, which must not count as hover intent. Instead,
//! hover-start is the *first movement* event over the anchor: call
//! [`HoverLatch::arm`] on every move (and on touch-start, for hosts that
//! route touch through the same path) and emit a hover action only when it
//! returns `true`. Call [`HoverLatch::reset`] when the pointer leaves so the
//! next entry can fire again.
//!
//! The latch is scoped to one anchor/card pair; it is plain per-controller
//! state, not anything process-wide.
//!
//! ## Minimal example
//!
//! ```rust
//! use bluemoji_hover::latch::HoverLatch;
//!
//! let mut latch = HoverLatch::default();
//!
//! // First movement fires, the rest of the stream does not.
//! assert!(latch.arm());
//! assert!(!latch.arm());
//! assert!(!latch.arm());
//!
//! // Leaving re-arms the latch.
//! latch.reset();
//! assert!(latch.arm());
//! ```

/// Tracks whether a movement event has already counted as hover-start.
#[derive(Copy, Clone, Debug, Default)]
pub struct HoverLatch {
    fired: bool,
}

impl HoverLatch {
    /// Record a movement event.
    ///
    /// Returns `true` exactly once per entry: on the first call since
    /// construction or the last [`reset`](Self::reset).
    pub fn arm(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }

    /// Record that the pointer left the anchor, re-arming the latch.
    pub fn reset(&mut self) {
        self.fired = false;
    }

    /// Returns `true` if a movement has already counted as hover-start.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.fired
    }
}
