//! Wraparound navigation over fixed-length sequences.
//!
//! One index contract serves every "current item" in the site: image
//! galleries on detail pages, the home-page carousel, and previous/next
//! sibling browsing across the project and case-study collections. The
//! sequence length is fixed for the lifetime of a navigation session; only
//! the index moves, wrapping at both ends.
//!
//! [`Cycle`] is the bare index state machine. [`Carousel`] layers the two
//! time-driven behaviors on top: a settle period after every index change
//! during which further input is ignored (so animations never overlap), and
//! optional auto-advance on a fixed interval that restarts whenever the
//! index changes. Both run on [`Timer`] deadlines, so replacing state
//! implicitly cancels whatever was pending.

use crate::clock::Timer;
use std::time::{Duration, Instant};

/// Index after `index` in a sequence of `len` items, wrapping to 0 past the
/// end. Sequences of length 0 or 1 have nowhere to go.
pub fn next_index(index: usize, len: usize) -> usize {
    if len <= 1 { index } else { (index + 1) % len }
}

/// Index before `index`, wrapping to `len - 1` before the start.
pub fn previous_index(index: usize, len: usize) -> usize {
    if len <= 1 { index } else { (index + len - 1) % len }
}

/// Current position in a fixed-length sequence, with wraparound stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    index: usize,
    len: usize,
}

impl Cycle {
    /// Start at index 0. A zero-length cycle is inert: every operation is a
    /// no-op and `current` stays 0.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Step forward, wrapping from the last item to the first.
    pub fn next(&mut self) -> usize {
        self.index = next_index(self.index, self.len);
        self.index
    }

    /// Step backward, wrapping from the first item to the last.
    pub fn previous(&mut self) -> usize {
        self.index = previous_index(self.index, self.len);
        self.index
    }

    /// Jump directly to `target`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, target: usize) {
        if target < self.len {
            self.index = target;
        }
    }
}

/// Carousel timing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Advance automatically on `interval`.
    pub autoplay: bool,
    /// Time between automatic advances.
    pub interval: Duration,
    /// Input is ignored for this long after every index change.
    pub settle: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            interval: Duration::from_millis(6000),
            settle: Duration::from_millis(300),
        }
    }
}

impl CarouselOptions {
    /// Whether auto-advance is effective for a sequence of `len` items.
    /// Single-item (or empty) carousels never advance.
    pub fn autoplay_for(&self, len: usize) -> bool {
        self.autoplay && len > 1
    }
}

/// A [`Cycle`] with a transition guard and optional auto-advance.
///
/// Drive it with explicit instants: UI events call `next`/`previous`/`go_to`
/// and the event loop calls `tick` periodically. Dropping the carousel drops
/// its deadlines with it, so nothing fires after teardown.
#[derive(Debug, Clone)]
pub struct Carousel {
    cycle: Cycle,
    options: CarouselOptions,
    settle: Timer,
    advance: Timer,
}

impl Carousel {
    pub fn new(len: usize, options: CarouselOptions, now: Instant) -> Self {
        let mut carousel = Self {
            cycle: Cycle::new(len),
            options,
            settle: Timer::idle(),
            advance: Timer::idle(),
        };
        if options.autoplay_for(len) {
            carousel.advance.arm(now, options.interval);
        }
        carousel
    }

    pub fn current(&self) -> usize {
        self.cycle.current()
    }

    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// True while the post-transition settle period is running.
    pub fn is_settling(&self, now: Instant) -> bool {
        self.settle.pending(now)
    }

    /// Advance one slide. Ignored while settling or when there is nowhere
    /// to go.
    pub fn next(&mut self, now: Instant) {
        if self.cycle.len() <= 1 || self.is_settling(now) {
            return;
        }
        self.cycle.next();
        self.committed(now);
    }

    /// Go back one slide. Ignored while settling or when there is nowhere
    /// to go.
    pub fn previous(&mut self, now: Instant) {
        if self.cycle.len() <= 1 || self.is_settling(now) {
            return;
        }
        self.cycle.previous();
        self.committed(now);
    }

    /// Jump to a slide. Ignored while settling, for out-of-range targets,
    /// and for the slide already showing.
    pub fn go_to(&mut self, target: usize, now: Instant) {
        if target >= self.cycle.len() || target == self.cycle.current() || self.is_settling(now) {
            return;
        }
        self.cycle.go_to(target);
        self.committed(now);
    }

    /// Run the timers. Call once per UI tick; fires at most one automatic
    /// advance per call.
    pub fn tick(&mut self, now: Instant) {
        if self.advance.fire(now) {
            if self.is_settling(now) {
                // Skip this beat, same as ignoring manual input mid-settle
                self.advance.arm(now, self.options.interval);
            } else {
                self.cycle.next();
                self.committed(now);
            }
        }
    }

    /// Post-index-change bookkeeping: start the settle period and restart
    /// the auto-advance interval from this instant.
    fn committed(&mut self, now: Instant) {
        self.settle.arm(now, self.options.settle);
        if self.options.autoplay_for(self.cycle.len()) {
            self.advance.arm(now, self.options.interval);
        }
    }
}
