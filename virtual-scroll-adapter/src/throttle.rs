use alloc::boxed::Box;

use virtual_scroll::ListOptions;

/// Bounds how often scroll/resize events turn into full render cycles.
///
/// The controller calls [`RateLimiter::admit`] for every incoming event and
/// [`RateLimiter::flush`] on every [`crate::ListController::tick`]. At most one render runs per
/// limiter window; an event that was refused is never lost, it runs when `flush` reports it due.
pub trait RateLimiter {
    /// Returns `true` if the event may render immediately.
    fn admit(&mut self, now_ms: u64) -> bool;

    /// Returns `true` if a previously refused event is now due.
    fn flush(&mut self, now_ms: u64) -> bool;
}

/// Trailing-edge debounce: renders once `delay_ms` have passed since the last event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

impl RateLimiter for Debounce {
    fn admit(&mut self, now_ms: u64) -> bool {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
        false
    }

    fn flush(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Frame-aligned throttle: the first event of a frame renders immediately, later ones are
/// folded into a single render at the next frame boundary.
///
/// Hosts call `tick` once per frame; each tick is treated as a frame boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameThrottle {
    armed: bool,
    deferred: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self {
            armed: true,
            deferred: false,
        }
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter for FrameThrottle {
    fn admit(&mut self, _now_ms: u64) -> bool {
        if self.armed {
            self.armed = false;
            return true;
        }
        self.deferred = true;
        false
    }

    fn flush(&mut self, _now_ms: u64) -> bool {
        if self.deferred {
            // The deferred render consumes this frame's slot.
            self.deferred = false;
            self.armed = false;
            return true;
        }
        self.armed = true;
        false
    }
}

/// Renders on every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unthrottled;

impl RateLimiter for Unthrottled {
    fn admit(&mut self, _now_ms: u64) -> bool {
        true
    }

    fn flush(&mut self, _now_ms: u64) -> bool {
        false
    }
}

/// Picks the limiter selected by `options.use_frame_aligned_throttle`.
pub fn limiter_for(options: &ListOptions) -> Box<dyn RateLimiter> {
    if options.use_frame_aligned_throttle {
        Box::new(FrameThrottle::new())
    } else {
        Box::new(Debounce::new(options.throttle_delay_ms))
    }
}
