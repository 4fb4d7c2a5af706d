use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Lets at most one call through per window. Calls arriving inside the
/// window are dropped, not deferred. A clock that moves backwards opens a
/// new window instead of blocking until it catches up.
#[derive(Debug, Clone)]
pub struct Throttle {
    window_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Returns whether a call made at `now` may run.
    pub fn permit(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now >= last && now < last + self.window_ms => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Tracks pending calls of a debounced function. Every trigger hands out
/// a ticket; only the ticket of the latest trigger may fire, once.
#[derive(Debug, Clone, Default)]
pub struct Debounce {
    latest: u64,
    fired: bool,
}

impl Debounce {
    pub fn trigger(&mut self) -> u64 {
        self.latest += 1;
        self.fired = false;
        self.latest
    }

    /// Called when the quiet period of `ticket` has elapsed.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if ticket == self.latest && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.latest > 0 && !self.fired
    }
}

/// Browser-side debouncer. Each call replaces the pending timeout, and
/// dropping the debouncer cancels whatever is still pending.
pub struct Debouncer {
    quiet_ms: u32,
    state: Rc<RefCell<Debounce>>,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            state: Rc::new(RefCell::new(Debounce::default())),
            pending: None,
        }
    }

    pub fn call(&mut self, f: impl FnOnce() + 'static) {
        let ticket = self.state.borrow_mut().trigger();
        let state = self.state.clone();
        // Replacing the handle clears the previous timeout.
        self.pending = Some(Timeout::new(self.quiet_ms, move || {
            if state.borrow_mut().fire(ticket) {
                f();
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.permit(0.0));
        assert!(!throttle.permit(10.0));
        assert!(!throttle.permit(49.9));
        assert!(throttle.permit(50.0));
        assert!(!throttle.permit(60.0));
        assert!(throttle.permit(200.0));
    }

    #[test]
    fn throttle_counts_leading_calls_only() {
        let mut throttle = Throttle::new(10.0);
        let fired = (0..100)
            .map(|t| t as f64)
            .filter(|&now| throttle.permit(now))
            .count();
        assert_eq!(fired, 10);
    }

    #[test]
    fn throttle_recovers_from_clock_going_backwards() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.permit(1_000_000.0));
        assert!(throttle.permit(10.0));
        assert!(!throttle.permit(20.0));
        assert!(throttle.permit(60.0));
    }

    #[test]
    fn debounce_fires_latest_trigger_only() {
        let mut debounce = Debounce::default();
        assert!(!debounce.is_pending());
        let first = debounce.trigger();
        let second = debounce.trigger();
        let third = debounce.trigger();
        assert!(debounce.is_pending());

        // Timeouts of superseded triggers are stale.
        assert!(!debounce.fire(first));
        assert!(!debounce.fire(second));
        assert!(debounce.fire(third));
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(third));
    }
}
