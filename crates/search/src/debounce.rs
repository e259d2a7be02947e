//! Keystroke debouncing as a pure timing gate.

use std::time::{Duration, Instant};

/// Default quiet period after the last keystroke.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

/// Decides when typing has paused long enough to run a search.
///
/// Pure over injected [`Instant`]s so tests never sleep: callers feed in
/// `now` on every keystroke and poll [`fire_due`](Self::fire_due). Each
/// keystroke pushes the deadline out, so only the last one in a burst fires.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a keystroke at `now`, rescheduling the pending fire.
    pub fn note_keystroke(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per burst, when the quiet period has elapsed.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_the_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.note_keystroke(start);
        assert!(!debouncer.fire_due(start + Duration::from_millis(100)));
        assert!(debouncer.fire_due(start + Duration::from_millis(250)));
    }

    #[test]
    fn each_keystroke_pushes_the_deadline_out() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.note_keystroke(start);
        debouncer.note_keystroke(start + Duration::from_millis(200));
        // 250ms after the first keystroke, but only 50ms after the last.
        assert!(!debouncer.fire_due(start + Duration::from_millis(250)));
        assert!(debouncer.fire_due(start + Duration::from_millis(450)));
    }

    #[test]
    fn fires_at_most_once_per_burst() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.note_keystroke(start);
        let later = start + Duration::from_millis(300);
        assert!(debouncer.fire_due(later));
        assert!(!debouncer.fire_due(later + Duration::from_millis(300)));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.fire_due(Instant::now()));
    }
}
