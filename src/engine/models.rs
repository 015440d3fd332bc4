use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Checked before every generation; a `true` stops the run early.
pub trait Terminated {
    fn is_terminated(&self) -> bool;
}

/// Never terminates a run. The generation limit still applies.
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl Terminated for Never {
    fn is_terminated(&self) -> bool {
        false
    }
}

/// Flag flipped from elsewhere, e.g. a signal handler.
impl Terminated for AtomicBool {
    fn is_terminated(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Terminates once a wall-clock budget is spent.
///
/// A budget too large for the platform clock never expires.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(budget),
        }
    }
}

impl Terminated for Deadline {
    fn is_terminated(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_terminates() {
        assert!(!Never.is_terminated());
    }

    #[test]
    fn flag_terminates_once_set() {
        let flag = AtomicBool::new(false);
        assert!(!flag.is_terminated());

        flag.store(true, Ordering::Relaxed);
        assert!(flag.is_terminated());
    }

    #[test]
    fn deadline_terminates_once_spent() {
        assert!(Deadline::after(Duration::ZERO).is_terminated());
        assert!(!Deadline::after(Duration::from_secs(3600)).is_terminated());
    }

    #[test]
    fn deadline_beyond_the_clock_never_terminates() {
        assert!(!Deadline::after(Duration::MAX).is_terminated());
        assert!(!Deadline::after(Duration::from_secs(u64::MAX)).is_terminated());
    }
}
