use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Default)]
struct Flags {
    paused: bool,
    stopped: bool,
}

/// ## Pause and stop requests
///
/// A cloneable handle shared between an [`Interpreter`](super::Interpreter)
/// and whoever wants to interrupt it from another thread. The inter-step
/// delay sleeps on the same condition variable, so a request cuts the delay
/// short.

#[derive(Debug, Clone, Default)]
pub struct Control {
    inner: Arc<(Mutex<Flags>, Condvar)>,
}

impl Control {
    pub fn new() -> Control {
        Control::default()
    }

    fn flags(&self) -> MutexGuard<'_, Flags> {
        match self.inner.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn pause(&self) {
        self.flags().paused = true;
        self.inner.1.notify_all();
    }

    pub fn stop(&self) {
        self.flags().stopped = true;
        self.inner.1.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.flags().paused
    }

    pub fn is_stopped(&self) -> bool {
        self.flags().stopped
    }

    pub(super) fn resume(&self) {
        self.flags().paused = false;
    }

    pub(super) fn reset(&self) {
        let mut flags = self.flags();
        flags.paused = false;
        flags.stopped = false;
    }

    /// Sleep for `delay` unless a pause or stop arrives first. Returns true
    /// if interrupted.
    pub fn wait(&self, delay: Duration) -> bool {
        let guard = self.flags();
        if guard.paused || guard.stopped {
            return true;
        }
        if delay == Duration::from_millis(0) {
            return false;
        }
        let result = self
            .inner
            .1
            .wait_timeout_while(guard, delay, |flags| !flags.paused && !flags.stopped);
        let (guard, _) = match result {
            Ok(pair) => pair,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.paused || guard.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_flags() {
        let control = Control::new();
        let other = control.clone();
        assert!(!control.is_paused());
        other.pause();
        assert!(control.is_paused());
        control.resume();
        assert!(!other.is_paused());
        other.stop();
        assert!(control.is_stopped());
        control.reset();
        assert!(!control.is_stopped());
    }

    #[test]
    fn test_wait_times_out() {
        let control = Control::new();
        assert!(!control.wait(Duration::from_millis(5)));
        assert!(!control.wait(Duration::from_millis(0)));
    }

    #[test]
    fn test_stop_cuts_wait_short() {
        let control = Control::new();
        let other = control.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            other.stop();
        });
        let start = Instant::now();
        assert!(control.wait(Duration::from_secs(30)));
        assert!(start.elapsed() < Duration::from_secs(10));
        handle.join().unwrap();
    }
}
