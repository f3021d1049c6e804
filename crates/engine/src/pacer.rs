//! Pacing between frames.

use std::thread;
use std::time::Duration;

/// Blocks between frames.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the current thread for the full delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Returns immediately. Useful for tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn pause(&mut self, _delay: Duration) {}
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay)
    }
}
