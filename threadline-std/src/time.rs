//! Blocking sleep for the calling thread.

use std::time::{Duration, Instant};

pub use threadline_api::time::SleepAbstraction;

/// Implements the [`SleepAbstraction`] trait for standard Rust.
#[derive(Debug)]
pub struct Time;

impl SleepAbstraction for Time {
    fn sleep(duration: Duration) {
        if duration.is_zero() {
            return;
        }

        let Some(deadline) = Instant::now().checked_add(duration) else {
            // Not representable as a deadline, no early wake-up will matter at this scale.
            std::thread::sleep(duration);
            return;
        };

        // `std` already resumes `nanosleep` after `EINTR` on unix, other platforms' waits may still return early.
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            std::thread::sleep(remaining);
        }
    }
}
