//! Abstractions for suspending the calling thread.

use core::time::Duration;

/// `SleepAbstraction` is used to block the calling thread in a platform-agnostic manner.
pub trait SleepAbstraction {
    /// Blocks the calling thread for at least `duration`.
    ///
    /// Implementations resume waiting for the remaining time whenever the underlying wait returns early, for example
    /// because a signal interrupted it. Sleeping is best-effort, failures are not reported to the caller.
    /// A zero `duration` returns immediately.
    fn sleep(duration: Duration);

    /// Blocks the calling thread for at least `milliseconds` milliseconds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use threadline_api::time::SleepAbstraction;
    /// use threadline_std::time::Time;
    ///
    /// Time::sleep_ms(10);
    /// ```
    fn sleep_ms(milliseconds: u64) {
        Self::sleep(Duration::from_millis(milliseconds));
    }
}
