//! Thread-related abstractions.

use std::cell::LazyCell;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

pub use threadline_api::thread::{THREAD_NAME_CAPACITY, ThreadAbstraction, ThreadId, ThreadName};

use crate::registry::NameRegistry;

/// Implements the [`ThreadAbstraction`] trait for standard Rust.
///
/// Names are kept by the process-wide [`NameRegistry`].
#[derive(Debug)]
pub struct Thread;

/// Global counter for generating unique thread ids.
static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Thread-local storage for the current thread's id.
    static THREAD_ID: LazyCell<u64> = const { LazyCell::new(||{
        // `Relaxed` is enough, we don't care about what specific value a thread sees.
        // We just ensure that every value is unique.
        // This assumes that creating 2^64 threads is impractical and no overflow occurs.
        NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed)
    }) };
}

impl ThreadAbstraction for Thread {
    fn current_thread_id() -> ThreadId {
        let raw = NonZeroU64::new(THREAD_ID.with(|thread_id| **thread_id))
            .expect("overflow should not occur");
        ThreadId::from_raw(raw)
    }

    fn register_current_thread(name: &str) {
        NameRegistry::global().register_current_thread(name);
    }

    fn current_thread_name() -> Option<ThreadName> {
        NameRegistry::global().current_thread_name()
    }

    fn find_name(id: ThreadId) -> Option<ThreadName> {
        NameRegistry::global().find_name(id)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_thread_id_consistency() {
        let id1 = Thread::current_thread_id();
        let id2 = Thread::current_thread_id();
        assert_eq!(
            id1, id2,
            "Thread id should be consistent within the same thread"
        );
    }

    #[test]
    fn test_thread_id_uniqueness() {
        let main_id = Thread::current_thread_id();

        let handle1 = std::thread::spawn(Thread::current_thread_id);
        let handle2 = std::thread::spawn(Thread::current_thread_id);

        let thread1_id = handle1.join().unwrap();
        let thread2_id = handle2.join().unwrap();

        assert_ne!(
            main_id, thread1_id,
            "Main thread and thread 1 should have different ids"
        );
        assert_ne!(
            main_id, thread2_id,
            "Main thread and thread 2 should have different ids"
        );
        assert_ne!(
            thread1_id, thread2_id,
            "Thread 1 and thread 2 should have different ids"
        );
    }

    #[test]
    fn test_register_through_abstraction() {
        let (id, current) = std::thread::spawn(|| {
            Thread::register_current_thread("abstraction");
            (Thread::current_thread_id(), Thread::current_thread_name())
        })
        .join()
        .unwrap();

        assert_eq!(current.as_deref(), Some("abstraction"));
        assert_eq!(Thread::find_name(id).as_deref(), Some("abstraction"));
    }
}
