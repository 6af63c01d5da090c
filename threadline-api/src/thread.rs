//! Abstractions for thread-related operations.

use core::fmt;
use core::num::NonZeroU64;
use core::ops::Deref;

/// Number of bytes a [`ThreadName`] can hold.
pub const THREAD_NAME_CAPACITY: usize = 64;

/// A process-unique identifier of a thread.
///
/// Ids are handed out by the implementation the first time a thread asks for its own id.
/// They are comparable and hashable, but carry no meaning beyond identity inside the current process.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ThreadId(NonZeroU64);

impl ThreadId {
    /// Creates a [`ThreadId`] from a raw value.
    ///
    /// Ids created this way are only meaningful if the raw value was previously obtained through
    /// [`ThreadId::to_raw`] within the same process.
    pub const fn from_raw(raw: NonZeroU64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this id.
    pub const fn to_raw(self) -> NonZeroU64 {
        self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short human-readable thread label.
///
/// Names hold at most [`THREAD_NAME_CAPACITY`] bytes and never allocate.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct ThreadName(heapless::String<THREAD_NAME_CAPACITY>);

impl ThreadName {
    /// Creates a name from `raw`, cutting it at the last character boundary that fits the capacity.
    pub fn new_truncated(raw: &str) -> Self {
        let mut end = raw.len().min(THREAD_NAME_CAPACITY);
        while !raw.is_char_boundary(end) {
            end -= 1;
        }

        let mut name = heapless::String::new();
        // `end` never exceeds the capacity, so this cannot fail.
        let _ = name.push_str(&raw[..end]);
        Self(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for ThreadName {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ThreadName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ThreadName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ThreadName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ThreadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ThreadAbstraction` is used to identify and name threads in a platform-agnostic manner.
///
/// Names are registered once per thread: the first registration wins and later ones are ignored.
/// This keeps the name seen by diagnostics stable for the whole lifetime of a thread.
pub trait ThreadAbstraction {
    /// Returns a unique identifier for the current thread.
    ///
    /// The returned id is guaranteed to be unique within the lifetime of the process.
    /// Thread ids are not reused, even after a thread terminates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use threadline_api::thread::ThreadAbstraction;
    /// use threadline_std::thread::Thread;
    ///
    /// let thread_id = Thread::current_thread_id();
    /// println!("Current thread id: {}", thread_id);
    /// ```
    fn current_thread_id() -> ThreadId;

    /// Names the current thread, unless it already has a name.
    ///
    /// Empty names are ignored. Names longer than [`THREAD_NAME_CAPACITY`] bytes are truncated.
    fn register_current_thread(name: &str);

    /// Returns the name of the current thread, if one was registered.
    fn current_thread_name() -> Option<ThreadName>;

    /// Looks up the name registered by the thread identified by `id`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use threadline_api::thread::ThreadAbstraction;
    /// use threadline_std::thread::Thread;
    ///
    /// Thread::register_current_thread("main");
    /// let name = Thread::find_name(Thread::current_thread_id());
    /// assert_eq!(name.as_deref(), Some("main"));
    /// ```
    fn find_name(id: ThreadId) -> Option<ThreadName>;
}
