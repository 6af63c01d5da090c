#![expect(missing_docs, reason = "tests")]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier, Mutex, mpsc};
use std::time::{Duration, Instant};

use ntest_timeout::timeout;
use pretty_assertions::assert_eq;
use threadline_std::ThreadHandle;
use threadline_std::thread::{Thread, ThreadAbstraction, ThreadId};

#[test]
#[timeout(10000)]
fn started_thread_is_findable_by_name() {
    let (started, ready) = mpsc::channel();
    let (release, released) = mpsc::channel::<()>();

    let mut handle = ThreadHandle::new();
    handle
        .start("worker-1", move || {
            started.send(Thread::current_thread_id()).unwrap();
            let _ = released.recv();
        })
        .unwrap();

    let id = ready.recv().unwrap();
    assert_eq!(Thread::find_name(id).as_deref(), Some("worker-1"));

    release.send(()).unwrap();
    handle.wait();

    // Names outlive their threads.
    assert_eq!(Thread::find_name(id).as_deref(), Some("worker-1"));
}

#[test]
#[timeout(10000)]
fn name_is_registered_before_entry_runs() {
    let (sender, receiver) = mpsc::channel();

    let mut handle = ThreadHandle::new();
    handle
        .start_with(
            "early",
            |sender: mpsc::Sender<_>| {
                sender
                    .send(Thread::find_name(Thread::current_thread_id()))
                    .unwrap();
            },
            sender,
        )
        .unwrap();
    handle.wait();

    assert_eq!(receiver.recv().unwrap().as_deref(), Some("early"));
}

#[test]
#[timeout(10000)]
fn entry_cannot_rename_its_thread() {
    let (sender, receiver) = mpsc::channel();

    let mut handle = ThreadHandle::new();
    handle
        .start("original", move || {
            Thread::register_current_thread("renamed");
            sender.send(Thread::current_thread_name()).unwrap();
        })
        .unwrap();
    handle.wait();

    assert_eq!(receiver.recv().unwrap().as_deref(), Some("original"));
}

#[test]
#[timeout(10000)]
fn caller_owned_name_may_be_dropped_after_start() {
    let (sender, receiver) = mpsc::channel();

    let mut handle = ThreadHandle::new();
    {
        let mut name = String::from("short-lived");
        handle
            .start(&name, move || {
                sender.send(Thread::current_thread_name()).unwrap();
            })
            .unwrap();
        name.clear();
    }
    handle.wait();

    assert_eq!(receiver.recv().unwrap().as_deref(), Some("short-lived"));
}

#[test]
#[timeout(30000)]
fn concurrent_registrations_are_not_lost() {
    const THREADS: usize = 100;

    let ids = Arc::new(Mutex::new(HashMap::<String, ThreadId>::new()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let mut handles: Vec<ThreadHandle> = (0..THREADS).map(|_| ThreadHandle::new()).collect();
    for (index, handle) in handles.iter_mut().enumerate() {
        let name = format!("contender-{index}");
        let ids = Arc::clone(&ids);
        let barrier = Arc::clone(&barrier);
        let recorded = name.clone();
        handle
            .start(&name, move || {
                barrier.wait();
                ids.lock()
                    .unwrap()
                    .insert(recorded, Thread::current_thread_id());
            })
            .unwrap();
    }

    for handle in &mut handles {
        handle.wait();
    }

    let ids = ids.lock().unwrap();
    assert_eq!(ids.len(), THREADS);
    for (name, id) in ids.iter() {
        assert_eq!(Thread::find_name(*id).as_deref(), Some(name.as_str()));
    }
}

#[test]
#[timeout(10000)]
fn dropping_running_handle_detaches() {
    let finished = Arc::new(AtomicBool::new(false));
    let (release, released) = mpsc::channel::<()>();

    {
        let finished = Arc::clone(&finished);
        let mut handle = ThreadHandle::new();
        handle
            .start("fire-and-forget", move || {
                let _ = released.recv();
                finished.store(true, Ordering::Release);
            })
            .unwrap();
        // Dropped while the thread is still blocked.
    }

    assert!(!finished.load(Ordering::Acquire));
    release.send(()).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while !finished.load(Ordering::Acquire) {
        assert!(Instant::now() < deadline, "detached thread never finished");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
#[timeout(1000)]
fn wait_on_never_started_handle_returns_immediately() {
    let mut handle = ThreadHandle::new();
    handle.wait();
    assert!(!handle.is_joinable());
}
