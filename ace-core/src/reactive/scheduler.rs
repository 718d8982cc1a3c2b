//! Cooperative schedulers for deferred flushes.
//!
//! The runtime never re-runs computations inside the write that triggered
//! them. It hands a one-shot task to a [`Scheduler`] and the task runs at the
//! next scheduling boundary. Two schedulers are provided:
//!
//! - [`MicrotaskQueue`]: an in-process FIFO drained explicitly with
//!   [`Scheduler::run_pending`] (what `Runtime::tick` calls). This is the
//!   default and keeps tests deterministic.
//! - [`LocalTaskScheduler`]: spawns each task onto the current tokio
//!   `LocalSet`, so the executor drives flushes between `.await` points.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A deferred unit of work.
pub type Microtask = Box<dyn FnOnce()>;

/// Something that can run a task at the next scheduling boundary.
pub trait Scheduler {
    /// Queue `task` to run after the current synchronous turn.
    fn queue_microtask(&self, task: Microtask);

    /// Run the tasks that were queued before this call.
    ///
    /// Tasks queued while running wait for the next call, so one call is one
    /// scheduling boundary. Returns the number of tasks run. Schedulers
    /// driven by an external executor have nothing to drain and return 0.
    fn run_pending(&self) -> usize {
        0
    }

    /// Number of tasks waiting to run, if the scheduler can tell.
    fn pending(&self) -> usize {
        0
    }
}

/// A FIFO of microtasks drained on demand.
#[derive(Default)]
pub struct MicrotaskQueue {
    tasks: RefCell<VecDeque<Microtask>>,
}

impl MicrotaskQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for MicrotaskQueue {
    fn queue_microtask(&self, task: Microtask) {
        self.tasks.borrow_mut().push_back(task);
    }

    fn run_pending(&self) -> usize {
        // Take the batch first: tasks may queue more tasks.
        let mut batch = std::mem::take(&mut *self.tasks.borrow_mut());
        let mut ran = 0;
        while let Some(task) = batch.pop_front() {
            ran += 1;
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
                // The rest of the batch still runs at the next boundary, ahead
                // of anything queued meanwhile.
                let mut tasks = self.tasks.borrow_mut();
                while let Some(task) = batch.pop_back() {
                    tasks.push_front(task);
                }
                drop(tasks);
                panic::resume_unwind(payload);
            }
        }
        ran
    }

    fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl fmt::Debug for MicrotaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MicrotaskQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Runs tasks on the current tokio `LocalSet`.
///
/// Queueing a task outside of a `LocalSet` context panics, as
/// `tokio::task::spawn_local` does.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTaskScheduler;

impl LocalTaskScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for LocalTaskScheduler {
    fn queue_microtask(&self, task: Microtask) {
        tokio::task::spawn_local(async move { task() });
    }
}
