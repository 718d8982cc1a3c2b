//! Reactive Runtime
//!
//! The runtime is the registry that connects targets and computations. It
//! owns the dependency index, the tracking stack, and the pending-run queue,
//! and it schedules flushes on a [`Scheduler`].
//!
//! # How It Works
//!
//! 1. A computation runs inside [`Runtime::run_tracked`], which makes it the
//!    active computation.
//!
//! 2. Every read through a reactive handle calls [`Runtime::track`], which
//!    adds the active computation to the set indexed by (target, key).
//!
//! 3. Every effective write calls [`Runtime::trigger`], which moves the
//!    dependents of (target, key) into the pending queue. The first trigger
//!    of a batch queues one flush task on the scheduler; later triggers in
//!    the same turn join it.
//!
//! 4. The flush runs each queued computation once, in insertion order, with
//!    failures isolated per computation. Computed-cell invalidation steps
//!    are taken ahead of the rest of the queue.
//!
//! # Lifecycle
//!
//! Index buckets are created lazily and only hold weak references to their
//! targets. [`Runtime::prune`] drops buckets whose target is gone (a flush
//! also does this once the index grows past `prune_threshold`),
//! [`Runtime::teardown`] drops one target's bucket, and [`Runtime::dispose`]
//! clears everything. Computations often capture handles, which capture the
//! runtime, so `dispose` is also how such cycles are broken.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, debug_span, error, trace, warn};

use super::computation::{Computation, ComputationId};
use super::context::TrackingStack;
use super::scheduler::{MicrotaskQueue, Scheduler};
use super::target::{Target, TargetId, WeakTarget};
use crate::config::RuntimeConfig;
use crate::error::{ComputationError, ReactiveError, Result};
use crate::value::PropertyKey;

/// Dependents of one target, per property.
struct DependencyBucket {
    target: WeakTarget,
    keys: IndexMap<PropertyKey, IndexSet<Computation>>,
}

impl DependencyBucket {
    fn new(target: WeakTarget) -> Self {
        Self {
            target,
            keys: IndexMap::new(),
        }
    }
}

/// A computation that failed during a flush.
#[derive(Debug, Clone, PartialEq)]
pub struct FlushFailure {
    pub computation: ComputationId,
    pub label: Option<String>,
    pub error: ComputationError,
}

/// Outcome of one flush.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlushReport {
    /// Computations that completed successfully.
    pub ran: usize,
    pub failures: Vec<FlushFailure>,
    /// Whether the flush stopped at a failure, leaving work queued.
    pub aborted: bool,
}

impl FlushReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

struct RuntimeInner {
    config: RuntimeConfig,
    scheduler: Rc<dyn Scheduler>,
    tracking: TrackingStack,
    index: RefCell<IndexMap<TargetId, DependencyBucket>>,
    queue: RefCell<IndexSet<Computation>>,
    // Re-triggered after already running in the current flush.
    carried: RefCell<IndexSet<Computation>>,
    ran_this_flush: RefCell<HashSet<ComputationId>>,
    flush_scheduled: Cell<bool>,
    flushing: Cell<bool>,
    // Index size that triggers the next automatic prune.
    prune_mark: Cell<usize>,
}

/// The reactive registry.
///
/// Cloning a `Runtime` clones a handle to the same registry.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

#[derive(Clone)]
pub(crate) struct WeakRuntime(Weak<RuntimeInner>);

impl WeakRuntime {
    pub(crate) fn upgrade(&self) -> Option<Runtime> {
        self.0.upgrade().map(|inner| Runtime { inner })
    }
}

/// Builder for a [`Runtime`] with a custom config or scheduler.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    scheduler: Option<Rc<dyn Scheduler>>,
}

impl RuntimeBuilder {
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scheduler(mut self, scheduler: Rc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn build(self) -> Runtime {
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Rc::new(MicrotaskQueue::new()));
        let prune_mark = self.config.prune_threshold;
        Runtime {
            inner: Rc::new(RuntimeInner {
                config: self.config,
                scheduler,
                tracking: TrackingStack::new(),
                index: RefCell::new(IndexMap::new()),
                queue: RefCell::new(IndexSet::new()),
                carried: RefCell::new(IndexSet::new()),
                ran_this_flush: RefCell::new(HashSet::new()),
                flush_scheduled: Cell::new(false),
                flushing: Cell::new(false),
                prune_mark: Cell::new(prune_mark),
            }),
        }
    }
}

impl Runtime {
    /// A runtime with the default config and a [`MicrotaskQueue`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::default()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.inner.config
    }

    pub(crate) fn scheduler(&self) -> &Rc<dyn Scheduler> {
        &self.inner.scheduler
    }

    /// A reference that does not keep the registry alive.
    ///
    /// Tasks handed to the scheduler hold one of these, since the scheduler
    /// is itself owned by the runtime.
    pub(crate) fn downgrade(&self) -> WeakRuntime {
        WeakRuntime(Rc::downgrade(&self.inner))
    }

    /// Whether two handles refer to the same registry.
    pub fn ptr_eq(&self, other: &Runtime) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ------------------------------------------------------------------------
    // Tracking
    // ------------------------------------------------------------------------

    /// The computation reads are currently attributed to.
    pub fn active_computation(&self) -> Option<Computation> {
        self.inner.tracking.active()
    }

    /// Whether a computation is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.active_computation().is_some()
    }

    /// Run `computation` as the active computation.
    ///
    /// Reads made during the call register `computation` as a dependent. A
    /// nested call replaces the active computation and restores the outer
    /// one on return. Errors and panics propagate to the caller.
    pub fn run_tracked(&self, computation: &Computation) -> Result<(), ComputationError> {
        if computation.is_disposed() {
            return Ok(());
        }
        let _scope = self.inner.tracking.enter(computation.clone());
        computation.invoke()
    }

    /// Run `f` with `computation` as the active computation.
    ///
    /// Reads made by `f` are attributed to `computation`, whose own body is
    /// not invoked. This is how a computed cell runs its getter on behalf of
    /// its invalidation step.
    pub fn run_tracked_as<R>(&self, computation: &Computation, f: impl FnOnce() -> R) -> R {
        let _scope = self.inner.tracking.enter(computation.clone());
        f()
    }

    /// Run `f` with tracking suspended.
    pub fn untracked<R>(&self, f: impl FnOnce() -> R) -> R {
        let _scope = self.inner.tracking.enter_untracked();
        f()
    }

    /// Record that the active computation depends on `target.key`.
    ///
    /// No-op when nothing is being tracked.
    pub fn track(&self, target: &Target, key: &str) {
        let Some(active) = self.inner.tracking.active() else {
            return;
        };

        let mut index = self.inner.index.borrow_mut();
        let bucket = index
            .entry(target.id())
            .or_insert_with(|| DependencyBucket::new(target.downgrade()));

        let added = match bucket.keys.get_mut(key) {
            Some(dependents) => dependents.insert(active.clone()),
            None => {
                bucket
                    .keys
                    .insert(PropertyKey::from(key), IndexSet::from([active.clone()]));
                true
            }
        };

        if added {
            trace!(target_id = ?target.id(), key, computation = %active.id(), "tracked dependency");
        }
    }

    /// Queue every computation that depends on `target.key`.
    pub fn trigger(&self, target: &Target, key: &str) {
        let dependents: Vec<Computation> = {
            let index = self.inner.index.borrow();
            index
                .get(&target.id())
                .and_then(|bucket| bucket.keys.get(key))
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default()
        };

        trace!(target_id = ?target.id(), key, dependents = dependents.len(), "trigger");
        self.enqueue(dependents);
    }

    fn enqueue(&self, computations: Vec<Computation>) {
        if computations.is_empty() {
            return;
        }

        // A computation never re-triggers itself through its own writes.
        let active = self.inner.tracking.active();
        let flushing = self.inner.flushing.get();

        {
            let ran = self.inner.ran_this_flush.borrow();
            let mut queue = self.inner.queue.borrow_mut();
            let mut carried = self.inner.carried.borrow_mut();

            for computation in computations {
                if computation.is_disposed() || active.as_ref() == Some(&computation) {
                    continue;
                }
                if flushing && ran.contains(&computation.id()) {
                    carried.insert(computation);
                } else {
                    queue.insert(computation);
                }
            }
        }

        // A running flush picks up new queue entries itself.
        if !flushing && !self.inner.queue.borrow().is_empty() {
            self.schedule_flush();
        }
    }

    fn schedule_flush(&self) {
        if self.inner.flush_scheduled.replace(true) {
            return;
        }

        debug!(pending = self.pending_count(), "flush scheduled");
        let weak = self.downgrade();
        self.inner.scheduler.queue_microtask(Box::new(move || {
            if let Some(runtime) = weak.upgrade() {
                runtime.flush();
            }
        }));
    }

    // ------------------------------------------------------------------------
    // Flushing
    // ------------------------------------------------------------------------

    /// Run the pending batch now instead of waiting for the scheduler.
    ///
    /// An already-scheduled flush task becomes a no-op when it fires.
    pub fn flush_sync(&self) -> FlushReport {
        self.flush()
    }

    /// Run the scheduler's queued tasks: one scheduling boundary.
    ///
    /// Only meaningful with a scheduler that is drained on demand, such as
    /// the default [`MicrotaskQueue`].
    pub fn tick(&self) -> usize {
        self.inner.scheduler.run_pending()
    }

    /// Tick until nothing is pending.
    ///
    /// Returns the number of boundaries crossed, or
    /// [`ReactiveError::Unsettled`] when computations keep re-triggering each
    /// other past `max_settle_batches`.
    pub fn settle(&self) -> Result<usize> {
        let limit = self.inner.config.max_settle_batches;
        let mut batches = 0;

        loop {
            if self.pending_count() == 0 && self.inner.scheduler.pending() == 0 {
                return Ok(batches);
            }
            if batches >= limit {
                warn!(batches, "runtime did not settle");
                return Err(ReactiveError::Unsettled { batches });
            }
            if self.tick() == 0 {
                // Nothing for the scheduler to drain; flush directly.
                self.flush();
            }
            batches += 1;
        }
    }

    fn flush(&self) -> FlushReport {
        if self.inner.flushing.get() {
            return FlushReport::default();
        }
        self.inner.flush_scheduled.set(false);
        self.inner.flushing.set(true);

        let span = debug_span!("flush", pending = self.pending_count());
        let _enter = span.enter();

        let mut report = FlushReport::default();
        loop {
            let next = {
                let mut queue = self.inner.queue.borrow_mut();
                let at = queue.iter().position(Computation::is_invalidator).unwrap_or(0);
                queue.shift_remove_index(at)
            };
            let Some(computation) = next else {
                break;
            };
            if computation.is_disposed() {
                continue;
            }

            self.inner
                .ran_this_flush
                .borrow_mut()
                .insert(computation.id());

            match self.run_isolated(&computation) {
                Ok(()) => report.ran += 1,
                Err(error) => {
                    warn!(
                        computation = %computation.id(),
                        label = computation.label().unwrap_or(""),
                        %error,
                        "computation failed during flush"
                    );
                    report.failures.push(FlushFailure {
                        computation: computation.id(),
                        label: computation.label().map(str::to_string),
                        error,
                    });
                    if !self.inner.config.isolate_failures {
                        error!(
                            remaining = self.inner.queue.borrow().len(),
                            "flush aborted after failure"
                        );
                        report.aborted = true;
                        break;
                    }
                }
            }
        }

        self.inner.flushing.set(false);
        self.inner.ran_this_flush.borrow_mut().clear();
        self.maybe_prune();

        let carried = std::mem::take(&mut *self.inner.carried.borrow_mut());
        self.inner.queue.borrow_mut().extend(carried);
        if !self.inner.queue.borrow().is_empty() {
            self.schedule_flush();
        }

        debug!(
            ran = report.ran,
            failed = report.failures.len(),
            aborted = report.aborted,
            "flush complete"
        );
        report
    }

    pub(crate) fn run_isolated(&self, computation: &Computation) -> Result<(), ComputationError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.run_tracked(computation)))
            .unwrap_or_else(|payload| Err(ComputationError::from_panic(payload)))
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Stop `computation` from running again and drop it from the index.
    pub fn dispose_computation(&self, computation: &Computation) {
        computation.mark_disposed();

        for bucket in self.inner.index.borrow_mut().values_mut() {
            for dependents in bucket.keys.values_mut() {
                dependents.shift_remove(computation);
            }
        }
        self.inner.queue.borrow_mut().shift_remove(computation);
        self.inner.carried.borrow_mut().shift_remove(computation);
    }

    /// Forget every dependency recorded against `target`.
    pub fn teardown(&self, target: &Target) -> bool {
        self.inner
            .index
            .borrow_mut()
            .shift_remove(&target.id())
            .is_some()
    }

    /// Drop index buckets whose target no longer exists.
    ///
    /// Returns the number of buckets removed.
    pub fn prune(&self) -> usize {
        let mut index = self.inner.index.borrow_mut();
        let before = index.len();
        index.retain(|_, bucket| bucket.target.is_alive());
        let removed = before - index.len();
        if removed > 0 {
            debug!(removed, "pruned dependency buckets");
        }
        removed
    }

    fn maybe_prune(&self) {
        let threshold = self.inner.config.prune_threshold;
        if threshold == 0 || self.tracked_target_count() < self.inner.prune_mark.get() {
            return;
        }
        self.prune();
        let live = self.tracked_target_count();
        self.inner.prune_mark.set(threshold.max(live.saturating_mul(2)));
    }

    /// Clear the dependency index and the pending queue.
    ///
    /// Handles stay usable; nothing is tracked until computations run again.
    pub fn dispose(&self) {
        let index = std::mem::take(&mut *self.inner.index.borrow_mut());
        let queue = std::mem::take(&mut *self.inner.queue.borrow_mut());
        let carried = std::mem::take(&mut *self.inner.carried.borrow_mut());
        self.inner.flush_scheduled.set(false);
        debug!(targets = index.len(), pending = queue.len() + carried.len(), "runtime disposed");
        // Dropped here, outside the borrows: closures may own handles.
        drop((index, queue, carried));
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// Number of computations depending on `target.key`.
    pub fn dependent_count(&self, target: &Target, key: &str) -> usize {
        self.inner
            .index
            .borrow()
            .get(&target.id())
            .and_then(|bucket| bucket.keys.get(key))
            .map_or(0, IndexSet::len)
    }

    /// Number of targets with at least one index bucket.
    pub fn tracked_target_count(&self) -> usize {
        self.inner.index.borrow().len()
    }

    /// Computations waiting for the next flush.
    pub fn pending_count(&self) -> usize {
        self.inner.queue.borrow().len() + self.inner.carried.borrow().len()
    }

    pub fn is_flush_scheduled(&self) -> bool {
        self.inner.flush_scheduled.get()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("tracked_targets", &self.tracked_target_count())
            .field("pending", &self.pending_count())
            .field("flush_scheduled", &self.is_flush_scheduled())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<usize>>, Computation) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let computation = Computation::new(move || count_clone.set(count_clone.get() + 1));
        (count, computation)
    }

    #[test]
    fn track_is_noop_without_active_computation() {
        let runtime = Runtime::new();
        let target = Target::new();

        runtime.track(&target, "count");
        assert_eq!(runtime.tracked_target_count(), 0);
    }

    #[test]
    fn track_registers_active_computation_once() {
        let runtime = Runtime::new();
        let target = Target::new();
        let (_, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "count");
            runtime.track(&target, "count");
            runtime.track(&target, "other");
        }

        assert_eq!(runtime.dependent_count(&target, "count"), 1);
        assert_eq!(runtime.dependent_count(&target, "other"), 1);
        assert_eq!(runtime.dependent_count(&target, "missing"), 0);
        assert_eq!(runtime.tracked_target_count(), 1);
    }

    #[test]
    fn trigger_defers_until_tick() {
        let runtime = Runtime::new();
        let target = Target::new();
        let (count, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "count");
        }

        runtime.trigger(&target, "count");
        assert!(runtime.is_flush_scheduled());
        assert_eq!(count.get(), 0);

        runtime.tick();
        assert_eq!(count.get(), 1);
        assert!(!runtime.is_flush_scheduled());
        assert_eq!(runtime.pending_count(), 0);
    }

    #[test]
    fn repeated_triggers_coalesce_into_one_flush() {
        let runtime = Runtime::new();
        let target = Target::new();
        let (count, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "a");
            runtime.track(&target, "b");
        }

        runtime.trigger(&target, "a");
        runtime.trigger(&target, "b");
        runtime.trigger(&target, "a");
        assert_eq!(runtime.pending_count(), 1);
        assert_eq!(runtime.scheduler().pending(), 1);

        assert_eq!(runtime.tick(), 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn trigger_without_dependents_schedules_nothing() {
        let runtime = Runtime::new();
        runtime.trigger(&Target::new(), "count");
        assert!(!runtime.is_flush_scheduled());
    }

    #[test]
    fn flush_sync_makes_scheduled_task_a_noop() {
        let runtime = Runtime::new();
        let target = Target::new();
        let (count, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "count");
        }
        runtime.trigger(&target, "count");

        let report = runtime.flush_sync();
        assert_eq!(report.ran, 1);
        assert_eq!(count.get(), 1);

        runtime.tick();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn failures_are_isolated_per_computation() {
        let runtime = Runtime::new();
        let target = Target::new();
        let failing = Computation::fallible(|| Err(ComputationError::failed("bad")))
            .with_label("failing");
        let panicking = Computation::new(|| panic!("kaboom"));
        let (count, healthy) = counter();

        for computation in [&failing, &panicking, &healthy] {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "x");
        }
        runtime.trigger(&target, "x");

        let report = runtime.flush_sync();
        assert_eq!(report.ran, 1);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].label.as_deref(), Some("failing"));
        assert_eq!(
            report.failures[1].error,
            ComputationError::Panicked("kaboom".into())
        );
        assert!(!report.aborted);
        assert_eq!(count.get(), 1);
        assert!(runtime.active_computation().is_none());
    }

    #[test]
    fn abort_keeps_remaining_queue_in_order() {
        let config = RuntimeConfig {
            isolate_failures: false,
            ..RuntimeConfig::default()
        };
        let runtime = Runtime::with_config(config);
        let target = Target::new();
        let failing = Computation::fallible(|| Err(ComputationError::failed("bad")));
        let (first, a) = counter();
        let (second, b) = counter();

        for computation in [&failing, &a, &b] {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "x");
        }
        runtime.trigger(&target, "x");

        let report = runtime.flush_sync();
        assert!(report.aborted);
        assert_eq!(report.ran, 0);
        assert_eq!(runtime.pending_count(), 2);
        assert!(runtime.is_flush_scheduled());

        let report = runtime.flush_sync();
        assert_eq!(report.ran, 2);
        assert_eq!((first.get(), second.get()), (1, 1));
    }

    #[test]
    fn disposed_computation_is_removed_and_skipped() {
        let runtime = Runtime::new();
        let target = Target::new();
        let (count, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "x");
        }
        runtime.trigger(&target, "x");
        runtime.dispose_computation(&computation);

        assert_eq!(runtime.dependent_count(&target, "x"), 0);
        assert_eq!(runtime.pending_count(), 0);
        runtime.tick();
        assert_eq!(count.get(), 0);
        assert!(runtime.run_tracked(&computation).is_ok());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn prune_drops_buckets_of_dead_targets() {
        let runtime = Runtime::new();
        let kept = Target::new();
        let dropped = Target::new();
        let (_, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&kept, "x");
            runtime.track(&dropped, "x");
        }
        assert_eq!(runtime.tracked_target_count(), 2);

        drop(dropped);
        assert_eq!(runtime.prune(), 1);
        assert_eq!(runtime.tracked_target_count(), 1);

        assert!(runtime.teardown(&kept));
        assert!(!runtime.teardown(&kept));
        assert_eq!(runtime.tracked_target_count(), 0);
    }

    #[test]
    fn flush_prunes_once_index_passes_threshold() {
        let runtime = Runtime::with_config(RuntimeConfig {
            prune_threshold: 3,
            ..RuntimeConfig::default()
        });
        let kept = Target::new();
        let (_, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&kept, "x");
            for _ in 0..3 {
                runtime.track(&Target::new(), "x");
            }
        }
        assert_eq!(runtime.tracked_target_count(), 4);

        runtime.trigger(&kept, "x");
        runtime.flush_sync();
        assert_eq!(runtime.tracked_target_count(), 1);
        assert_eq!(runtime.dependent_count(&kept, "x"), 1);
    }

    #[test]
    fn zero_threshold_leaves_dead_buckets() {
        let runtime = Runtime::with_config(RuntimeConfig {
            prune_threshold: 0,
            ..RuntimeConfig::default()
        });
        let (_, computation) = counter();
        let kept = Target::new();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&kept, "x");
            runtime.track(&Target::new(), "x");
        }
        runtime.trigger(&kept, "x");
        runtime.flush_sync();
        assert_eq!(runtime.tracked_target_count(), 2);
    }

    #[test]
    fn dispose_clears_index_and_queue() {
        let runtime = Runtime::new();
        let target = Target::new();
        let (count, computation) = counter();

        {
            let _scope = runtime.inner.tracking.enter(computation.clone());
            runtime.track(&target, "x");
        }
        runtime.trigger(&target, "x");
        runtime.dispose();

        assert_eq!(runtime.tracked_target_count(), 0);
        assert_eq!(runtime.pending_count(), 0);
        runtime.tick();
        assert_eq!(count.get(), 0);
    }
}
