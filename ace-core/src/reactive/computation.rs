//! Computations: the units of work the runtime re-runs.
//!
//! A Computation is any reaction registered through tracking: an effect
//! body, or the invalidation step of a computed cell. Identity is what
//! matters. Two clones of the same `Computation` are the same set member in
//! the dependency index and the pending queue.

use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ComputationError;

/// Unique identifier for a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComputationId(u64);

impl ComputationId {
    /// Generate a new unique computation ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ComputationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComputationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type Body = Box<dyn Fn() -> Result<(), ComputationError>>;

struct ComputationInner {
    id: ComputationId,
    label: Option<Cow<'static, str>>,
    body: Body,
    runs: Cell<usize>,
    disposed: Cell<bool>,
    // Runs ahead of ordinary computations within a flush.
    invalidates: bool,
}

/// A zero-argument reaction.
#[derive(Clone)]
pub struct Computation {
    inner: Rc<ComputationInner>,
}

impl Computation {
    /// Wrap an infallible closure.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::fallible(move || {
            body();
            Ok(())
        })
    }

    /// Wrap a closure that can report failure.
    pub fn fallible<F>(body: F) -> Self
    where
        F: Fn() -> Result<(), ComputationError> + 'static,
    {
        Self {
            inner: Rc::new(ComputationInner {
                id: ComputationId::new(),
                label: None,
                body: Box::new(body),
                runs: Cell::new(0),
                disposed: Cell::new(false),
                invalidates: false,
            }),
        }
    }

    /// Attach a label used in log output.
    ///
    /// Must be called before the computation is cloned or registered.
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        if let Some(inner) = Rc::get_mut(&mut self.inner) {
            inner.label = Some(label.into());
        }
        self
    }

    /// Mark this computation as a cache invalidation step.
    ///
    /// Same ownership rule as [`Computation::with_label`].
    pub(crate) fn invalidating(mut self) -> Self {
        if let Some(inner) = Rc::get_mut(&mut self.inner) {
            inner.invalidates = true;
        }
        self
    }

    pub(crate) fn is_invalidator(&self) -> bool {
        self.inner.invalidates
    }

    pub fn id(&self) -> ComputationId {
        self.inner.id
    }

    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    /// Number of times the body has been invoked.
    pub fn run_count(&self) -> usize {
        self.inner.runs.get()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub(crate) fn mark_disposed(&self) {
        self.inner.disposed.set(true);
    }

    /// Invoke the body once, without any tracking.
    ///
    /// Tracking is the caller's job (see `Runtime::run_tracked`).
    pub(crate) fn invoke(&self) -> Result<(), ComputationError> {
        self.inner.runs.set(self.inner.runs.get() + 1);
        (self.inner.body)()
    }
}

impl PartialEq for Computation {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Computation {}

impl Hash for Computation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computation")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("runs", &self.inner.runs.get())
            .field("disposed", &self.inner.disposed.get())
            .finish()
    }
}
