//! Computed Implementation
//!
//! A computed cell is a cached derived value that recomputes only when one
//! of its dependencies changed since the last read.
//!
//! # How Computed Cells Work
//!
//! 1. On first read the getter runs with the cell's invalidation step as the
//!    active computation, so every property the getter reads registers the
//!    invalidation step as a dependent. The result is cached.
//!
//! 2. When a dependency is written, the invalidation step is flushed like any
//!    other computation. It marks the cell dirty and triggers the cell's own
//!    synthetic `value` key. It never recomputes.
//!
//! 3. The next read sees the dirty flag and recomputes.
//!
//! 4. Every read, cached or not, tracks the synthetic `value` key for the
//!    reader, so effects and other cells that read a computed value are
//!    re-run when it is invalidated.
//!
//! Invalidation goes through the flush, so a read taken after a write but
//! before the next scheduling boundary still returns the cached value.
//! Within a flush, invalidation steps run before every other queued
//! computation, so effects re-run by the same write read the fresh value.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::computation::Computation;
use super::runtime::Runtime;
use super::target::Target;

/// The synthetic key dependents of a computed cell are indexed under.
pub const COMPUTED_KEY: &str = "value";

struct ComputedInner<T> {
    runtime: Runtime,
    getter: Box<dyn Fn() -> T>,
    cache: RefCell<Option<T>>,
    dirty: Cell<bool>,
    recomputes: Cell<usize>,
    // Identity the cell's readers are indexed under.
    backing: Target,
    invalidator: Computation,
}

impl<T> ComputedInner<T> {
    fn invalidate(&self) {
        self.dirty.set(true);
        self.runtime.trigger(&self.backing, COMPUTED_KEY);
    }
}

/// A lazily recomputed, dependency-invalidated value.
pub struct Computed<T> {
    inner: Rc<ComputedInner<T>>,
}

impl<T: Clone + 'static> Computed<T> {
    fn new<F>(runtime: &Runtime, getter: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        let inner = Rc::new_cyclic(|weak: &Weak<ComputedInner<T>>| {
            let weak = weak.clone();
            let invalidator = Computation::new(move || {
                if let Some(cell) = weak.upgrade() {
                    cell.invalidate();
                }
            })
            .with_label("computed")
            .invalidating();

            ComputedInner {
                runtime: runtime.clone(),
                getter: Box::new(getter),
                cache: RefCell::new(None),
                dirty: Cell::new(true),
                recomputes: Cell::new(0),
                backing: Target::new(),
                invalidator,
            }
        });

        Self { inner }
    }

    /// Read the value, recomputing if the cell is dirty.
    pub fn get(&self) -> T {
        let value = match self.cached() {
            Some(value) => value,
            None => self.recompute(),
        };
        self.inner.runtime.track(&self.inner.backing, COMPUTED_KEY);
        value
    }

    fn cached(&self) -> Option<T> {
        if self.inner.dirty.get() {
            return None;
        }
        self.inner.cache.borrow().clone()
    }

    fn recompute(&self) -> T {
        let inner = &self.inner;
        let value = inner
            .runtime
            .run_tracked_as(&inner.invalidator, || (inner.getter)());

        *inner.cache.borrow_mut() = Some(value.clone());
        inner.dirty.set(false);
        inner.recomputes.set(inner.recomputes.get() + 1);
        value
    }
}

impl<T> Computed<T> {
    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.get()
    }

    pub fn has_value(&self) -> bool {
        self.inner.cache.borrow().is_some()
    }

    /// Number of times the getter has run.
    pub fn recompute_count(&self) -> usize {
        self.inner.recomputes.get()
    }

    /// The target the cell's readers are indexed under.
    pub fn backing_target(&self) -> &Target {
        &self.inner.backing
    }

    /// Unregister the cell from the runtime.
    ///
    /// The cached value stays readable, but it is never invalidated again.
    pub fn dispose(&self) {
        self.inner.runtime.dispose_computation(&self.inner.invalidator);
        self.inner.runtime.teardown(&self.inner.backing);
    }
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("dirty", &self.is_dirty())
            .field("cached", &*self.inner.cache.borrow())
            .field("recomputes", &self.recompute_count())
            .finish()
    }
}

impl Runtime {
    /// Declare a computed value. The getter first runs on first read.
    pub fn computed<T, F>(&self, getter: F) -> Computed<T>
    where
        T: Clone + 'static,
        F: Fn() -> T + 'static,
    {
        Computed::new(self, getter)
    }
}
