//! Reactive Primitives
//!
//! This module implements the reactive core: observable handles over plain
//! targets, eager effects, and lazy computed cells, all coordinated by a
//! [`Runtime`].
//!
//! # Concepts
//!
//! ## Handles
//!
//! A [`ReactiveHandle`] wraps a [`Target`]. Reading a property through the
//! handle while a computation is running registers that computation as a
//! dependent of (target, key). Writing a different value triggers every
//! dependent.
//!
//! ## Effects
//!
//! An [`Effect`] is a side-effecting computation. It runs once when created
//! and again after any property it read is written.
//!
//! ## Computed cells
//!
//! A [`Computed`] caches a derived value and recomputes only on the first
//! read after one of its dependencies changed.
//!
//! # Implementation Notes
//!
//! Re-runs are never synchronous. A write moves dependents into a pending
//! set and queues one flush on the runtime's [`Scheduler`]; every other write
//! in the same turn joins that flush. A computation therefore runs at most
//! once per batch however many of its inputs changed.
//!
//! Arrays are not objects for classification purposes, so they are never
//! wrapped and their contents are never tracked.

mod computation;
mod computed;
mod context;
mod effect;
mod handle;
mod reference;
mod runtime;
mod scheduler;
mod target;

pub use computation::{Computation, ComputationId};
pub use computed::{Computed, COMPUTED_KEY};
pub use effect::Effect;
pub use handle::{Observed, ReactiveHandle, ReactiveOptions};
pub use reference::Ref;
pub use runtime::{FlushFailure, FlushReport, Runtime, RuntimeBuilder};
pub use scheduler::{LocalTaskScheduler, Microtask, MicrotaskQueue, Scheduler};
pub use target::{Target, TargetId, WeakTarget};
