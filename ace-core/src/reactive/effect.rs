//! Effect Implementation
//!
//! An Effect is a side-effecting computation that re-runs whenever a
//! property it read changes.
//!
//! # How Effects Work
//!
//! 1. When created, the effect runs under tracking to establish its initial
//!    dependencies. A deferred effect does this on the next scheduling
//!    boundary instead.
//!
//! 2. When any dependency is written, the effect is queued and re-runs in
//!    the next flush.
//!
//! 3. Every run is tracked again, so reads that only happen on later runs
//!    add to the dependency set. Dependencies are never dropped on re-run.
//!
//! # Differences from Computed
//!
//! - Computed cells return a value; effects do not.
//! - Computed cells are lazy (compute on read); effects are eager.

use std::fmt;

use tracing::warn;

use super::computation::{Computation, ComputationId};
use super::runtime::Runtime;
use crate::error::ComputationError;

/// A registered side-effecting computation.
///
/// Clones share state. Dropping an `Effect` does not stop it; call
/// [`Effect::dispose`].
#[derive(Clone)]
pub struct Effect {
    runtime: Runtime,
    computation: Computation,
}

impl Effect {
    pub fn id(&self) -> ComputationId {
        self.computation.id()
    }

    pub fn computation(&self) -> &Computation {
        &self.computation
    }

    /// Number of times the effect has run.
    pub fn run_count(&self) -> usize {
        self.computation.run_count()
    }

    /// Run the effect now, under tracking.
    pub fn execute(&self) -> Result<(), ComputationError> {
        self.runtime.run_tracked(&self.computation)
    }

    /// Stop the effect. It is removed from the dependency index and any
    /// pending flush, and will not run again.
    pub fn dispose(&self) {
        self.runtime.dispose_computation(&self.computation);
    }

    pub fn is_disposed(&self) -> bool {
        self.computation.is_disposed()
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("id", &self.id())
            .field("run_count", &self.run_count())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl Runtime {
    /// Register an effect and run it once immediately.
    pub fn effect<F>(&self, body: F) -> Effect
    where
        F: Fn() + 'static,
    {
        let effect = self.wrap(Computation::new(body));
        // An infallible body cannot produce an error.
        let _ = effect.execute();
        effect
    }

    /// Register a fallible effect and run it once immediately.
    ///
    /// An error from the first run is returned and the effect is disposed,
    /// so reads made before the failure never re-run it.
    pub fn try_effect<F>(&self, body: F) -> Result<Effect, ComputationError>
    where
        F: Fn() -> Result<(), ComputationError> + 'static,
    {
        let effect = self.wrap(Computation::fallible(body));
        if let Err(error) = effect.execute() {
            self.dispose_computation(&effect.computation);
            return Err(error);
        }
        Ok(effect)
    }

    /// Register an effect whose first run waits for the next scheduling
    /// boundary.
    pub fn effect_deferred<F>(&self, body: F) -> Effect
    where
        F: Fn() + 'static,
    {
        self.defer(Computation::new(body))
    }

    /// Register `computation` as an effect with a deferred first run.
    pub(crate) fn defer(&self, computation: Computation) -> Effect {
        let effect = self.wrap(computation);
        let weak = self.downgrade();
        let first_run = effect.computation.clone();

        self.scheduler().queue_microtask(Box::new(move || {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            if let Err(error) = runtime.run_isolated(&first_run) {
                warn!(
                    computation = %first_run.id(),
                    label = first_run.label().unwrap_or(""),
                    %error,
                    "deferred effect failed on first run"
                );
            }
        }));

        effect
    }

    fn wrap(&self, computation: Computation) -> Effect {
        Effect {
            runtime: self.clone(),
            computation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{ReactiveOptions, Target};
    use crate::value::Value;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn state(runtime: &Runtime, entries: &[(&str, i32)]) -> crate::reactive::ReactiveHandle {
        runtime.reactive_target(
            &Target::from_entries(entries.iter().copied()),
            ReactiveOptions::default(),
        )
    }

    #[test]
    fn effect_runs_on_creation() {
        let runtime = Runtime::new();
        let run_count = Rc::new(Cell::new(0));
        let run_count_clone = run_count.clone();

        let effect = runtime.effect(move || run_count_clone.set(run_count_clone.get() + 1));

        assert_eq!(run_count.get(), 1);
        assert_eq!(effect.run_count(), 1);
    }

    #[test]
    fn effect_reruns_after_dependency_write() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let effect = runtime.effect({
            let s = s.clone();
            let seen = seen.clone();
            move || seen.borrow_mut().push(s.get("count").as_number())
        });

        s.set("count", 5);
        assert_eq!(effect.run_count(), 1);

        runtime.tick();
        assert_eq!(effect.run_count(), 2);
        assert_eq!(*seen.borrow(), vec![Some(0.0), Some(5.0)]);
    }

    #[test]
    fn later_runs_grow_the_dependency_set() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("flag", 0), ("extra", 0)]);

        let effect = runtime.effect({
            let s = s.clone();
            move || {
                if s.get("flag").as_number() == Some(1.0) {
                    s.get("extra");
                }
            }
        });
        assert_eq!(runtime.dependent_count(s.target(), "extra"), 0);

        s.set("flag", 1);
        runtime.tick();
        assert_eq!(runtime.dependent_count(s.target(), "extra"), 1);

        s.set("extra", 7);
        runtime.tick();
        assert_eq!(effect.run_count(), 3);
    }

    #[test]
    fn deferred_effect_waits_for_boundary() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);

        let effect = runtime.effect_deferred({
            let s = s.clone();
            move || {
                s.get("count");
            }
        });
        assert_eq!(effect.run_count(), 0);
        assert_eq!(runtime.dependent_count(s.target(), "count"), 0);

        runtime.tick();
        assert_eq!(effect.run_count(), 1);
        assert_eq!(runtime.dependent_count(s.target(), "count"), 1);
    }

    #[test]
    fn deferred_first_run_panic_is_isolated() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);
        let runs = Rc::new(Cell::new(0));

        runtime.effect({
            let s = s.clone();
            let runs = runs.clone();
            move || {
                s.get("count");
                runs.set(runs.get() + 1);
            }
        });
        let failing = runtime.effect_deferred(|| panic!("first run failed"));

        s.set("count", 1);
        runtime.tick();
        assert_eq!(failing.run_count(), 1);
        assert_eq!(runs.get(), 2);
        assert!(!runtime.is_flush_scheduled());

        s.set("count", 2);
        assert_eq!(runtime.tick(), 1);
        assert_eq!(runs.get(), 3);
    }

    #[test]
    fn deferred_first_run_error_keeps_runtime_flushing() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);

        let failing = runtime.defer(Computation::fallible({
            let s = s.clone();
            move || {
                s.get("count");
                Err(ComputationError::failed("not ready"))
            }
        }));
        runtime.tick();
        assert_eq!(failing.run_count(), 1);

        s.set("count", 1);
        let report = runtime.flush_sync();
        assert_eq!(report.failures.len(), 1);
        assert_eq!(failing.run_count(), 2);
    }

    #[test]
    fn try_effect_returns_first_run_error() {
        let runtime = Runtime::new();
        let err = runtime
            .try_effect(|| Err(ComputationError::failed("no data")))
            .unwrap_err();
        assert_eq!(err, ComputationError::Failed("no data".into()));
    }

    #[test]
    fn rejected_try_effect_is_not_rerun() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);
        let calls = Rc::new(Cell::new(0));

        let result = runtime.try_effect({
            let s = s.clone();
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                s.get("count");
                Err(ComputationError::failed("rejected"))
            }
        });
        assert!(result.is_err());
        assert_eq!(runtime.dependent_count(s.target(), "count"), 0);

        s.set("count", 1);
        runtime.settle().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn effect_does_not_run_after_disposal() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);

        let effect = runtime.effect({
            let s = s.clone();
            move || {
                s.get("count");
            }
        });
        effect.dispose();
        assert!(effect.is_disposed());

        s.set("count", 1);
        runtime.tick();
        assert_eq!(effect.run_count(), 1);

        // Execute should not run either
        effect.execute().unwrap();
        assert_eq!(effect.run_count(), 1);
    }

    #[test]
    fn effect_writing_its_own_dependency_does_not_loop() {
        let runtime = Runtime::new();
        let s = state(&runtime, &[("count", 0)]);

        let effect = runtime.effect({
            let s = s.clone();
            move || {
                let next = s.get("count").as_number().unwrap_or(0.0) + 1.0;
                s.set("count", next);
            }
        });
        assert_eq!(s.get_untracked("count"), Value::from(1));

        s.set("count", 10);
        assert_eq!(runtime.settle().unwrap(), 1);
        assert_eq!(effect.run_count(), 2);
        assert_eq!(s.get_untracked("count"), Value::from(11));
    }

    #[test]
    fn effect_clone_shares_state() {
        let runtime = Runtime::new();
        let effect1 = runtime.effect(|| {});
        let effect2 = effect1.clone();

        assert_eq!(effect1.id(), effect2.id());
        effect1.execute().unwrap();
        assert_eq!(effect2.run_count(), 2);

        effect1.dispose();
        assert!(effect2.is_disposed());
    }
}
