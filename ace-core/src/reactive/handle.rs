//! Reactive handles: observable views over targets.
//!
//! [`Runtime::reactive`] classifies a value. Objects come back wrapped in a
//! [`ReactiveHandle`]; everything else (primitives, `null`, and arrays) comes
//! back unchanged as [`Observed::Plain`].
//!
//! A handle does not own state of its own. Reads and writes go straight to
//! the target, and dependencies are indexed by the target, so two handles
//! over the same target share every dependent.

use std::fmt;

use super::runtime::Runtime;
use super::target::Target;
use crate::value::{PropertyKey, Value};

/// How a handle treats nested objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactiveOptions {
    deep: Option<bool>,
}

impl ReactiveOptions {
    /// Nested objects are returned raw.
    pub fn shallow() -> Self {
        Self { deep: Some(false) }
    }

    /// Nested objects are wrapped on every read.
    pub fn deep() -> Self {
        Self { deep: Some(true) }
    }

    /// Use the runtime's `deep_by_default` setting.
    pub fn inherit() -> Self {
        Self { deep: None }
    }

    fn resolve(self, runtime: &Runtime) -> bool {
        self.deep.unwrap_or(runtime.config().deep_by_default)
    }
}

/// Result of a reactive read: a handle or a plain value.
#[derive(Debug, Clone)]
pub enum Observed {
    Handle(ReactiveHandle),
    Plain(Value),
}

impl Observed {
    /// The underlying value. A handle yields its target.
    pub fn value(&self) -> Value {
        match self {
            Observed::Handle(handle) => Value::Object(handle.target.clone()),
            Observed::Plain(value) => value.clone(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Observed::Handle(handle) => Value::Object(handle.target),
            Observed::Plain(value) => value,
        }
    }

    pub fn as_handle(&self) -> Option<&ReactiveHandle> {
        match self {
            Observed::Handle(handle) => Some(handle),
            Observed::Plain(_) => None,
        }
    }

    pub fn into_handle(self) -> Option<ReactiveHandle> {
        match self {
            Observed::Handle(handle) => Some(handle),
            Observed::Plain(_) => None,
        }
    }

    pub fn is_handle(&self) -> bool {
        matches!(self, Observed::Handle(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Observed::Plain(value) => value.as_number(),
            Observed::Handle(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Observed::Plain(value) => value.as_bool(),
            Observed::Handle(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Observed::Plain(value) => value.as_str(),
            Observed::Handle(_) => None,
        }
    }
}

/// Compares the underlying values with strict equality.
impl PartialEq for Observed {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl From<Observed> for Value {
    fn from(observed: Observed) -> Self {
        observed.into_value()
    }
}

/// An observable view over a [`Target`].
#[derive(Clone)]
pub struct ReactiveHandle {
    runtime: Runtime,
    target: Target,
    deep: bool,
}

impl ReactiveHandle {
    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn is_deep(&self) -> bool {
        self.deep
    }

    /// Read `key`, registering the active computation as a dependent.
    ///
    /// In deep mode an object value is wrapped in a fresh handle.
    pub fn get(&self, key: &str) -> Observed {
        let value = self.target.get(key);
        self.runtime.track(&self.target, key);

        match value {
            Value::Object(inner) if self.deep => Observed::Handle(ReactiveHandle {
                runtime: self.runtime.clone(),
                target: inner,
                deep: true,
            }),
            value => Observed::Plain(value),
        }
    }

    /// Read `key` without registering a dependency or wrapping.
    pub fn get_untracked(&self, key: &str) -> Value {
        self.target.get(key)
    }

    /// Write `key`, triggering dependents if the value changed.
    ///
    /// Writing a strictly equal value does nothing. Always reports success.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> bool {
        let key = key.into();
        let value = value.into();

        if self.target.get(key.as_str()) == value {
            return true;
        }

        self.target.insert(key.clone(), value);
        self.runtime.trigger(&self.target, key.as_str());
        true
    }

    /// Read `key`, compute a new value from it, and write it back.
    ///
    /// The read is not tracked.
    pub fn update<F>(&self, key: &str, f: F) -> bool
    where
        F: FnOnce(&Value) -> Value,
    {
        let next = f(&self.target.get(key));
        self.set(key, next)
    }

    /// Property names of the target. Not tracked.
    pub fn keys(&self) -> Vec<PropertyKey> {
        self.target.keys()
    }

    /// Whether both handles wrap the same target.
    pub fn same_target(&self, other: &ReactiveHandle) -> bool {
        self.target.ptr_eq(&other.target)
    }
}

impl fmt::Debug for ReactiveHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveHandle")
            .field("target", &self.target)
            .field("deep", &self.deep)
            .finish()
    }
}

impl Runtime {
    /// Make `value` observable.
    ///
    /// Values that fail the [`is_object`](crate::value::is_object)
    /// classification are returned unchanged.
    pub fn reactive(&self, value: impl Into<Value>, options: ReactiveOptions) -> Observed {
        match value.into() {
            Value::Object(target) => Observed::Handle(self.reactive_target(&target, options)),
            other => Observed::Plain(other),
        }
    }

    /// Wrap a target the caller already holds.
    pub fn reactive_target(&self, target: &Target, options: ReactiveOptions) -> ReactiveHandle {
        ReactiveHandle {
            runtime: self.clone(),
            target: target.clone(),
            deep: options.resolve(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeConfig;
    use crate::reactive::Computation;
    use crate::value::Array;
    use serde_json::json;

    #[test]
    fn non_objects_pass_through() {
        let runtime = Runtime::new();

        assert_eq!(
            runtime.reactive(Value::Null, ReactiveOptions::default()),
            Observed::Plain(Value::Null)
        );
        assert_eq!(
            runtime.reactive(3, ReactiveOptions::default()).as_number(),
            Some(3.0)
        );

        let array = Array::from_vec(vec![Value::from(1)]);
        let observed = runtime.reactive(array.clone(), ReactiveOptions::deep());
        assert!(!observed.is_handle());
        assert_eq!(observed.value(), Value::Array(array));
    }

    #[test]
    fn objects_are_wrapped() {
        let runtime = Runtime::new();
        let target = Target::from_entries([("count", 0)]);

        let observed = runtime.reactive(target.clone(), ReactiveOptions::default());
        let handle = observed.as_handle().unwrap();
        assert!(handle.target().ptr_eq(&target));
        assert_eq!(handle.get("count").as_number(), Some(0.0));
    }

    #[test]
    fn writes_reach_the_target_immediately() {
        let runtime = Runtime::new();
        let target = Target::from_entries([("count", 0)]);
        let handle = runtime.reactive_target(&target, ReactiveOptions::default());

        assert!(handle.set("count", 1));
        assert_eq!(target.get("count"), Value::from(1));
        assert_eq!(handle.get("count").as_number(), Some(1.0));
    }

    #[test]
    fn equal_write_triggers_nothing() {
        let runtime = Runtime::new();
        let handle = runtime.reactive_target(
            &Target::from_entries([("count", 1)]),
            ReactiveOptions::default(),
        );
        let computation = Computation::new({
            let handle = handle.clone();
            move || {
                handle.get("count");
            }
        });
        runtime.run_tracked(&computation).unwrap();

        assert!(handle.set("count", 1));
        assert_eq!(runtime.pending_count(), 0);
        assert!(!runtime.is_flush_scheduled());
    }

    #[test]
    fn deep_reads_wrap_nested_objects_freshly() {
        let runtime = Runtime::new();
        let value = Value::from(json!({ "a": { "b": 1 }, "n": 2 }));
        let handle = runtime
            .reactive(value, ReactiveOptions::deep())
            .into_handle()
            .unwrap();

        let first = handle.get("a").into_handle().unwrap();
        let second = handle.get("a").into_handle().unwrap();
        assert!(first.same_target(&second));
        assert!(first.is_deep());
        assert_eq!(first.get("b").as_number(), Some(1.0));
        assert_eq!(handle.get("n").as_number(), Some(2.0));
    }

    #[test]
    fn shallow_reads_return_raw_objects() {
        let runtime = Runtime::new();
        let handle = runtime
            .reactive(Value::from(json!({ "a": { "b": 1 } })), ReactiveOptions::shallow())
            .into_handle()
            .unwrap();

        let inner = handle.get("a");
        assert!(!inner.is_handle());
        assert!(inner.value().as_object().is_some());
    }

    #[test]
    fn inherit_follows_runtime_config() {
        let runtime = Runtime::with_config(RuntimeConfig {
            deep_by_default: true,
            ..RuntimeConfig::default()
        });
        let handle = runtime.reactive_target(&Target::new(), ReactiveOptions::inherit());
        assert!(handle.is_deep());

        let handle = runtime.reactive_target(&Target::new(), ReactiveOptions::shallow());
        assert!(!handle.is_deep());
    }

    #[test]
    fn update_applies_function_to_current_value() {
        let runtime = Runtime::new();
        let handle =
            runtime.reactive_target(&Target::from_entries([("n", 2)]), ReactiveOptions::default());

        handle.update("n", |v| Value::from(v.as_number().unwrap_or(0.0) * 10.0));
        assert_eq!(handle.get_untracked("n"), Value::from(20));
    }
}
