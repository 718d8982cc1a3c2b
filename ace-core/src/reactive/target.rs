//! Targets: the raw objects made observable.
//!
//! A [`Target`] is a shared, mutable bag of properties. Cloning a `Target`
//! clones the reference, not the contents, so every clone has the same
//! [`TargetId`]. The dependency index keys on that id and holds only a
//! [`WeakTarget`], so it never keeps a target alive on its own.
//!
//! Mutating a target directly (through [`Target::insert`]) is not observed by
//! anything. Only writes through a [`ReactiveHandle`](super::ReactiveHandle)
//! trigger dependents.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::value::{PropertyKey, Value};

/// Identity of a target, stable across clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u64);

impl TargetId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

struct TargetInner {
    id: TargetId,
    properties: RefCell<IndexMap<PropertyKey, Value>>,
}

/// A plain object value.
#[derive(Clone)]
pub struct Target {
    inner: Rc<TargetInner>,
}

impl Target {
    /// Create an empty target.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(TargetInner {
                id: TargetId::next(),
                properties: RefCell::new(IndexMap::new()),
            }),
        }
    }

    /// Create a target from key/value pairs.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let target = Self::new();
        for (key, value) in entries {
            target.insert(key, value);
        }
        target
    }

    pub fn id(&self) -> TargetId {
        self.inner.id
    }

    /// Read a property. Missing properties are `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        self.inner
            .properties
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Write a property without notifying anyone.
    ///
    /// Returns the previous value.
    pub fn insert(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Value {
        self.inner
            .properties
            .borrow_mut()
            .insert(key.into(), value.into())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.properties.borrow().contains_key(key)
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> Vec<PropertyKey> {
        self.inner.properties.borrow().keys().cloned().collect()
    }

    /// Snapshot of all properties in insertion order.
    pub fn entries(&self) -> Vec<(PropertyKey, Value)> {
        self.inner
            .properties
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.properties.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.properties.borrow().is_empty()
    }

    /// Whether two targets are the same object.
    pub fn ptr_eq(&self, other: &Target) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn downgrade(&self) -> WeakTarget {
        WeakTarget {
            id: self.inner.id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys only: values may refer back to this target.
        f.debug_struct("Target")
            .field("id", &self.inner.id)
            .field("keys", &self.keys())
            .finish()
    }
}

/// A non-owning reference to a target.
#[derive(Clone)]
pub struct WeakTarget {
    id: TargetId,
    inner: Weak<TargetInner>,
}

impl WeakTarget {
    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn upgrade(&self) -> Option<Target> {
        self.inner.upgrade().map(|inner| Target { inner })
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl fmt::Debug for WeakTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakTarget")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}
