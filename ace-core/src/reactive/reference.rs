//! Reference cells.
//!
//! A [`Ref`] is a reactive handle over a one-property object `{ value }`. It
//! gives a single primitive the same tracking as an object property.

use std::fmt;

use super::handle::{Observed, ReactiveHandle, ReactiveOptions};
use super::runtime::Runtime;
use super::target::Target;
use crate::value::Value;

const VALUE_KEY: &str = "value";

/// A reactive box around one value.
#[derive(Clone)]
pub struct Ref {
    handle: ReactiveHandle,
}

impl Ref {
    /// Read the value, tracking it.
    pub fn get(&self) -> Observed {
        self.handle.get(VALUE_KEY)
    }

    /// Read the value without tracking.
    pub fn get_untracked(&self) -> Value {
        self.handle.get_untracked(VALUE_KEY)
    }

    /// Replace the value. A strictly equal value is a no-op.
    pub fn set(&self, value: impl Into<Value>) -> bool {
        self.handle.set(VALUE_KEY, value)
    }

    pub fn handle(&self) -> &ReactiveHandle {
        &self.handle
    }
}

impl fmt::Debug for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.get_untracked()).finish()
    }
}

impl Runtime {
    /// Wrap `value` in a reactive reference cell.
    pub fn reference(&self, value: impl Into<Value>) -> Ref {
        let target = Target::from_entries([(VALUE_KEY, value.into())]);
        Ref {
            handle: self.reactive_target(&target, ReactiveOptions::shallow()),
        }
    }
}
