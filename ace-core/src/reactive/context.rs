//! Tracking Context
//!
//! The tracking context records which computation is currently running, so
//! that a property read knows whom to register as a dependent.
//!
//! # Implementation
//!
//! Each [`Runtime`](super::Runtime) owns a stack of frames. Entering a
//! computation pushes a frame; the returned [`TrackingScope`] pops it when
//! dropped, including during a panic unwind. A nested tracked call therefore
//! replaces the active computation for its own duration and restores the
//! outer one on return.
//!
//! A frame may also be empty. `Runtime::untracked` pushes one so that reads
//! inside it are attributed to nobody.

use std::cell::RefCell;

use smallvec::SmallVec;

use super::computation::{Computation, ComputationId};

/// One level of the tracking stack.
#[derive(Debug, Clone)]
enum Frame {
    Tracking(Computation),
    Untracked,
}

/// The per-runtime tracking stack.
#[derive(Debug, Default)]
pub(crate) struct TrackingStack {
    frames: RefCell<SmallVec<[Frame; 4]>>,
}

impl TrackingStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The computation reads should be attributed to, if any.
    pub(crate) fn active(&self) -> Option<Computation> {
        match self.frames.borrow().last() {
            Some(Frame::Tracking(computation)) => Some(computation.clone()),
            _ => None,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Make `computation` the active one until the scope is dropped.
    pub(crate) fn enter(&self, computation: Computation) -> TrackingScope<'_> {
        let expected = Some(computation.id());
        self.frames.borrow_mut().push(Frame::Tracking(computation));
        TrackingScope {
            stack: self,
            expected,
        }
    }

    /// Suspend tracking until the scope is dropped.
    pub(crate) fn enter_untracked(&self) -> TrackingScope<'_> {
        self.frames.borrow_mut().push(Frame::Untracked);
        TrackingScope {
            stack: self,
            expected: None,
        }
    }
}

/// Guard that pops the tracking frame when dropped.
pub(crate) struct TrackingScope<'a> {
    stack: &'a TrackingStack,
    expected: Option<ComputationId>,
}

impl Drop for TrackingScope<'_> {
    fn drop(&mut self) {
        let popped = self.stack.frames.borrow_mut().pop();

        // Catch mismatched enter/exit pairs early.
        let popped_id = match popped {
            Some(Frame::Tracking(computation)) => Some(computation.id()),
            _ => None,
        };
        debug_assert_eq!(
            popped_id, self.expected,
            "tracking scope mismatch: expected {:?}, got {:?}",
            self.expected, popped_id
        );
    }
}
