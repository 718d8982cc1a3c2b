//! Error types for the reactive runtime.
//!
//! Two families of failure exist:
//!
//! - [`ReactiveError`] covers misuse of the public API: declaring a helper on
//!   the wrong kind of member, touching a member that does not exist, or a
//!   runtime that never settles.
//! - [`ComputationError`] covers a single computation failing while it runs.
//!   These are isolated by the flush and reported, never propagated across
//!   unrelated computations.

use std::any::Any;

use thiserror::Error;

use crate::declare::MemberKind;

/// Errors raised synchronously by the runtime API.
#[derive(Debug, Error)]
pub enum ReactiveError {
    /// A declaration helper was applied to the wrong kind of member.
    #[error("@{helper} can only be used on {expected}s, not on \"{found}\"")]
    InvalidDeclaration {
        helper: &'static str,
        expected: MemberKind,
        found: MemberKind,
    },

    /// A member name was declared twice on the same host.
    #[error("member `{0}` is already declared")]
    DuplicateMember(String),

    /// No member with this name has been declared.
    #[error("unknown member `{0}`")]
    UnknownMember(String),

    /// The member exists but has no value to read, such as an effect.
    #[error("member `{0}` is not readable")]
    NotReadable(String),

    /// The member exists but cannot be assigned through the host.
    #[error("member `{0}` is not writable")]
    NotWritable(String),

    /// Computations kept re-triggering each other past the configured limit.
    #[error("runtime did not settle after {batches} batches")]
    Unsettled { batches: usize },

    /// The runtime configuration could not be parsed.
    #[error("invalid runtime configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// A failure inside one computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationError {
    /// The computation returned an error.
    #[error("computation failed: {0}")]
    Failed(String),

    /// The computation panicked.
    #[error("computation panicked: {0}")]
    Panicked(String),
}

impl ComputationError {
    /// Shorthand for [`ComputationError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Build an error from a caught panic payload.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked(message)
    }
}

pub type Result<T, E = ReactiveError> = std::result::Result<T, E>;
