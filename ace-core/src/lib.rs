//! Ace Core
//!
//! This crate provides the reactive core of the Ace component toolkit. It
//! implements:
//!
//! - Observable handles over plain objects, with per-property tracking
//! - Eager effects re-run in deduplicated, deferred batches
//! - Lazily recomputed computed cells
//! - Declaration helpers that attach all of the above to a host object
//!
//! # Architecture
//!
//! - `reactive`: the runtime, dependency index, scheduler and primitives
//! - `declare`: `state` / `property` / `computed` / `effect` helpers
//! - `value`: the dynamic value model and the object classification rule
//! - `config`, `error`: runtime configuration and error types
//!
//! # Example
//!
//! ```rust
//! use ace_core::reactive::{ReactiveOptions, Runtime};
//! use ace_core::value::Value;
//! use serde_json::json;
//!
//! let runtime = Runtime::new();
//! let state = runtime
//!     .reactive(Value::from(json!({ "count": 0 })), ReactiveOptions::default())
//!     .into_handle()
//!     .unwrap();
//!
//! let doubled = runtime.computed({
//!     let state = state.clone();
//!     move || state.get("count").as_number().unwrap_or(0.0) * 2.0
//! });
//!
//! let effect = runtime.effect({
//!     let doubled = doubled.clone();
//!     move || println!("doubled: {}", doubled.get())
//! });
//!
//! state.set("count", 1);
//! state.set("count", 2);
//! runtime.settle().unwrap();
//!
//! assert_eq!(doubled.get(), 4.0);
//! assert_eq!(effect.run_count(), 2);
//! ```

pub mod config;
pub mod declare;
pub mod error;
pub mod reactive;
pub mod value;

pub use config::RuntimeConfig;
pub use declare::{Declaration, Host, MemberKind};
pub use error::{ComputationError, ReactiveError};
pub use reactive::{Computed, Effect, Observed, ReactiveHandle, ReactiveOptions, Ref, Runtime};
pub use value::{is_object, Value};
