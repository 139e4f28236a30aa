//! # deferral
//!
//! A deferred-evaluation primitive for Rust: a container that holds either
//! an already-computed value or a zero-argument computation, plus lazy
//! combinators for composing such containers without forcing evaluation.
//!
//! ## Overview
//!
//! The central type is [`Deferred<T, F>`], a two-variant container:
//!
//! - **`Immediate`**: a concrete value, available without computation
//! - **`Computation`**: an unevaluated closure, run on every retrieval
//!
//! Construction never executes user-supplied code. The combinators
//! ([`map`](Deferred::map), [`flat_map`](Deferred::flat_map),
//! [`zip`](Deferred::zip), [`zip_with`](Deferred::zip_with)) each wrap the
//! computation in another deferred value, so nothing runs until a terminal
//! [`get`](Deferred::get), at which point the whole chain evaluates
//! synchronously, innermost first.
//!
//! ## No memoization
//!
//! Unlike `std::sync::LazyLock` or a cached lazy cell, `Deferred` never
//! caches a computed result: every retrieval against a `Computation`
//! re-invokes the closure, and side effects repeat. This is a deliberate
//! part of the contract that callers may rely on, not an oversight.
//!
//! ## Thread safety
//!
//! `Deferred` holds no interior mutability and performs all work on the
//! calling thread. It is `Send`/`Sync` exactly when its payloads are; any
//! shared mutable state a closure touches is the caller's responsibility.
//!
//! ## Example
//!
//! ```rust
//! use deferral::Deferred;
//!
//! let doubled = Deferred::new_lazy(|| 21).map(|x| x * 2);
//! // Nothing has run yet.
//! assert_eq!(doubled.get(), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use deferral::prelude::*;
/// ```
pub mod prelude {
    pub use crate::deferred::Deferred;
}

pub mod deferred;

pub use deferred::Deferred;
