//! # funcpipe
//!
//! A small utility library for functional composition: composable pipes,
//! memoization, and write-once attribute stores.
//!
//! ## Overview
//!
//! The library provides three independent components:
//!
//! - **Pipe**: wraps a callable into a composable unit. Pipes are chained
//!   left-to-right with [`then`](pipe::Pipe::then) / `|` (plain sequential
//!   apply) or [`then_spread`](pipe::Pipe::then_spread) / `>>` (sequential
//!   apply with argument unpacking), support partial application, binding to
//!   an owning value, and class-wide conversion via [`pipe_class!`].
//! - **Cache**: memoization through [`Memo`](cache::Memo) (a cache store
//!   declared as a field for per-instance scope) and
//!   [`Cached`](cache::Cached) (a wrapped free function with one shared
//!   store).
//! - **ConstantAttributes**: a named-attribute store in which each name can
//!   be assigned exactly once.
//!
//! ## Feature Flags
//!
//! - `pipe`: composable pipes and the chain/map/filter/reduce constructors
//! - `cache`: memoization stores
//! - `constant`: write-once attribute stores
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcpipe::pipe::{Pipe, Value};
//!
//! let double = Pipe::unary(|value| Value::Int(value.expect_int() * 2));
//! let add_one = Pipe::unary(|value| Value::Int(value.expect_int() + 1));
//!
//! let pipeline = double | add_one;
//! assert_eq!(Value::from(5) | pipeline, Value::Int(11));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// `pipe_class!` expands paths through `$crate::paste`.
#[doc(hidden)]
pub use paste;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funcpipe::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "pipe")]
    pub use crate::pipe::*;

    #[cfg(feature = "cache")]
    pub use crate::cache::*;

    #[cfg(feature = "constant")]
    pub use crate::constant::*;
}

#[cfg(feature = "pipe")]
pub mod pipe;

#[cfg(feature = "cache")]
pub mod cache;

#[cfg(feature = "constant")]
pub mod constant;
