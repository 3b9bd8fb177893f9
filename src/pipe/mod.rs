//! Composable function pipes.
//!
//! This module lets function composition read left-to-right using either
//! named methods or infix operators, and lets a composed chain be invoked
//! like any function.
//!
//! # Overview
//!
//! - [`Pipe`]: a composable wrapped callable. [`Pipe::then`] / `|` composes
//!   sequentially, [`Pipe::then_spread`] / `>>` additionally spreads
//!   sequence results across the next stage's parameters.
//! - [`Value`] and [`Args`]: the dynamic value and argument model pipe
//!   callables operate on.
//! - [`chain`]: folds an ordered sequence of pipes into one, under a
//!   uniform [`ChainMode`].
//! - [`map_pipe`], [`filter_pipe`], [`reduce_pipe`]: pipes over call-time
//!   sequences.
//! - [`pipe_class!`](crate::pipe_class): class-wide pipe conversion.
//!
//! # Examples
//!
//! ## Operator-driven pipelines
//!
//! ```rust
//! use funcpipe::pipe::{Pipe, Value};
//!
//! fn add(amount: i64) -> Pipe {
//!     Pipe::function(&["x", "y"], move |values| {
//!         Value::seq([
//!             values[0].expect_int() + amount,
//!             values[1].expect_int() + amount,
//!         ])
//!     })
//! }
//!
//! let sum = Pipe::function(&["x", "y"], |values| {
//!     Value::Int(values[0].expect_int() + values[1].expect_int())
//! });
//!
//! // (1, 2) -> (2, 3) -> (4, 5) -> 9
//! assert_eq!(Value::from((1, 2)) >> add(1) >> add(2) >> sum, Value::Int(9));
//! ```
//!
//! ## Plain vs. spreading application
//!
//! ```rust
//! use funcpipe::pipe::{Pipe, Value};
//!
//! let length = Pipe::unary(|value| Value::Int(value.expect_seq().len() as i64));
//!
//! // `|` passes the sequence whole; `>>` would spread it.
//! assert_eq!(Value::seq([1, 2, 3]) | length, Value::Int(3));
//! ```
//!
//! # Laws
//!
//! - **Immutability**: `base.then(p)` never mutates `base`; composing the
//!   same base twice yields two independent pipes.
//! - **Associativity of invocation**: for plain unary stages,
//!   `value | (f | g) | h` equals `value | (f | (g | h))`.

mod args;
mod chain;
mod class_macro;
mod func_pipe;
mod value;

pub use args::{ArgumentError, Args};
pub use chain::{ChainMode, EmptyChainError, chain, filter_pipe, map_pipe, reduce_pipe};
pub use func_pipe::Pipe;
pub use value::Value;

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::pipe_class;
