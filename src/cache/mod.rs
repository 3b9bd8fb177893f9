//! Memoization: skip recomputation for repeated identical calls.
//!
//! Two pieces, one concern:
//!
//! - [`Memo`]: the store itself — a typed mapping from argument keys to
//!   results with compute-once semantics and an explicit
//!   [`clear`](Memo::clear). Declared as a field, it gives the owning type
//!   per-instance cache scope.
//! - [`Cached`]: a wrapped free function sharing one store across all
//!   callers.
//!
//! Entries persist until cleared or the owning scope is dropped; there is no
//! eviction policy, size bound, or TTL. Both types are single-threaded
//! (`RefCell`-based, not `Sync`).
//!
//! # Examples
//!
//! ```rust
//! use funcpipe::cache::Cached;
//!
//! let parse = Cached::new(|input: &String| input.parse::<i64>().ok());
//! assert_eq!(parse.call("42".to_string()), Some(42));
//! assert_eq!(parse.memo().len(), 1);
//! ```

mod cached;
mod memo;

pub use cached::Cached;
pub use memo::Memo;
