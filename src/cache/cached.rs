//! The memoizing function wrapper.

use std::fmt;
use std::hash::Hash;

use super::memo::Memo;

/// A free function wrapped with one shared memoization store.
///
/// Every call goes through the same [`Memo`], so all callers of the wrapper
/// share one cache scope: the wrapped function executes exactly once per
/// distinct argument, regardless of call count, until
/// [`clear`](Self::clear).
///
/// For per-instance scope on methods, declare a [`Memo`] field on the
/// owning type instead.
///
/// # Examples
///
/// ```rust
/// use funcpipe::cache::Cached;
/// use std::cell::Cell;
///
/// let executions = Cell::new(0);
/// let slow_square = Cached::new(|input: &i64| {
///     executions.set(executions.get() + 1);
///     input * input
/// });
///
/// assert_eq!(slow_square.call(4), 16);
/// assert_eq!(slow_square.call(4), 16);
/// assert_eq!(slow_square.call(5), 25);
/// assert_eq!(executions.get(), 2);
///
/// // The store is inspectable...
/// assert_eq!(slow_square.memo().len(), 2);
///
/// // ...and clearing it forces recomputation.
/// slow_square.clear();
/// assert_eq!(slow_square.call(4), 16);
/// assert_eq!(executions.get(), 3);
/// ```
pub struct Cached<A, R, F> {
    function: F,
    memo: Memo<A, R>,
}

impl<A, R, F> Cached<A, R, F>
where
    A: Eq + Hash,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wraps `function` with an empty store.
    pub fn new(function: F) -> Self {
        Self {
            function,
            memo: Memo::new(),
        }
    }

    /// Invokes the wrapper.
    ///
    /// On a miss the wrapped function runs once and its result is stored
    /// under `argument`; on a hit the stored result is returned without
    /// recomputation.
    pub fn call(&self, argument: A) -> R {
        if let Some(cached) = self.memo.get(&argument) {
            return cached;
        }
        let result = (self.function)(&argument);
        self.memo.insert(argument, result.clone());
        result
    }

    /// Empties this wrapper's store. Other wrappers are unaffected.
    pub fn clear(&self) {
        self.memo.clear();
    }

    /// The underlying store, for inspection.
    pub fn memo(&self) -> &Memo<A, R> {
        &self.memo
    }
}

impl<A: fmt::Debug, R: fmt::Debug, F> fmt::Debug for Cached<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cached")
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_distinct_arguments_compute_separately() {
        let executions = Cell::new(0);
        let double = Cached::new(|input: &i64| {
            executions.set(executions.get() + 1);
            input * 2
        });

        assert_eq!(double.call(1), 2);
        assert_eq!(double.call(2), 4);
        assert_eq!(double.call(1), 2);
        assert_eq!(executions.get(), 2);
    }

    #[test]
    fn test_compound_keys() {
        let concatenate =
            Cached::new(|(left, right): &(String, String)| format!("{left}{right}"));
        assert_eq!(
            concatenate.call(("ab".to_string(), "cd".to_string())),
            "abcd"
        );
        assert!(concatenate
            .memo()
            .contains(&("ab".to_string(), "cd".to_string())));
    }

    #[test]
    fn test_clear_is_scoped_to_one_wrapper() {
        let first = Cached::new(|input: &i64| input + 1);
        let second = Cached::new(|input: &i64| input + 1);
        first.call(1);
        second.call(1);

        first.clear();
        assert!(first.memo().is_empty());
        assert_eq!(second.memo().len(), 1);
    }
}
