//! The memoization store.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::hash::Hash;

/// A memoization store mapping argument keys to computed results.
///
/// An entry, once populated, is never invalidated except by
/// [`clear`](Self::clear), which empties the whole store. Declared as a
/// field on an owning type, a `Memo` gives that type per-instance cache
/// scope: every instance carries its own store, so two instances never
/// share entries.
///
/// Keys are typed (`A: Eq + Hash`), so arguments of different types can
/// never collide — there is no serialization step anywhere in the lookup.
///
/// # Thread Safety
///
/// This type is not `Sync`; it is designed for single-threaded use. A
/// concurrent port would replace the `RefCell` with a lock per store.
///
/// # Examples
///
/// ## As a per-instance cache field
///
/// ```rust
/// use funcpipe::cache::Memo;
/// use std::cell::Cell;
///
/// struct Grid {
///     scale: u64,
///     area_memo: Memo<(u64, u64), u64>,
///     computations: Cell<usize>,
/// }
///
/// impl Grid {
///     fn area(&self, width: u64, height: u64) -> u64 {
///         self.area_memo.get_or_insert_with((width, height), || {
///             self.computations.set(self.computations.get() + 1);
///             width * height * self.scale
///         })
///     }
/// }
///
/// let grid = Grid { scale: 2, area_memo: Memo::new(), computations: Cell::new(0) };
/// assert_eq!(grid.area(3, 4), 24);
/// assert_eq!(grid.area(3, 4), 24);
/// assert_eq!(grid.computations.get(), 1); // computed once
///
/// grid.area_memo.clear();
/// assert_eq!(grid.area(3, 4), 24);
/// assert_eq!(grid.computations.get(), 2); // recomputed after clear
/// ```
#[derive(Debug)]
pub struct Memo<A, R> {
    entries: RefCell<HashMap<A, R>>,
}

impl<A, R> Memo<A, R> {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Empties the store. Other stores are unaffected.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// A borrow of the underlying mapping, for inspection.
    ///
    /// Mutating the store (`insert`, `clear`, a cache miss) while the
    /// borrow is held panics, as with any `RefCell`.
    pub fn entries(&self) -> Ref<'_, HashMap<A, R>> {
        self.entries.borrow()
    }
}

impl<A: Eq + Hash, R> Memo<A, R> {
    /// Returns `true` if `key` has a cached result.
    pub fn contains(&self, key: &A) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Stores a result for `key`. An already present entry is kept.
    pub fn insert(&self, key: A, value: R) {
        self.entries.borrow_mut().entry(key).or_insert(value);
    }
}

impl<A: Eq + Hash, R: Clone> Memo<A, R> {
    /// The cached result for `key`, if present.
    pub fn get(&self, key: &A) -> Option<R> {
        self.entries.borrow().get(key).cloned()
    }

    /// The cached result for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs at most once per distinct key until
    /// [`clear`](Self::clear). The borrow is not held across `compute`, so
    /// the computation may itself consult the store; if it populates the
    /// same key, that first write wins.
    pub fn get_or_insert_with<F>(&self, key: A, compute: F) -> R
    where
        F: FnOnce() -> R,
    {
        if let Some(existing) = self.get(&key) {
            return existing;
        }
        let value = compute();
        self.entries.borrow_mut().entry(key).or_insert(value).clone()
    }
}

impl<A, R> Default for Memo<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_not_impl_any!(Memo<i64, i64>: Sync);
