//! The composable pipe type.
//!
//! A [`Pipe`] is a node holding a head callable and an ordered list of
//! continuations, each marked as plain or spreading. Composition never
//! mutates: [`Pipe::then`] and [`Pipe::then_spread`] return a new pipe
//! layering one continuation on top of the original, and sub-chains are
//! shared structurally through `Rc`, so a previously built pipe can be
//! reused inside multiple larger chains without interference.

use std::fmt;
use std::ops::{BitOr, Shr};
use std::rc::Rc;

use smallvec::SmallVec;

use super::args::Args;
use super::value::Value;

const CONTINUATION_INLINE_CAPACITY: usize = 4;

type HeadFn = Rc<dyn Fn(Args) -> Value>;

/// One chained stage: the next pipe and whether its input is spread.
#[derive(Clone)]
struct Continuation {
    pipe: Rc<Pipe>,
    spread: bool,
}

/// A composable wrapped callable.
///
/// Pipes compose left-to-right with [`then`](Self::then) (plain sequential
/// apply) and [`then_spread`](Self::then_spread) (sequential apply with
/// argument unpacking); the `|` and `>>` operators delegate to them. A value
/// on the left of `|` or `>>` applies the pipe instead:
/// `value | pipe` passes the value whole, `value >> pipe` spreads it.
///
/// Pipes are single-threaded by design (`!Send`, `!Sync`); cloning is cheap
/// and shares structure.
///
/// # Examples
///
/// ## Plain vs. spreading composition
///
/// ```rust
/// use funcpipe::pipe::{Pipe, Value};
///
/// // Returns a pair, as a sequence.
/// let split = Pipe::unary(|value| {
///     let n = value.expect_int();
///     Value::seq([n, n + 1])
/// });
/// let sum = Pipe::function(&["x", "y"], |values| {
///     Value::Int(values[0].expect_int() + values[1].expect_int())
/// });
///
/// // `then_spread`: the pair is spread across `sum`'s parameters.
/// assert_eq!((split.clone() >> sum).apply(3), Value::Int(7));
///
/// // `then`: the pair arrives whole, as one sequence argument.
/// let count = Pipe::unary(|value| Value::Int(value.expect_seq().len() as i64));
/// assert_eq!((split | count).apply(3), Value::Int(2));
/// ```
///
/// ## Reverse application
///
/// ```rust
/// use funcpipe::pipe::{Pipe, Value};
///
/// let sum = Pipe::function(&["x", "y", "z"], |values| {
///     Value::Int(values.iter().map(Value::expect_int).sum())
/// });
///
/// // A mapping spreads as named arguments, a sequence as positional ones.
/// assert_eq!(
///     Value::map([("y", 2), ("x", 1), ("z", 3)]) >> sum.clone(),
///     Value::Int(6)
/// );
/// assert_eq!(Value::seq([1, 2, 3]) >> sum, Value::Int(6));
/// ```
#[derive(Clone)]
pub struct Pipe {
    head: HeadFn,
    continuations: SmallVec<[Continuation; CONTINUATION_INLINE_CAPACITY]>,
}

impl Pipe {
    /// Wraps a callable taking the full argument list.
    ///
    /// The most general constructor; prefer [`unary`](Self::unary) or
    /// [`function`](Self::function) when the callable has a fixed parameter
    /// shape.
    pub fn new(function: impl Fn(Args) -> Value + 'static) -> Self {
        Self {
            head: Rc::new(function),
            continuations: SmallVec::new(),
        }
    }

    /// Wraps a single-argument callable.
    ///
    /// The resulting pipe panics when invoked with anything other than
    /// exactly one positional argument, the dynamic analogue of an arity
    /// error.
    pub fn unary(function: impl Fn(Value) -> Value + 'static) -> Self {
        Self::new(move |arguments| match arguments.into_single() {
            Ok(value) => function(value),
            Err(error) => panic!("{error}"),
        })
    }

    /// Wraps a callable with named parameters.
    ///
    /// Arguments are bound positionally first, then by name, so the pipe
    /// works with both sequence and mapping spreads. The callable receives
    /// the resolved parameter values in declaration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcpipe::pipe::{Pipe, Value};
    ///
    /// let power = Pipe::function(&["base", "exponent"], |values| {
    ///     let base = values[0].expect_int();
    ///     let exponent = u32::try_from(values[1].expect_int()).unwrap();
    ///     Value::Int(base.pow(exponent))
    /// });
    /// assert_eq!(Value::map([("exponent", 3), ("base", 2)]) >> power, Value::Int(8));
    /// ```
    ///
    /// # Panics
    ///
    /// The resulting pipe panics when the arguments cannot be bound to the
    /// parameter list (see [`ArgumentError`](super::ArgumentError)).
    pub fn function<F>(parameters: &[&str], function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        let parameters: Vec<String> = parameters
            .iter()
            .map(|parameter| (*parameter).to_string())
            .collect();
        Self::new(move |arguments| {
            let names: Vec<&str> = parameters.iter().map(String::as_str).collect();
            match arguments.bind(&names) {
                Ok(values) => function(&values),
                Err(error) => panic!("{error}"),
            }
        })
    }

    /// Wraps a method together with its receiver.
    ///
    /// The receiver is captured exactly once, at construction; the pipe then
    /// behaves like a bound method of `owner`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use funcpipe::pipe::{Args, Pipe, Value};
    ///
    /// struct Adder {
    ///     offset: i64,
    /// }
    ///
    /// impl Adder {
    ///     fn add(&self, arguments: Args) -> Value {
    ///         Value::Int(arguments.get(0).unwrap().expect_int() + self.offset)
    ///     }
    /// }
    ///
    /// let adder = Rc::new(Adder { offset: 10 });
    /// let add = Pipe::bound(adder, Adder::add);
    /// assert_eq!(add.apply(5), Value::Int(15));
    /// ```
    pub fn bound<T, F>(owner: Rc<T>, method: F) -> Self
    where
        T: 'static,
        F: Fn(&T, Args) -> Value + 'static,
    {
        Self::new(move |arguments| method(&owner, arguments))
    }

    /// Sequential composition: run `self`, pass the result whole to `next`.
    ///
    /// Returns a new pipe; `self` is unchanged. Equivalent to `self | next`.
    #[must_use]
    pub fn then(&self, next: Self) -> Self {
        self.chain_continuation(next, false)
    }

    /// Sequential composition with unpacking: run `self`, and when the
    /// result is an ordered sequence, spread its elements across `next`'s
    /// positional parameters; pass it whole otherwise.
    ///
    /// Returns a new pipe; `self` is unchanged. Equivalent to `self >> next`.
    #[must_use]
    pub fn then_spread(&self, next: Self) -> Self {
        self.chain_continuation(next, true)
    }

    fn chain_continuation(&self, next: Self, spread: bool) -> Self {
        let mut composed = self.clone();
        composed.continuations.push(Continuation {
            pipe: Rc::new(next),
            spread,
        });
        composed
    }

    /// Invokes the pipe: the head callable first, then every continuation
    /// in registration order.
    ///
    /// A continuation marked spreading receives a sequence result as spread
    /// positional arguments; any other result, and every result reaching a
    /// plain continuation, arrives as a single argument.
    pub fn call(&self, arguments: Args) -> Value {
        let mut result = (self.head)(arguments);
        for continuation in &self.continuations {
            let next_arguments = if continuation.spread && result.is_seq() {
                Args::spread(result)
            } else {
                Args::single(result)
            };
            result = continuation.pipe.call(next_arguments);
        }
        result
    }

    /// Invokes the pipe with one argument. Equivalent to `value | pipe`.
    pub fn apply(&self, value: impl Into<Value>) -> Value {
        self.call(Args::single(value))
    }

    /// Invokes the pipe, spreading the value first.
    /// Equivalent to `value >> pipe`.
    ///
    /// A sequence spreads as positional arguments, a mapping as named
    /// arguments, anything else is passed as a single argument.
    pub fn apply_spread(&self, value: impl Into<Value>) -> Value {
        self.call(Args::spread(value.into()))
    }

    /// Partial application: a fresh single-node pipe whose head is this
    /// pipe's head callable with `bound` pre-applied.
    ///
    /// Call-time positionals are appended after the bound ones; call-time
    /// named arguments override bound entries of the same name. The original
    /// pipe's continuations are not carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcpipe::pipe::{Args, Pipe, Value};
    ///
    /// let sum = Pipe::function(&["x", "y", "z"], |values| {
    ///     Value::Int(values.iter().map(Value::expect_int).sum())
    /// });
    ///
    /// let with_z = sum.partial(Args::new().named_arg("z", 3));
    /// assert_eq!(Value::map([("y", 2), ("x", 1)]) >> with_z, Value::Int(6));
    /// ```
    #[must_use]
    pub fn partial(&self, bound: Args) -> Self {
        let head = Rc::clone(&self.head);
        Self::new(move |call_arguments| head(Args::merge(bound.clone(), call_arguments)))
    }
}

impl fmt::Debug for Pipe {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipe")
            .field("continuations", &self.continuations.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Composition operators
// =============================================================================

impl BitOr for Pipe {
    type Output = Self;

    fn bitor(self, next: Self) -> Self {
        self.then(next)
    }
}

impl BitOr<Pipe> for &Pipe {
    type Output = Pipe;

    fn bitor(self, next: Pipe) -> Pipe {
        self.then(next)
    }
}

impl Shr for Pipe {
    type Output = Self;

    fn shr(self, next: Self) -> Self {
        self.then_spread(next)
    }
}

impl Shr<Pipe> for &Pipe {
    type Output = Pipe;

    fn shr(self, next: Pipe) -> Pipe {
        self.then_spread(next)
    }
}

// =============================================================================
// Reverse application operators
// =============================================================================

impl BitOr<Pipe> for Value {
    type Output = Self;

    fn bitor(self, pipe: Pipe) -> Self {
        pipe.apply(self)
    }
}

impl BitOr<&Pipe> for Value {
    type Output = Self;

    fn bitor(self, pipe: &Pipe) -> Self {
        pipe.apply(self)
    }
}

impl Shr<Pipe> for Value {
    type Output = Self;

    fn shr(self, pipe: Pipe) -> Self {
        pipe.apply_spread(self)
    }
}

impl Shr<&Pipe> for Value {
    type Output = Self;

    fn shr(self, pipe: &Pipe) -> Self {
        pipe.apply_spread(self)
    }
}

static_assertions::assert_impl_all!(Pipe: Clone);
static_assertions::assert_not_impl_any!(Pipe: Send, Sync);
