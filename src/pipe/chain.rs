//! The chain builder and the sequence-transformation pipe constructors.

use std::fmt;

use super::args::Args;
use super::func_pipe::Pipe;
use super::value::Value;

/// How [`chain`] composes consecutive stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainMode {
    /// Each stage receives the previous result whole ([`Pipe::then`]).
    #[default]
    Plain,
    /// Sequence results are spread across the next stage's positional
    /// parameters ([`Pipe::then_spread`]).
    Spread,
}

/// A chain was requested over zero stages.
///
/// A caller-side programming mistake, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyChainError;

impl fmt::Display for EmptyChainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cannot build a chain from zero stages")
    }
}

impl std::error::Error for EmptyChainError {}

/// Folds an ordered sequence of pipes into one composed pipe, left to right,
/// using the same composition mode throughout.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe::{chain, ChainMode, Pipe, Value};
///
/// let parse = Pipe::unary(|value| {
///     Value::Float(value.expect_str().parse().unwrap())
/// });
/// let truncate = Pipe::unary(|value| Value::Int(value.expect_float() as i64));
/// let render = Pipe::unary(|value| Value::Str(value.to_string()));
///
/// let pipeline = chain([parse, truncate, render], ChainMode::Plain).unwrap();
/// assert_eq!(Value::from("1.2") | pipeline, Value::from("1"));
/// ```
///
/// # Errors
///
/// [`EmptyChainError`] when `stages` yields no pipe at all.
pub fn chain<I>(stages: I, mode: ChainMode) -> Result<Pipe, EmptyChainError>
where
    I: IntoIterator<Item = Pipe>,
{
    let mut stages = stages.into_iter();
    let first = stages.next().ok_or(EmptyChainError)?;
    Ok(stages.fold(first, |composed, next| match mode {
        ChainMode::Plain => composed.then(next),
        ChainMode::Spread => composed.then_spread(next),
    }))
}

/// A pipe applying `function` to each element of a sequence supplied at
/// call time.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe::{map_pipe, Value};
///
/// let add_one = map_pipe(|value| Value::Int(value.expect_int() + 1));
/// assert_eq!(Value::seq([1, 2]) | add_one, Value::seq([2, 3]));
/// ```
///
/// # Panics
///
/// The resulting pipe panics when invoked with anything other than a single
/// sequence argument.
pub fn map_pipe<F>(function: F) -> Pipe
where
    F: Fn(Value) -> Value + 'static,
{
    Pipe::new(move |arguments| {
        let items = expect_sequence("map", arguments);
        Value::Seq(items.into_iter().map(&function).collect())
    })
}

/// A pipe keeping the elements of a call-time sequence that satisfy
/// `predicate`.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe::{filter_pipe, Value};
///
/// let evens = filter_pipe(|value| value.expect_int() % 2 == 0);
/// assert_eq!(Value::seq([1, 2, 3, 4]) | evens, Value::seq([2, 4]));
/// ```
///
/// # Panics
///
/// The resulting pipe panics when invoked with anything other than a single
/// sequence argument.
pub fn filter_pipe<F>(predicate: F) -> Pipe
where
    F: Fn(&Value) -> bool + 'static,
{
    Pipe::new(move |arguments| {
        let items = expect_sequence("filter", arguments);
        Value::Seq(items.into_iter().filter(|item| predicate(item)).collect())
    })
}

/// A pipe folding a call-time sequence with `function`, seeded from the
/// first element.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe::{reduce_pipe, Value};
///
/// let sum = reduce_pipe(|accumulator, item| {
///     Value::Int(accumulator.expect_int() + item.expect_int())
/// });
/// assert_eq!(Value::seq([1, 2, 3, 4]) | sum, Value::Int(10));
/// ```
///
/// # Panics
///
/// The resulting pipe panics when invoked with anything other than a single
/// non-empty sequence argument.
pub fn reduce_pipe<F>(function: F) -> Pipe
where
    F: Fn(Value, Value) -> Value + 'static,
{
    Pipe::new(move |arguments| {
        let mut items = expect_sequence("reduce", arguments).into_iter();
        let Some(first) = items.next() else {
            panic!("reduce pipe requires a non-empty sequence");
        };
        items.fold(first, &function)
    })
}

fn expect_sequence(operation: &str, arguments: Args) -> Vec<Value> {
    match arguments.into_single() {
        Ok(Value::Seq(items)) => items,
        Ok(other) => panic!("{operation} pipe expects a sequence argument, got {other}"),
        Err(error) => panic!("{operation} pipe expects a single sequence argument: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_of_one_stage() {
        let increment = Pipe::unary(|value| Value::Int(value.expect_int() + 1));
        let pipeline = chain([increment], ChainMode::Plain).unwrap();
        assert_eq!(pipeline.apply(1), Value::Int(2));
    }

    #[test]
    fn test_chain_rejects_zero_stages() {
        let result = chain([], ChainMode::Plain);
        assert_eq!(result.unwrap_err(), EmptyChainError);
    }

    #[test]
    fn test_chain_spread_mode_spreads_sequences() {
        let pair = Pipe::unary(|value| {
            let n = value.expect_int();
            Value::seq([n, n])
        });
        let sum = Pipe::function(&["x", "y"], |values| {
            Value::Int(values[0].expect_int() + values[1].expect_int())
        });
        let pipeline = chain([pair, sum], ChainMode::Spread).unwrap();
        assert_eq!(pipeline.apply(4), Value::Int(8));
    }

    #[test]
    #[should_panic(expected = "map pipe expects a sequence argument")]
    fn test_map_pipe_rejects_scalars() {
        let identity = map_pipe(|value| value);
        identity.apply(1);
    }

    #[test]
    #[should_panic(expected = "reduce pipe requires a non-empty sequence")]
    fn test_reduce_pipe_rejects_empty_sequences() {
        let sum = reduce_pipe(|accumulator, _| accumulator);
        sum.apply(Value::Seq(Vec::new()));
    }
}
