#![cfg(feature = "pipe")]
//! Unit tests for the chain builder and the map/filter/reduce pipe
//! constructors.

use funcpipe::pipe::{
    Args, ChainMode, EmptyChainError, Pipe, Value, chain, filter_pipe, map_pipe, reduce_pipe,
};
use rstest::rstest;

fn parse_float() -> Pipe {
    Pipe::unary(|value| Value::Float(value.expect_str().parse().unwrap()))
}

#[allow(clippy::cast_possible_truncation)]
fn truncate() -> Pipe {
    Pipe::unary(|value| Value::Int(value.expect_float().trunc() as i64))
}

fn render() -> Pipe {
    Pipe::unary(|value| Value::Str(value.to_string()))
}

fn characters() -> Pipe {
    Pipe::unary(|value| Value::Seq(value.expect_str().chars().map(|c| Value::Str(c.to_string())).collect()))
}

fn count_arguments() -> Pipe {
    Pipe::new(|arguments: Args| Value::Int(i64::try_from(arguments.len()).unwrap()))
}

// =============================================================================
// chain
// =============================================================================

#[rstest]
fn plain_chain_passes_results_whole() {
    let pipeline = chain([parse_float(), truncate(), render()], ChainMode::Plain).unwrap();
    assert_eq!(Value::from("1.2") | pipeline, Value::from("1"));
}

#[rstest]
fn spread_chain_spreads_sequence_results() {
    // 1.2 -> "1.2" -> three one-character strings -> 3
    let pipeline = chain(
        [render(), characters(), count_arguments()],
        ChainMode::Spread,
    )
    .unwrap();
    assert_eq!(Value::Float(1.2) >> pipeline, Value::Int(3));
}

#[rstest]
fn chain_of_zero_stages_is_a_usage_error() {
    let error = chain(Vec::new(), ChainMode::Plain).unwrap_err();
    assert_eq!(error, EmptyChainError);
    assert_eq!(error.to_string(), "cannot build a chain from zero stages");
}

#[rstest]
fn chain_agrees_with_manual_composition() {
    let built = chain(
        [parse_float(), truncate(), render()],
        ChainMode::Plain,
    )
    .unwrap();
    let manual = parse_float() | truncate() | render();
    assert_eq!(
        Value::from("42.9") | built,
        Value::from("42.9") | manual
    );
}

// =============================================================================
// map / filter / reduce pipes
// =============================================================================

#[rstest]
fn map_pipe_transforms_each_element() {
    let add_one = map_pipe(|value| Value::Int(value.expect_int() + 1));
    assert_eq!(Value::from((1, 2)) | add_one, Value::seq([2, 3]));
}

#[rstest]
fn filter_pipe_keeps_matching_elements() {
    let evens = filter_pipe(|value| value.expect_int() % 2 == 0);
    assert_eq!(Value::seq([1, 2, 3, 4]) | evens, Value::seq([2, 4]));
}

#[rstest]
fn reduce_pipe_folds_the_sequence() {
    let sum = reduce_pipe(|accumulator, item| {
        Value::Int(accumulator.expect_int() + item.expect_int())
    });
    assert_eq!(Value::seq([1, 2, 3, 4]) | sum, Value::Int(10));
}

#[rstest]
fn sequence_pipes_compose_into_one_pipeline() {
    let add_one = map_pipe(|value| Value::Int(value.expect_int() + 1));
    let evens = filter_pipe(|value| value.expect_int() % 2 == 0);
    let sum = reduce_pipe(|accumulator, item| {
        Value::Int(accumulator.expect_int() + item.expect_int())
    });

    // [1..5] -> [2..6] -> [2, 4, 6] -> 12
    let pipeline = add_one | evens | sum;
    assert_eq!(Value::seq([1, 2, 3, 4, 5]) | pipeline, Value::Int(12));
}

#[rstest]
fn reduce_pipe_over_a_single_element_returns_it() {
    let keep_left = reduce_pipe(|accumulator, _| accumulator);
    assert_eq!(Value::seq([9]) | keep_left, Value::Int(9));
}
