//! Argument lists passed to pipe callables.
//!
//! [`Args`] carries a positional list and an insertion-ordered named list,
//! mirroring a dynamic calling convention: spreading a sequence fills the
//! positional list, spreading a mapping fills the named list, and
//! [`Args::bind`] resolves a parameter-name list against both.

use std::fmt;

use super::value::Value;

/// The arguments of a single pipe invocation.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe::{Args, Value};
///
/// let arguments = Args::new().arg(1).named_arg("scale", 10);
/// assert_eq!(arguments.positional(), &[Value::Int(1)]);
/// assert_eq!(arguments.get_named("scale"), Some(&Value::Int(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Args {
    /// An empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single positional argument.
    pub fn single(value: impl Into<Value>) -> Self {
        Self {
            positional: vec![value.into()],
            named: Vec::new(),
        }
    }

    /// Positional arguments from a list of values.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            positional: values,
            named: Vec::new(),
        }
    }

    /// Spreads a value into arguments.
    ///
    /// The reverse-apply rule: an ordered sequence spreads as positional
    /// arguments, a mapping spreads as named arguments, anything else
    /// becomes a single positional argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcpipe::pipe::{Args, Value};
    ///
    /// assert_eq!(Args::spread(Value::seq([1, 2])), Args::new().arg(1).arg(2));
    /// assert_eq!(
    ///     Args::spread(Value::map([("x", 1)])),
    ///     Args::new().named_arg("x", 1)
    /// );
    /// assert_eq!(Args::spread(Value::Int(7)), Args::single(7));
    /// ```
    pub fn spread(value: Value) -> Self {
        match value {
            Value::Seq(items) => Self::from_values(items),
            Value::Map(entries) => Self {
                positional: Vec::new(),
                named: entries,
            },
            other => Self::single(other),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Appends a named argument.
    #[must_use]
    pub fn named_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    /// The positional arguments, in order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// The named arguments, in insertion order.
    pub fn named(&self) -> &[(String, Value)] {
        &self.named
    }

    /// The positional argument at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// The named argument called `name`, if present.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.named
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// The total number of arguments, positional and named.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns `true` if there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Merges pre-bound arguments with call-time arguments.
    ///
    /// Partial-application semantics: bound positionals come first with
    /// call-time positionals appended; call-time named entries override
    /// bound entries of the same name.
    pub fn merge(bound: Self, call: Self) -> Self {
        let mut positional = bound.positional;
        positional.extend(call.positional);
        let mut named = bound.named;
        for (name, value) in call.named {
            if let Some(entry) = named.iter_mut().find(|(existing, _)| *existing == name) {
                entry.1 = value;
            } else {
                named.push((name, value));
            }
        }
        Self { positional, named }
    }

    /// Consumes the arguments, expecting exactly one positional argument.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::NotSingle`] if there is any named argument or the
    /// positional count differs from one.
    pub fn into_single(mut self) -> Result<Value, ArgumentError> {
        if self.named.is_empty() && self.positional.len() == 1 {
            Ok(self.positional.remove(0))
        } else {
            Err(ArgumentError::NotSingle {
                received: self.len(),
            })
        }
    }

    /// Resolves a parameter-name list against these arguments.
    ///
    /// Each parameter takes the positional argument at its index when one
    /// exists, and otherwise the named argument of the same name. Every
    /// argument must be consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcpipe::pipe::{Args, Value};
    ///
    /// let arguments = Args::new().arg(1).named_arg("z", 3).named_arg("y", 2);
    /// let bound = arguments.bind(&["x", "y", "z"]).unwrap();
    /// assert_eq!(bound, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::Missing`] when a parameter has no argument.
    /// - [`ArgumentError::TooManyPositional`] when positional arguments
    ///   outnumber parameters.
    /// - [`ArgumentError::Duplicate`] when a named argument targets a
    ///   parameter already filled positionally.
    /// - [`ArgumentError::Unexpected`] when a named argument matches no
    ///   parameter.
    pub fn bind(&self, parameters: &[&str]) -> Result<Vec<Value>, ArgumentError> {
        if self.positional.len() > parameters.len() {
            return Err(ArgumentError::TooManyPositional {
                expected: parameters.len(),
                received: self.positional.len(),
            });
        }
        for (name, _) in &self.named {
            match parameters.iter().position(|parameter| *parameter == name.as_str()) {
                None => {
                    return Err(ArgumentError::Unexpected { name: name.clone() });
                }
                Some(index) if index < self.positional.len() => {
                    return Err(ArgumentError::Duplicate { name: name.clone() });
                }
                Some(_) => {}
            }
        }
        let mut values = Vec::with_capacity(parameters.len());
        for (index, parameter) in parameters.iter().enumerate() {
            if let Some(value) = self.positional.get(index) {
                values.push(value.clone());
            } else if let Some(value) = self.get_named(parameter) {
                values.push(value.clone());
            } else {
                return Err(ArgumentError::Missing {
                    name: (*parameter).to_string(),
                });
            }
        }
        Ok(values)
    }
}

/// An argument list incompatible with the callable's parameters.
///
/// Raised while binding [`Args`] to a callable; the dynamic calling
/// convention's analogue of an arity or keyword error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A parameter received no argument.
    Missing {
        /// The unfilled parameter name.
        name: String,
    },
    /// A named argument matched no parameter.
    Unexpected {
        /// The unmatched argument name.
        name: String,
    },
    /// A named argument targeted a parameter already filled positionally.
    Duplicate {
        /// The doubly supplied parameter name.
        name: String,
    },
    /// More positional arguments than parameters.
    TooManyPositional {
        /// The number of parameters.
        expected: usize,
        /// The number of positional arguments received.
        received: usize,
    },
    /// A single positional argument was required.
    NotSingle {
        /// The number of arguments received.
        received: usize,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(formatter, "missing argument `{name}`"),
            Self::Unexpected { name } => write!(formatter, "unexpected named argument `{name}`"),
            Self::Duplicate { name } => {
                write!(formatter, "argument `{name}` supplied both positionally and by name")
            }
            Self::TooManyPositional { expected, received } => write!(
                formatter,
                "expected at most {expected} positional arguments, received {received}"
            ),
            Self::NotSingle { received } => write!(
                formatter,
                "expected a single positional argument, received {received}"
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_rules() {
        assert_eq!(
            Args::spread(Value::seq([1, 2, 3])).positional().len(),
            3
        );
        assert_eq!(Args::spread(Value::map([("x", 1)])).named().len(), 1);
        assert_eq!(Args::spread(Value::Int(1)), Args::single(1));
    }

    #[test]
    fn test_merge_appends_positional_and_overrides_named() {
        let bound = Args::new().arg(1).named_arg("z", 3);
        let call = Args::new().arg(2).named_arg("z", 30).named_arg("w", 4);
        let merged = Args::merge(bound, call);
        assert_eq!(merged.positional(), &[Value::Int(1), Value::Int(2)]);
        assert_eq!(merged.get_named("z"), Some(&Value::Int(30)));
        assert_eq!(merged.get_named("w"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_bind_mixes_positional_and_named() {
        let arguments = Args::new().arg(10).named_arg("second", 20);
        let bound = arguments.bind(&["first", "second"]).unwrap();
        assert_eq!(bound, vec![Value::Int(10), Value::Int(20)]);
    }

    #[test]
    fn test_bind_rejects_unknown_named_argument() {
        let arguments = Args::new().named_arg("bogus", 1);
        assert_eq!(
            arguments.bind(&["first"]),
            Err(ArgumentError::Unexpected {
                name: "bogus".to_string()
            })
        );
    }

    #[test]
    fn test_bind_rejects_doubly_supplied_parameter() {
        let arguments = Args::new().arg(1).named_arg("first", 2);
        assert_eq!(
            arguments.bind(&["first"]),
            Err(ArgumentError::Duplicate {
                name: "first".to_string()
            })
        );
    }

    #[test]
    fn test_into_single() {
        assert_eq!(Args::single(5).into_single(), Ok(Value::Int(5)));
        assert_eq!(
            Args::new().arg(1).arg(2).into_single(),
            Err(ArgumentError::NotSingle { received: 2 })
        );
    }
}
