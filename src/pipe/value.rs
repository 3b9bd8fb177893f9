//! The dynamic value model pipes operate on.
//!
//! Pipe stages decide at run time whether a result should be spread across
//! the next stage's parameters (an ordered sequence, or a mapping when
//! applied with [`Pipe::apply_spread`](super::Pipe::apply_spread)) or passed
//! whole. That decision needs a value representation that carries its own
//! shape, which is what [`Value`] provides.

use std::fmt;

/// A dynamically shaped value flowing through a pipe.
///
/// Sequences ([`Value::Seq`]) and mappings ([`Value::Map`]) are the two
/// shapes with spreading behavior; everything else is always passed as a
/// single argument. Mappings preserve insertion order.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe::Value;
///
/// // Tuples convert to sequences.
/// assert_eq!(Value::from((1, 2)), Value::seq([1, 2]));
///
/// assert_eq!(Value::from("hello").as_str(), Some("hello"));
/// assert_eq!(Value::from(3).as_int(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a meaningful value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered sequence. Spread as positional arguments.
    Seq(Vec<Value>),
    /// An insertion-ordered mapping. Spread as named arguments.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Builds a [`Value::Seq`] from anything iterable over convertible items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcpipe::pipe::Value;
    ///
    /// let sequence = Value::seq([1, 2, 3]);
    /// assert_eq!(sequence.as_seq().map(<[Value]>::len), Some(3));
    /// ```
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a [`Value::Map`] from `(name, value)` pairs, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcpipe::pipe::Value;
    ///
    /// let mapping = Value::map([("x", 1), ("y", 2)]);
    /// assert!(mapping.is_map());
    /// ```
    pub fn map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns `true` if this value is an ordered sequence.
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns `true` if this value is a mapping.
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// The boolean inside, if this is a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer inside, if this is a [`Value::Int`].
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float inside, if this is a [`Value::Float`].
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The string inside, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The elements inside, if this is a [`Value::Seq`].
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The entries inside, if this is a [`Value::Map`].
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Self::Map(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// The integer inside.
    ///
    /// # Panics
    ///
    /// Panics if this is not a [`Value::Int`]. Intended for use inside pipe
    /// callables, where a shape mismatch is a caller-side programming
    /// mistake analogous to a dynamic type error.
    pub fn expect_int(&self) -> i64 {
        self.as_int()
            .unwrap_or_else(|| panic!("expected an integer value, got {self}"))
    }

    /// The float inside.
    ///
    /// # Panics
    ///
    /// Panics if this is not a [`Value::Float`].
    pub fn expect_float(&self) -> f64 {
        self.as_float()
            .unwrap_or_else(|| panic!("expected a float value, got {self}"))
    }

    /// The string inside.
    ///
    /// # Panics
    ///
    /// Panics if this is not a [`Value::Str`].
    pub fn expect_str(&self) -> &str {
        self.as_str()
            .unwrap_or_else(|| panic!("expected a string value, got {self}"))
    }

    /// Consumes the value, returning the elements of a [`Value::Seq`].
    ///
    /// # Panics
    ///
    /// Panics if this is not a [`Value::Seq`].
    pub fn expect_seq(self) -> Vec<Value> {
        match self {
            Self::Seq(items) => items,
            other => panic!("expected a sequence value, got {other}"),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Seq(items)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((first, second): (A, B)) -> Self {
        Self::Seq(vec![first.into(), second.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::Seq(vec![first.into(), second.into(), third.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>, D: Into<Value>> From<(A, B, C, D)> for Value {
    fn from((first, second, third, fourth): (A, B, C, D)) -> Self {
        Self::Seq(vec![
            first.into(),
            second.into(),
            third.into(),
            fourth.into(),
        ])
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(formatter, "()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
            Self::Seq(items) => {
                write!(formatter, "(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, ")")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (name, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{name}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}
