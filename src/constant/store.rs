//! The write-once attribute store and its error type.

use std::fmt;

/// Rejected rebinding of an already-set constant attribute.
///
/// Non-recoverable for that assignment: retrying the same name fails the
/// same way.
///
/// # Examples
///
/// ```rust
/// use funcpipe::constant::ConstantError;
///
/// let error = ConstantError {
///     name: "value".to_string(),
/// };
/// assert_eq!(format!("{error}"), "cannot rebind constant \"value\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantError {
    /// The attribute name whose rebinding was rejected.
    pub name: String,
}

impl fmt::Display for ConstantError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cannot rebind constant \"{}\"", self.name)
    }
}

impl std::error::Error for ConstantError {}

/// A named-attribute store in which each name can be assigned exactly once.
///
/// A base capability to be composed into any data-holding type: embed a
/// `ConstantAttributes` field and route attribute writes through
/// [`set`](Self::set). Names are kept in insertion order.
///
/// There is deliberately no removal operation, so an attribute, once set,
/// is permanent for the store's lifetime — the guard inspects current
/// presence, and nothing can make a name absent again.
///
/// # Examples
///
/// ```rust
/// use funcpipe::constant::ConstantAttributes;
///
/// let mut attributes = ConstantAttributes::new();
/// attributes.set("value", 1).unwrap();
///
/// // Rebinding fails and leaves the stored value untouched.
/// let error = attributes.set("value", 10).unwrap_err();
/// assert_eq!(error.name, "value");
/// assert_eq!(attributes.get("value"), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantAttributes<V> {
    fields: Vec<(String, V)>,
}

impl<V> ConstantAttributes<V> {
    /// An empty store.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Assigns `value` to `name`, exactly once.
    ///
    /// # Errors
    ///
    /// [`ConstantError`] carrying the offending name when `name` is already
    /// set; the existing value is left untouched.
    pub fn set(&mut self, name: impl Into<String>, value: V) -> Result<(), ConstantError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ConstantError { name });
        }
        self.fields.push((name, value));
        Ok(())
    }

    /// The value assigned to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `name` has been assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    /// The assigned names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    /// The number of assigned attributes.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<V> Default for ConstantAttributes<V> {
    fn default() -> Self {
        Self::new()
    }
}
