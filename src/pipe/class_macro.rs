//! The `pipe_class!` macro for class-wide pipe conversion.

/// Generates a wrapper type exposing every listed method of a type as a
/// bound [`Pipe`](crate::pipe::Pipe).
///
/// For `class Name { method_a, method_b }` the macro defines `NamePipes`,
/// holding the wrapped value behind an `Rc`. Each listed method — which must
/// have the shape `fn(&self, Args) -> Value` — gets an accessor of the same
/// name returning a pipe bound to the wrapped value, so all of them support
/// pipe composition without individual decoration. The wrapped value itself
/// stays reachable through `inner()`.
///
/// # Examples
///
/// ```rust
/// use funcpipe::pipe_class;
/// use funcpipe::pipe::{Args, Pipe, Value};
///
/// struct Calculator {
///     offset: i64,
/// }
///
/// impl Calculator {
///     fn add_offset(&self, arguments: Args) -> Value {
///         Value::Int(arguments.get(0).unwrap().expect_int() + self.offset)
///     }
///
///     fn negate(&self, arguments: Args) -> Value {
///         Value::Int(-arguments.get(0).unwrap().expect_int())
///     }
/// }
///
/// pipe_class! {
///     /// Pipe-enabled view over [`Calculator`].
///     class Calculator {
///         add_offset,
///         negate,
///     }
/// }
///
/// let calculator = CalculatorPipes::new(Calculator { offset: 10 });
/// let pipeline = calculator.add_offset() | calculator.negate();
/// assert_eq!(pipeline.apply(5), Value::Int(-15));
/// assert_eq!(calculator.inner().offset, 10);
/// ```
#[macro_export]
macro_rules! pipe_class {
    (
        $(#[$meta:meta])*
        $vis:vis class $name:ident {
            $(
                $(#[$method_meta:meta])*
                $method:ident
            ),+ $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            $vis struct [<$name Pipes>] {
                inner: ::std::rc::Rc<$name>,
            }

            impl [<$name Pipes>] {
                #[doc = concat!("Wraps a [`", stringify!($name), "`], exposing its methods as pipes.")]
                $vis fn new(inner: $name) -> Self {
                    Self { inner: ::std::rc::Rc::new(inner) }
                }

                /// The wrapped value.
                $vis fn inner(&self) -> &$name {
                    &self.inner
                }

                $(
                    #[doc = concat!("A pipe bound to [`", stringify!($name), "::", stringify!($method), "`].")]
                    $(#[$method_meta])*
                    $vis fn $method(&self) -> $crate::pipe::Pipe {
                        $crate::pipe::Pipe::bound(
                            ::std::rc::Rc::clone(&self.inner),
                            $name::$method,
                        )
                    }
                )+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::pipe::{Args, Value};

    struct Doubler;

    impl Doubler {
        fn double(&self, arguments: Args) -> Value {
            Value::Int(arguments.get(0).unwrap().expect_int() * 2)
        }
    }

    pipe_class! {
        /// Pipe view over [`Doubler`].
        class Doubler { double }
    }

    #[test]
    fn test_generated_accessor_returns_fresh_bound_pipes() {
        let doubler = DoublerPipes::new(Doubler);
        assert_eq!(doubler.double().apply(3), Value::Int(6));
        // Every access yields a new pipe over the same receiver.
        let pipeline = doubler.double() | doubler.double();
        assert_eq!(pipeline.apply(3), Value::Int(12));
    }
}
