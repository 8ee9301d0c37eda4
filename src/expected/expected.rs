use crate::error::BadAccess;
use crate::expected::Unexpected;

/// Either a success value of type `T` or an error of type `E`, never both.
///
/// Assigning over an `Expected` drops the old payload before the new one
/// takes its place, so exactly one payload is alive at every point a caller
/// can observe.
#[must_use = "this `Expected` may hold an error, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> Expected<T, E> {
    pub const fn new(value: T) -> Expected<T, E> {
        Expected::Value(value)
    }

    pub const fn unexpected(error: E) -> Expected<T, E> {
        Expected::Error(error)
    }

    /// Builds the value from `args` through `T::from`, skipping any
    /// intermediate `Expected`.
    pub fn in_place<A>(args: A) -> Expected<T, E>
    where
        T: From<A>,
    {
        Expected::Value(T::from(args))
    }

    pub fn in_place_with<F>(make: F) -> Expected<T, E>
    where
        F: FnOnce() -> T,
    {
        Expected::Value(make())
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Expected::Value(_))
    }

    pub const fn is_error(&self) -> bool {
        !self.has_value()
    }

    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Expected::Value(value) => Some(value),
            Expected::Error(_) => None,
        }
    }

    pub const fn as_error(&self) -> Option<&E> {
        match self {
            Expected::Value(_) => None,
            Expected::Error(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    pub const fn as_mut(&mut self) -> Expected<&mut T, &mut E> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    /// The success value, or `BadAccess` if this holds an error.
    pub const fn value(&self) -> Result<&T, BadAccess> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(_) => Err(BadAccess),
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadAccess> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(_) => Err(BadAccess),
        }
    }

    /// The error, or `BadAccess` if this holds a value.
    pub const fn error(&self) -> Result<&E, BadAccess> {
        match self {
            Expected::Value(_) => Err(BadAccess),
            Expected::Error(error) => Ok(error),
        }
    }

    pub fn into_value(self) -> Result<T, BadAccess> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(_) => Err(BadAccess),
        }
    }

    pub fn into_error(self) -> Result<E, BadAccess> {
        match self {
            Expected::Value(_) => Err(BadAccess),
            Expected::Error(error) => Ok(error),
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Expected::Value(value) => value,
            Expected::Error(_) => default,
        }
    }

    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Expected::Value(value) => value,
            Expected::Error(error) => default(error),
        }
    }

    /// Chains a fallible step; `f` only runs when a value is present.
    pub fn and_then<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        match self {
            Expected::Value(value) => f(value),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    /// Recovers from an error; `f` only runs when an error is present.
    pub fn or_else<E2, F>(self, f: F) -> Expected<T, E2>
    where
        F: FnOnce(E) -> Expected<T, E2>,
    {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => f(error),
        }
    }

    pub fn transform<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Expected::Value(value) => Expected::Value(f(value)),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    pub fn transform_error<E2, F>(self, f: F) -> Expected<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(f(error)),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

// Unit success: the `Expected<void, E>` shape.
impl<E> Expected<(), E> {
    pub const fn success() -> Expected<(), E> {
        Expected::Value(())
    }

    /// Succeeds silently on success, `BadAccess` on error.
    pub const fn check(&self) -> Result<(), BadAccess> {
        match self {
            Expected::Value(_) => Ok(()),
            Expected::Error(_) => Err(BadAccess),
        }
    }

    pub fn and_then_unit<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce() -> Expected<U, E>,
    {
        match self {
            Expected::Value(()) => f(),
            Expected::Error(error) => Expected::Error(error),
        }
    }
}

impl<E> Default for Expected<(), E> {
    fn default() -> Self {
        Expected::success()
    }
}

impl<T, E> From<Unexpected<E>> for Expected<T, E> {
    fn from(unexpected: Unexpected<E>) -> Self {
        Expected::Error(unexpected.into_inner())
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Expected::Value(value),
            Err(error) => Expected::Error(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        match expected {
            Expected::Value(value) => Ok(value),
            Expected::Error(error) => Err(error),
        }
    }
}

impl<T, E> From<&Expected<T, E>> for bool {
    fn from(expected: &Expected<T, E>) -> Self {
        expected.has_value()
    }
}
