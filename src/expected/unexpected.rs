/// Marks a value as the error payload when building an `Expected`.
///
/// `Expected<i32, i32>::from(Unexpected(7))` holds the error `7`, whereas
/// `Expected::new(7)` holds the value `7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unexpected<E>(pub E);

impl<E> Unexpected<E> {
    pub const fn new(error: E) -> Unexpected<E> {
        Unexpected(error)
    }

    pub const fn error(&self) -> &E {
        &self.0
    }

    pub fn into_inner(self) -> E {
        self.0
    }

    /// Re-tags the carried error as a compatible error type.
    pub fn convert<G>(self) -> Unexpected<G>
    where
        G: From<E>,
    {
        Unexpected(G::from(self.0))
    }
}

pub const fn make_unexpected<E>(error: E) -> Unexpected<E> {
    Unexpected(error)
}
