use crate::parser::{MAX_BASE, MIN_BASE};

use std::fmt;

/// A value reduced modulo the base `B`, fixed at compile time.
///
/// `B` must lie in `[2, 2^32]` so that every residue fits in a `u32`;
/// any other base fails to compile as soon as `Digit::<B>::new` is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit<const B: u64> {
    value: u32,
}

impl<const B: u64> Digit<B> {
    const VALID_BASE: () = assert!(
        B >= MIN_BASE && B <= MAX_BASE,
        "base must lie in [2, 2^32]"
    );

    pub const fn new(value: u64) -> Digit<B> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BASE;

        Digit {
            value: (value % B) as u32,
        }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn base() -> u64 {
        B
    }
}

impl<const B: u64> From<u64> for Digit<B> {
    fn from(value: u64) -> Self {
        Digit::new(value)
    }
}

impl<const B: u64> fmt::Display for Digit<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, B)
    }
}
