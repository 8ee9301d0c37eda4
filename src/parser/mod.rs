// `?` for `const fn` bodies: unwraps a value or returns the error.
macro_rules! attempt {
    ($expected:expr) => {
        match $expected {
            $crate::expected::Expected::Value(value) => value,
            $crate::expected::Expected::Error(error) => {
                return $crate::expected::Expected::Error(error)
            }
        }
    };
}

mod digit_format;
mod number;

pub use digit_format::{parse_digit_format, DigitResult, MAX_BASE, MIN_BASE};
pub use number::parse_number;

use crate::error::{error_label, ErrorKind};
use crate::expected::Expected;

use log::{debug, trace};
use std::fmt::Debug;

/// Text-to-value entry point with logging, for callers outside `const` code.
pub trait Parse: Sized {
    /// Short grammar name used in log lines.
    const GRAMMAR: &'static str;

    fn parse_bytes(input: &[u8]) -> Expected<Self, ErrorKind>;

    fn parse(text: &str) -> Expected<Self, ErrorKind>
    where
        Self: Debug,
    {
        let outcome = Self::parse_bytes(text.as_bytes());

        match &outcome {
            Expected::Value(value) => trace!("{} {:?} parsed as {:?}", Self::GRAMMAR, text, value),
            Expected::Error(kind) => debug!(
                "{} {:?} rejected: {} ({})",
                Self::GRAMMAR,
                text,
                error_label(*kind),
                kind
            ),
        }

        outcome
    }

    /// Like `parse`, with a missing input reported as `Empty`.
    fn parse_opt(text: Option<&str>) -> Expected<Self, ErrorKind>
    where
        Self: Debug,
    {
        match text {
            Some(text) => Self::parse(text),
            None => {
                debug!("{} input missing: {}", Self::GRAMMAR, error_label(ErrorKind::Empty));
                Expected::unexpected(ErrorKind::Empty)
            }
        }
    }
}

impl Parse for u64 {
    const GRAMMAR: &'static str = "number";

    fn parse_bytes(input: &[u8]) -> Expected<Self, ErrorKind> {
        parse_number(input)
    }
}

impl Parse for DigitResult {
    const GRAMMAR: &'static str = "digit format";

    fn parse_bytes(input: &[u8]) -> Expected<Self, ErrorKind> {
        parse_digit_format(input)
    }
}
