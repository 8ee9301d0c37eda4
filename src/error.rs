use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Why a parse failed.
///
/// The set is closed: every malformed input is reported as exactly one of
/// these kinds, and the digit-format grammar reports the first rule it
/// violates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum ErrorKind {
    #[error("invalid character")]
    InvalidCharacter,
    #[error("blanks between digits")]
    BlankInterDigits,
    #[error("number does not fit in 64 bits")]
    Overflow,
    #[error("no digits found")]
    Empty,
    #[error("prefix must be `d` or `dig`")]
    InvalidPrefix,
    #[error("expected opening `#` or `[`")]
    MissingDelimiter,
    #[error("closing delimiter missing or does not match the opening one")]
    MismatchedDelimiter,
    #[error("digit field has no digits")]
    InvalidDigit,
    #[error("expected literal `B`")]
    MissingB,
    #[error("base field has no digits")]
    InvalidBase,
    #[error("base must lie in [2, 2^32]")]
    BaseOutOfRange,
}

/// Fixed diagnostic label for `kind`, identical to the variant name.
pub fn error_label(kind: ErrorKind) -> &'static str {
    kind.into()
}

/// Raised by `Expected::value` on an error and by `Expected::error` on a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("bad expected access: the requested payload is not the active one")]
pub struct BadAccess;
