pub mod digit;
pub mod error;
pub mod expected;
pub mod lexer;
pub mod parser;

pub use digit::Digit;
pub use error::{error_label, BadAccess, ErrorKind};
pub use expected::{make_unexpected, Expected, Unexpected};
pub use parser::{parse_digit_format, parse_number, DigitResult, Parse};
