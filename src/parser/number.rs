use crate::error::ErrorKind;
use crate::expected::Expected;
use crate::lexer::{is_digit, Cursor};

/// Parses an unsigned decimal number surrounded by optional blanks.
///
/// <blank>* <digit>+ <blank>* <end>
///
/// A second digit run after the trailing blanks is `BlankInterDigits`; any
/// other leftover byte is `InvalidCharacter`. No digit at all is `Empty`.
pub const fn parse_number(input: &[u8]) -> Expected<u64, ErrorKind> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();

    let value = attempt!(cursor.read_number());

    cursor.skip_whitespace();

    if is_digit(cursor.ch()) {
        Expected::Error(ErrorKind::BlankInterDigits)
    } else if !cursor.is_at_end() {
        Expected::Error(ErrorKind::InvalidCharacter)
    } else {
        Expected::Value(value)
    }
}
