use crate::digit::Digit;
use crate::error::ErrorKind;
use crate::expected::Expected;
use crate::lexer::Cursor;

use std::fmt;
use std::str::FromStr;

pub const MIN_BASE: u64 = 2;
/// Largest base whose top digit, `base - 1`, still fits in a `u32`.
pub const MAX_BASE: u64 = u32::MAX as u64 + 1;

/// A digit taken modulo a base, as written `d#<digit>#B<base>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitResult {
    digit: u64,
    base: u64,
    result: u32,
}

impl DigitResult {
    /// Fails with `BaseOutOfRange` unless `base` lies in `[MIN_BASE, MAX_BASE]`.
    pub const fn new(digit: u64, base: u64) -> Expected<DigitResult, ErrorKind> {
        if base < MIN_BASE || base > MAX_BASE {
            return Expected::Error(ErrorKind::BaseOutOfRange);
        }

        Expected::Value(DigitResult {
            digit,
            base,
            result: (digit % base) as u32,
        })
    }

    pub const fn digit(&self) -> u64 {
        self.digit
    }

    pub const fn base(&self) -> u64 {
        self.base
    }

    /// `digit mod base`.
    pub const fn result(&self) -> u32 {
        self.result
    }

    /// The parsed digit reduced modulo the fixed base `B`.
    pub const fn residue<const B: u64>(&self) -> Digit<B> {
        Digit::new(self.digit)
    }
}

impl fmt::Display for DigitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d#{}#B{}", self.digit, self.base)
    }
}

impl FromStr for DigitResult {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <DigitResult as super::Parse>::parse(s).into_result()
    }
}

/*
   <prefix> <blank>* <open> <blank>* <digits> <blank>* <close> <blank>*
   B <blank>* <digits> <blank>* <end>

   <prefix> := d | dig
   <open>   := # | [
   <close>  := # after #, ] after [

   The checks run in grammar order and the first failing one decides the
   error; nothing after it is inspected.
*/
pub const fn parse_digit_format(input: &[u8]) -> Expected<DigitResult, ErrorKind> {
    let mut cursor = Cursor::new(input);

    if cursor.is_at_end() {
        return Expected::Error(ErrorKind::Empty);
    }

    // <prefix>
    if !cursor.read_if(b'd') {
        return Expected::Error(ErrorKind::InvalidPrefix);
    }
    if cursor.ch() == b'i' && cursor.peek_char() == b'g' {
        cursor.read_char();
        cursor.read_char();
    }

    cursor.skip_whitespace();

    // <open>
    let close = match cursor.ch() {
        b'#' => b'#',
        b'[' => b']',
        _ => return Expected::Error(ErrorKind::MissingDelimiter),
    };
    cursor.read_char();

    cursor.skip_whitespace();

    let digit = match cursor.read_number() {
        Expected::Value(digit) => digit,
        Expected::Error(ErrorKind::Empty) => return Expected::Error(ErrorKind::InvalidDigit),
        Expected::Error(error) => return Expected::Error(error),
    };

    cursor.skip_whitespace();

    // <close>
    if !cursor.read_if(close) {
        return Expected::Error(ErrorKind::MismatchedDelimiter);
    }

    cursor.skip_whitespace();

    if !cursor.read_if(b'B') {
        return Expected::Error(ErrorKind::MissingB);
    }

    cursor.skip_whitespace();

    let base = match cursor.read_number() {
        Expected::Value(base) => base,
        Expected::Error(ErrorKind::Empty) => return Expected::Error(ErrorKind::InvalidBase),
        Expected::Error(error) => return Expected::Error(error),
    };

    let record = attempt!(DigitResult::new(digit, base));

    cursor.skip_whitespace();

    if !cursor.is_at_end() {
        return Expected::Error(ErrorKind::InvalidCharacter);
    }

    Expected::Value(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const FIVE_MOD_THREE: Expected<DigitResult, ErrorKind> = parse_digit_format(b"d#5#B3");
    const NO_PREFIX: Expected<DigitResult, ErrorKind> = parse_digit_format(b"x#5#B3");

    const _: () = assert!(match FIVE_MOD_THREE.as_value() {
        Some(record) => record.digit() == 5 && record.base() == 3 && record.result() == 2,
        None => false,
    });
    const _: () = assert!(matches!(NO_PREFIX.as_error(), Some(ErrorKind::InvalidPrefix)));

    #[test_case(b"d#5#B3", 5, 3, 2 ; "short prefix hashes")]
    #[test_case(b"dig [7] B 10", 7, 10, 7 ; "long prefix brackets with blanks")]
    #[test_case(b"dig#12#B5", 12, 5, 2 ; "long prefix hashes")]
    #[test_case(b"d[0]B2", 0, 2, 0 ; "zero digit")]
    #[test_case(b"d \t#\n 9 \r#\tB\n4 \t", 9, 4, 1 ; "every blank everywhere")]
    #[test_case(b"d#18446744073709551615#B4294967296", u64::MAX, 4294967296, u32::MAX ; "widest base")]
    #[test_case(b"d#100#B4294967295", 100, 4294967295, 100 ; "u32 max base")]
    fn valid(input: &[u8], digit: u64, base: u64, result: u32) {
        let record = parse_digit_format(input).into_value().unwrap();

        assert_eq!(record.digit(), digit);
        assert_eq!(record.base(), base);
        assert_eq!(record.result(), result);
        assert_eq!(u64::from(record.result()), record.digit() % record.base())
    }

    #[test_case(b"", ErrorKind::Empty ; "empty")]
    #[test_case(b"\0d#5#B3", ErrorKind::InvalidPrefix ; "nul first")]
    #[test_case(b"d\0#5#B3", ErrorKind::MissingDelimiter ; "nul before open")]
    #[test_case(b"d#\05#B3", ErrorKind::InvalidDigit ; "nul in digit field")]
    #[test_case(b"d#5#B\03", ErrorKind::InvalidBase ; "nul in base field")]
    #[test_case(b"x#5#B3", ErrorKind::InvalidPrefix ; "wrong prefix")]
    #[test_case(b" d#5#B3", ErrorKind::InvalidPrefix ; "blank before prefix")]
    #[test_case(b"D#5#B3", ErrorKind::InvalidPrefix ; "prefix is case sensitive")]
    #[test_case(b"d5B3", ErrorKind::MissingDelimiter ; "no delimiter")]
    #[test_case(b"di#5#B3", ErrorKind::MissingDelimiter ; "partial long prefix")]
    #[test_case(b"digit#5#B3", ErrorKind::MissingDelimiter ; "prefix too long")]
    #[test_case(b"d(5)B3", ErrorKind::MissingDelimiter ; "parenthesis")]
    #[test_case(b"d", ErrorKind::MissingDelimiter ; "prefix only")]
    #[test_case(b"d##B3", ErrorKind::InvalidDigit ; "empty digit")]
    #[test_case(b"d#x#B3", ErrorKind::InvalidDigit ; "letter digit")]
    #[test_case(b"d#", ErrorKind::InvalidDigit ; "ends after open")]
    #[test_case(b"d#18446744073709551616#B3", ErrorKind::Overflow ; "digit overflows")]
    #[test_case(b"d#5]B3", ErrorKind::MismatchedDelimiter ; "hash then bracket")]
    #[test_case(b"d[5[B3", ErrorKind::MismatchedDelimiter ; "bracket then bracket")]
    #[test_case(b"d[5#B3", ErrorKind::MismatchedDelimiter ; "bracket then hash")]
    #[test_case(b"d#5 6#B3", ErrorKind::MismatchedDelimiter ; "blank inside digit")]
    #[test_case(b"d#5", ErrorKind::MismatchedDelimiter ; "ends after digit")]
    #[test_case(b"d#5#C3", ErrorKind::MissingB ; "wrong literal")]
    #[test_case(b"d#5#b3", ErrorKind::MissingB ; "literal is case sensitive")]
    #[test_case(b"d#5#3", ErrorKind::MissingB ; "literal missing")]
    #[test_case(b"d#5#B", ErrorKind::InvalidBase ; "empty base")]
    #[test_case(b"d#5#Bx", ErrorKind::InvalidBase ; "letter base")]
    #[test_case(b"d#5#B18446744073709551616", ErrorKind::Overflow ; "base overflows")]
    #[test_case(b"d#5#B0", ErrorKind::BaseOutOfRange ; "base zero")]
    #[test_case(b"d#5#B1", ErrorKind::BaseOutOfRange ; "base one")]
    #[test_case(b"d#5#B4294967297", ErrorKind::BaseOutOfRange ; "base above two to the thirty two")]
    #[test_case(b"d#5#B3x", ErrorKind::InvalidCharacter ; "trailing letter")]
    #[test_case(b"d#5#B3 4", ErrorKind::InvalidCharacter ; "trailing digits")]
    #[test_case(b"d#5#B3\0ignored", ErrorKind::InvalidCharacter ; "nul before trailing text")]
    #[test_case(b"d#5#B3\0", ErrorKind::InvalidCharacter ; "trailing nul")]
    fn invalid(input: &[u8], expected: ErrorKind) {
        assert_eq!(parse_digit_format(input), Expected::Error(expected))
    }

    #[test_case(b"x5]C0!", ErrorKind::InvalidPrefix ; "prefix before everything")]
    #[test_case(b"d5]C0!", ErrorKind::MissingDelimiter ; "delimiter before digit")]
    #[test_case(b"d#]C0!", ErrorKind::InvalidDigit ; "digit before close")]
    #[test_case(b"d#5]C0!", ErrorKind::MismatchedDelimiter ; "close before literal")]
    #[test_case(b"d#5#C0!", ErrorKind::MissingB ; "literal before base")]
    #[test_case(b"d#5#B!", ErrorKind::InvalidBase ; "base before range")]
    #[test_case(b"d#5#B0!", ErrorKind::BaseOutOfRange ; "range before trailing")]
    fn reports_earliest_violation(input: &[u8], expected: ErrorKind) {
        assert_eq!(parse_digit_format(input), Expected::Error(expected))
    }

    #[test]
    fn new_checks_base_bounds() {
        assert_eq!(DigitResult::new(1, MIN_BASE - 1), Expected::Error(ErrorKind::BaseOutOfRange));
        assert_eq!(DigitResult::new(1, MAX_BASE + 1), Expected::Error(ErrorKind::BaseOutOfRange));
        assert!(DigitResult::new(1, MIN_BASE).has_value());
        assert!(DigitResult::new(1, MAX_BASE).has_value())
    }

    #[test]
    fn display_reparses_to_same_record() {
        let record: DigitResult = "dig [ 17 ] B 5".parse().unwrap();

        assert_eq!(record.to_string(), "d#17#B5");
        assert_eq!(record.to_string().parse::<DigitResult>(), Ok(record))
    }

    #[test]
    fn from_str_reports_kind() {
        assert_eq!("d#5#B0".parse::<DigitResult>(), Err(ErrorKind::BaseOutOfRange))
    }

    #[test]
    fn residue_uses_fixed_base() {
        let record: DigitResult = "d#10#B16".parse().unwrap();

        assert_eq!(record.residue::<3>().value(), 1);
        assert_eq!(record.residue::<16>().value(), record.result())
    }
}
