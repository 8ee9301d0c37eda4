use crate::error::ErrorKind;
use crate::expected::Expected;

/// Byte returned once the input is exhausted. A NUL inside the input is an
/// ordinary byte; only the slice length decides where the input ends.
pub const END: u8 = 0;

/*
   Every method is a `const fn` so that the parsers built on top of the
   cursor can run during constant evaluation. `ch` always holds the byte at
   `current`, or `END` once `current` reaches the end of `input`.
*/
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    current: usize,
    ch: u8,
}

impl<'a> Cursor<'a> {
    pub const fn new(input: &'a [u8]) -> Cursor<'a> {
        let mut cursor = Cursor {
            input,
            current: 0,
            ch: END,
        };

        cursor.ch = cursor.byte_at(0);

        cursor
    }

    const fn byte_at(&self, index: usize) -> u8 {
        if index >= self.input.len() {
            END
        } else {
            self.input[index]
        }
    }

    pub const fn ch(&self) -> u8 {
        self.ch
    }

    pub const fn position(&self) -> usize {
        self.current
    }

    pub const fn peek_char(&self) -> u8 {
        if self.is_at_end() {
            END
        } else {
            self.byte_at(self.current + 1)
        }
    }

    pub const fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    pub const fn read_char(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
            self.ch = self.byte_at(self.current);
        }
    }

    /// Consumes `ch` if it is the current byte.
    pub const fn read_if(&mut self, ch: u8) -> bool {
        if !self.is_at_end() && self.ch == ch {
            self.read_char();
            true
        } else {
            false
        }
    }

    pub const fn skip_whitespace(&mut self) {
        while is_blank(self.ch) {
            self.read_char()
        }
    }

    /// Reads one run of decimal digits as a `u64`.
    ///
    /// Fails with `Empty` if the current byte is not a digit and with
    /// `Overflow` as soon as the next multiply or add would wrap. The cursor
    /// stops on the first non-digit byte.
    pub const fn read_number(&mut self) -> Expected<u64, ErrorKind> {
        if !is_digit(self.ch) {
            return Expected::Error(ErrorKind::Empty);
        }

        let mut value: u64 = 0;

        while is_digit(self.ch) {
            let digit = (self.ch - b'0') as u64;

            value = match value.checked_mul(10) {
                Some(value) => value,
                None => return Expected::Error(ErrorKind::Overflow),
            };
            value = match value.checked_add(digit) {
                Some(value) => value,
                None => return Expected::Error(ErrorKind::Overflow),
            };

            self.read_char()
        }

        Expected::Value(value)
    }
}

pub const fn is_blank(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

pub const fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
