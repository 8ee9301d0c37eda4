mod cursor;

pub use cursor::{is_blank, is_digit, Cursor, END};
