//! Escape sequence decoding for string and character literals.
//!
//! The decoder runs directly on the cursor, positioned just after the
//! backslash, and consumes exactly the characters of the escape.
//!
//! | Form                        | Value                               |
//! |-----------------------------|-------------------------------------|
//! | `\xHH`                      | byte value `0xHH`                   |
//! | `\uHHHH`, `\u{H...}`        | Unicode scalar value                |
//! | `\0`-`\377` (octal)         | byte value                          |
//! | `\b \f \n \r \t \v`         | control characters                  |
//! | `\` + anything else         | that character (`\\`, `\"`, `\'`)   |
//!
//! `\x` and `\u` without enough hex digits fall back to the letter itself.

use crate::cursor::Cursor;

/// Why an escape sequence could not be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EscapeError {
    /// End of input directly after the backslash.
    #[error("`\\` at end of input")]
    Dangling,
    /// `\u{` not followed by hex digits and a closing `}`.
    #[error("`\\u{{...}}` escape must contain hex digits and end with `}}`")]
    MalformedUnicode,
    /// Hex digits that do not name a Unicode scalar value.
    #[error("0x{value:X} is not a valid Unicode scalar value")]
    InvalidCodePoint { value: u32 },
}

/// Decode one escape sequence. The backslash has already been consumed.
pub fn decode_escape(cursor: &mut Cursor<'_>) -> Result<char, EscapeError> {
    if cursor.is_eof() {
        return Err(EscapeError::Dangling);
    }
    let c = cursor.current();
    match c {
        'x' if cursor.peek(1).is_ascii_hexdigit() && cursor.peek(2).is_ascii_hexdigit() => {
            cursor.advance();
            let value = hex_value(cursor, 2);
            Ok(byte_char(value))
        }
        'u' if cursor.peek(1) == '{' => {
            cursor.advance_n(2);
            braced_unicode(cursor)
        }
        'u' if (1..=4).all(|k| cursor.peek(k).is_ascii_hexdigit()) => {
            cursor.advance();
            let value = hex_value(cursor, 4);
            char::from_u32(value).ok_or(EscapeError::InvalidCodePoint { value })
        }
        '0'..='7' => Ok(octal(cursor)),
        _ => {
            cursor.advance();
            Ok(resolve_named_escape(c))
        }
    }
}

/// Map single-letter escapes to their control characters; everything else
/// stands for itself.
#[inline]
fn resolve_named_escape(c: char) -> char {
    match c {
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{b}',
        other => other,
    }
}

/// Consume `count` hex digits (already checked) and return their value.
fn hex_value(cursor: &mut Cursor<'_>, count: usize) -> u32 {
    let mut value = 0;
    for _ in 0..count {
        value = value * 16 + cursor.current().to_digit(16).unwrap_or(0);
        cursor.advance();
    }
    value
}

/// `\u{...}` after the opening brace.
fn braced_unicode(cursor: &mut Cursor<'_>) -> Result<char, EscapeError> {
    let start = cursor.offset();
    cursor.eat_while(|c| c.is_ascii_hexdigit());
    let digits = cursor.slice_from(start);
    if digits.is_empty() || cursor.current() != '}' {
        return Err(EscapeError::MalformedUnicode);
    }
    cursor.advance();
    // More than 8 digits cannot fit in a u32 and is never a scalar value.
    let value = u32::from_str_radix(digits, 16).unwrap_or(u32::MAX);
    char::from_u32(value).ok_or(EscapeError::InvalidCodePoint { value })
}

/// Octal escape: `[0-2][0-7]{0,2}`, `3[0-7][0-7]?` or `[4-7][0-7]?`.
///
/// A `3` with no octal digit after it is not an octal escape and decodes to
/// the character `3`.
fn octal(cursor: &mut Cursor<'_>) -> char {
    let first = cursor.current();
    let is_octal = |c: char| matches!(c, '0'..='7');
    let max_extra = match first {
        '0'..='2' => 2,
        '3' if is_octal(cursor.peek(1)) => 2,
        '3' => {
            cursor.advance();
            return '3';
        }
        _ => 1,
    };

    let mut value = first.to_digit(8).unwrap_or(0);
    cursor.advance();
    for _ in 0..max_extra {
        let c = cursor.current();
        if cursor.is_eof() || !is_octal(c) {
            break;
        }
        value = value * 8 + c.to_digit(8).unwrap_or(0);
        cursor.advance();
    }
    byte_char(value)
}

/// A byte-valued escape as a char (U+0000-U+00FF).
#[inline]
fn byte_char(value: u32) -> char {
    u8::try_from(value).map_or(char::REPLACEMENT_CHARACTER, char::from)
}

#[cfg(test)]
mod tests;
