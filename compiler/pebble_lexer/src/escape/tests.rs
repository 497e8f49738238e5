use super::*;
use pretty_assertions::assert_eq;

/// Decode the escape at the start of `input` (text after the backslash).
/// Returns the result and the unconsumed remainder.
fn decode(input: &str) -> (Result<char, EscapeError>, &str) {
    let mut cursor = Cursor::new(input);
    let result = decode_escape(&mut cursor);
    (result, cursor.rest())
}

#[test]
fn named_escapes() {
    assert_eq!(decode("n"), (Ok('\n'), ""));
    assert_eq!(decode("t"), (Ok('\t'), ""));
    assert_eq!(decode("r"), (Ok('\r'), ""));
    assert_eq!(decode("b"), (Ok('\u{8}'), ""));
    assert_eq!(decode("f"), (Ok('\u{c}'), ""));
    assert_eq!(decode("v"), (Ok('\u{b}'), ""));
}

#[test]
fn passthrough_escapes() {
    assert_eq!(decode("\\"), (Ok('\\'), ""));
    assert_eq!(decode("\"rest"), (Ok('"'), "rest"));
    assert_eq!(decode("'"), (Ok('\''), ""));
    assert_eq!(decode("q"), (Ok('q'), ""));
    assert_eq!(decode("#{"), (Ok('#'), "{"));
    assert_eq!(decode("é"), (Ok('é'), ""));
}

#[test]
fn hex_byte_escape() {
    assert_eq!(decode("x41z"), (Ok('A'), "z"));
    assert_eq!(decode("xff"), (Ok('\u{ff}'), ""));
}

#[test]
fn short_hex_escape_is_literal_x() {
    assert_eq!(decode("x4"), (Ok('x'), "4"));
    assert_eq!(decode("xg1"), (Ok('x'), "g1"));
}

#[test]
fn four_digit_unicode_escape() {
    assert_eq!(decode("u00e9!"), (Ok('é'), "!"));
    assert_eq!(decode("u2603"), (Ok('☃'), ""));
}

#[test]
fn surrogate_is_invalid() {
    assert_eq!(
        decode("ud800"),
        (Err(EscapeError::InvalidCodePoint { value: 0xD800 }), "")
    );
}

#[test]
fn braced_unicode_escape() {
    assert_eq!(decode("u{1F600}x"), (Ok('😀'), "x"));
    assert_eq!(decode("u{41}"), (Ok('A'), ""));
}

#[test]
fn braced_unicode_out_of_range() {
    assert_eq!(
        decode("u{110000}"),
        (Err(EscapeError::InvalidCodePoint { value: 0x11_0000 }), "")
    );
    assert_eq!(
        decode("u{FFFFFFFFFF}"),
        (Err(EscapeError::InvalidCodePoint { value: u32::MAX }), "")
    );
}

#[test]
fn braced_unicode_malformed() {
    assert_eq!(decode("u{}").0, Err(EscapeError::MalformedUnicode));
    assert_eq!(decode("u{12").0, Err(EscapeError::MalformedUnicode));
    assert_eq!(decode("u{zz}").0, Err(EscapeError::MalformedUnicode));
}

#[test]
fn short_unicode_escape_is_literal_u() {
    assert_eq!(decode("u12"), (Ok('u'), "12"));
}

#[test]
fn octal_escapes() {
    assert_eq!(decode("0"), (Ok('\0'), ""));
    assert_eq!(decode("012"), (Ok('\n'), ""));
    assert_eq!(decode("101x"), (Ok('A'), "x"));
    assert_eq!(decode("377"), (Ok('\u{ff}'), ""));
    // Three digits at most.
    assert_eq!(decode("1234"), (Ok('S'), "4"));
}

#[test]
fn high_octal_digits_take_one_more() {
    assert_eq!(decode("47"), (Ok('\''), ""));
    assert_eq!(decode("777"), (Ok('?'), "7"));
    assert_eq!(decode("4"), (Ok('\u{4}'), ""));
}

#[test]
fn lone_three_is_literal() {
    assert_eq!(decode("3"), (Ok('3'), ""));
    assert_eq!(decode("39"), (Ok('3'), "9"));
    assert_eq!(decode("36"), (Ok('\u{1e}'), ""));
}

#[test]
fn eight_and_nine_pass_through() {
    assert_eq!(decode("8"), (Ok('8'), ""));
    assert_eq!(decode("9"), (Ok('9'), ""));
}

#[test]
fn dangling_escape() {
    assert_eq!(decode(""), (Err(EscapeError::Dangling), ""));
}

#[test]
fn error_messages() {
    assert_eq!(
        EscapeError::InvalidCodePoint { value: 0xD800 }.to_string(),
        "0xD800 is not a valid Unicode scalar value"
    );
    assert_eq!(
        EscapeError::MalformedUnicode.to_string(),
        "`\\u{...}` escape must contain hex digits and end with `}`"
    );
}
