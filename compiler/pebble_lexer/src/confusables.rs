//! Look-alike characters.
//!
//! Source pasted from word processors and chat tools often carries curly
//! quotes, typographic dashes or fullwidth punctuation. These are not valid
//! Pebble tokens, so the scanner reports them as unexpected characters; this
//! table lets the error name the character and offer the ASCII it resembles.

/// `(found, ascii, unicode_name)`, sorted by `found` for binary search.
const CONFUSABLES: &[(char, char, &str)] = &[
    ('\u{00B7}', '.', "Middle Dot"),
    ('\u{00D7}', '*', "Multiplication Sign"),
    ('\u{00F7}', '/', "Division Sign"),
    ('\u{200B}', ' ', "Zero Width Space"),
    ('\u{2010}', '-', "Hyphen"),
    ('\u{2012}', '-', "Figure Dash"),
    ('\u{2013}', '-', "En Dash"),
    ('\u{2014}', '-', "Em Dash"),
    ('\u{2018}', '\'', "Left Single Quotation Mark"),
    ('\u{2019}', '\'', "Right Single Quotation Mark"),
    ('\u{201C}', '"', "Left Double Quotation Mark"),
    ('\u{201D}', '"', "Right Double Quotation Mark"),
    ('\u{2039}', '<', "Single Left-Pointing Angle Quotation Mark"),
    ('\u{203A}', '>', "Single Right-Pointing Angle Quotation Mark"),
    ('\u{2044}', '/', "Fraction Slash"),
    ('\u{2212}', '-', "Minus Sign"),
    ('\u{2215}', '/', "Division Slash"),
    ('\u{2217}', '*', "Asterisk Operator"),
    ('\u{2236}', ':', "Ratio"),
    ('\u{FF01}', '!', "Fullwidth Exclamation Mark"),
    ('\u{FF02}', '"', "Fullwidth Quotation Mark"),
    ('\u{FF03}', '#', "Fullwidth Number Sign"),
    ('\u{FF07}', '\'', "Fullwidth Apostrophe"),
    ('\u{FF08}', '(', "Fullwidth Left Parenthesis"),
    ('\u{FF09}', ')', "Fullwidth Right Parenthesis"),
    ('\u{FF0B}', '+', "Fullwidth Plus Sign"),
    ('\u{FF0C}', ',', "Fullwidth Comma"),
    ('\u{FF0E}', '.', "Fullwidth Full Stop"),
    ('\u{FF1A}', ':', "Fullwidth Colon"),
    ('\u{FF1B}', ';', "Fullwidth Semicolon"),
    ('\u{FF1D}', '=', "Fullwidth Equals Sign"),
    ('\u{FF20}', '@', "Fullwidth Commercial At"),
    ('\u{FF3B}', '[', "Fullwidth Left Square Bracket"),
    ('\u{FF3D}', ']', "Fullwidth Right Square Bracket"),
    ('\u{FF5B}', '{', "Fullwidth Left Curly Bracket"),
    ('\u{FF5D}', '}', "Fullwidth Right Curly Bracket"),
];

/// Returns `(ascii, unicode_name)` if `ch` is a known look-alike.
pub fn lookup_confusable(ch: char) -> Option<(char, &'static str)> {
    CONFUSABLES
        .binary_search_by_key(&ch, |&(found, _, _)| found)
        .ok()
        .map(|idx| (CONFUSABLES[idx].1, CONFUSABLES[idx].2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for pair in CONFUSABLES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} >= {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn curly_quotes_map_to_ascii() {
        assert_eq!(lookup_confusable('\u{201C}').unwrap().0, '"');
        assert_eq!(lookup_confusable('\u{2019}').unwrap().0, '\'');
    }

    #[test]
    fn fullwidth_number_sign_names_itself() {
        let (ascii, name) = lookup_confusable('\u{FF03}').unwrap();
        assert_eq!(ascii, '#');
        assert_eq!(name, "Fullwidth Number Sign");
    }

    #[test]
    fn ascii_is_not_confusable() {
        for ch in ['a', '"', '#', '0', ' '] {
            assert!(lookup_confusable(ch).is_none());
        }
    }

    #[test]
    fn every_suggestion_is_ascii() {
        assert!(CONFUSABLES.iter().all(|&(_, ascii, _)| ascii.is_ascii()));
    }
}
