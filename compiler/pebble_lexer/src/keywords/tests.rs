use super::*;
use pretty_assertions::assert_eq;

const KEYWORDS: [&str; 18] = [
    "for", "fn", "in", "while", "break", "continue", "crash", "try", "recover", "println", "if",
    "else", "from", "as", "return", "match", "case", "loop",
];

const LITERAL_WORDS: [&str; 6] = ["true", "false", "self", "core", "static", "readonly"];

#[test]
fn every_keyword_round_trips() {
    for word in KEYWORDS {
        let keyword = Keyword::lookup(word);
        assert!(keyword.is_some(), "{word} should be a keyword");
        let keyword = keyword.map(Keyword::as_str);
        assert_eq!(keyword, Some(word));
    }
}

#[test]
fn control_keywords_are_not_literals() {
    for word in KEYWORDS {
        assert!(!Keyword::lookup(word).is_some_and(Keyword::is_literal), "{word}");
    }
}

#[test]
fn literal_words_are_marked() {
    for word in LITERAL_WORDS {
        let keyword = Keyword::lookup(word);
        assert!(keyword.is_some_and(Keyword::is_literal), "{word}");
        assert_eq!(keyword.map(Keyword::as_str), Some(word));
    }
}

#[test]
fn bare_injunction_words_are_reserved() {
    assert_eq!(
        Keyword::lookup("function"),
        Some(Keyword::Reserved(Injunction::Function))
    );
    assert_eq!(Keyword::lookup("let"), Some(Keyword::Reserved(Injunction::Let)));
    assert_eq!(
        Keyword::lookup("interface"),
        Some(Keyword::Reserved(Injunction::Interface))
    );
}

#[test]
fn every_injunction_round_trips() {
    for injunction in Injunction::ALL {
        assert_eq!(Injunction::lookup(injunction.as_str()), Some(injunction));
    }
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(Keyword::lookup("For"), None);
    assert_eq!(Keyword::lookup("TRUE"), None);
    assert_eq!(Injunction::lookup("Function"), None);
}

#[test]
fn identifiers_are_not_keywords() {
    for word in ["x", "foo", "formula", "iff", "matches", "functional", "_let", "réturn"] {
        assert_eq!(Keyword::lookup(word), None, "{word}");
    }
}

#[test]
fn display_forms() {
    assert_eq!(Keyword::Println.to_string(), "println");
    assert_eq!(Injunction::Record.to_string(), "@record");
    assert_eq!(Keyword::Reserved(Injunction::Tests).to_string(), "tests");
}
