use proptest::prelude::*;

use sparql_client::model::lexical::{
    choose_delimiter, delimiter_is_safe, ensure_safe_iri, escape_string, format_string,
    try_format_double, try_format_type, valid_language_tag, LexicalType, DOUBLE_QUOTE, LONG_QUOTE,
    SINGLE_QUOTE,
};
use sparql_client::Error;

/// Undo `format_string` using the SPARQL string escape rules.
fn parse_string_literal(formatted: &str) -> String {
    let delimiter = if formatted.starts_with(LONG_QUOTE) && formatted.len() >= 6 {
        LONG_QUOTE
    } else {
        &formatted[..1]
    };
    let body = &formatted[delimiter.len()..formatted.len() - delimiter.len()];

    let mut out = String::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0C}'),
            Some(other) => out.push(other),
            None => panic!("dangling backslash in {formatted:?}"),
        }
    }
    out
}

fn tricky_string() -> impl Strategy<Value = String> {
    let ch = prop_oneof![
        Just('\''),
        Just('"'),
        Just('\n'),
        Just('\\'),
        Just('\t'),
        Just('\r'),
        Just('\u{08}'),
        Just('\u{0C}'),
        any::<char>().prop_filter("no NUL", |c| *c != '\0'),
    ];
    prop::collection::vec(ch, 0..40).prop_map(|chars| chars.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn escape_special_chars() {
    assert_eq!(escape_string("a\\b"), "a\\\\b");
    assert_eq!(escape_string("tab\there"), "tab\\there");
    assert_eq!(escape_string("cr\r"), "cr\\r");
    assert_eq!(escape_string("\u{08}\u{0C}"), "\\b\\f");
    assert_eq!(escape_string("'\""), "\\'\\\"");
}

#[test]
fn escape_leaves_linefeed_alone() {
    assert_eq!(escape_string("line1\nline2"), "line1\nline2");
}

#[test]
fn escape_unicode_passthrough() {
    assert_eq!(escape_string("cafe\u{0301} ✓"), "cafe\u{0301} ✓");
}

// ---------------------------------------------------------------------------
// Delimiters
// ---------------------------------------------------------------------------

#[test]
fn delimiter_defaults_to_single_quote() {
    assert_eq!(choose_delimiter("plain"), SINGLE_QUOTE);
    assert_eq!(choose_delimiter("say \"hi\""), SINGLE_QUOTE);
}

#[test]
fn delimiter_double_quote_for_apostrophe() {
    assert_eq!(choose_delimiter("it's"), DOUBLE_QUOTE);
}

#[test]
fn delimiter_long_quote_for_newline_or_both_quotes() {
    assert_eq!(choose_delimiter("a\nb"), LONG_QUOTE);
    assert_eq!(choose_delimiter("it's \"x\""), LONG_QUOTE);
}

#[test]
fn format_string_examples() {
    assert_eq!(format_string("plain"), "'plain'");
    assert_eq!(format_string("it's"), "\"it\\'s\"");
    assert_eq!(format_string("say \"hi\""), "'say \\\"hi\\\"'");
    assert_eq!(format_string("a\nb"), "\"\"\"a\nb\"\"\"");
    assert_eq!(format_string(""), "''");
}

#[test]
fn delimiter_is_safe_detects_raw_quote() {
    assert!(delimiter_is_safe("a\\'b", SINGLE_QUOTE));
    assert!(!delimiter_is_safe("a'b", SINGLE_QUOTE));
    assert!(delimiter_is_safe("\\\\", SINGLE_QUOTE));
    assert!(!delimiter_is_safe("\\\\'", SINGLE_QUOTE));
    assert!(!delimiter_is_safe("x\"\"\"y", LONG_QUOTE));
}

proptest! {
    #[test]
    fn string_literal_round_trips(s in tricky_string()) {
        let formatted = format_string(&s);
        prop_assert_eq!(parse_string_literal(&formatted), s);
    }

    #[test]
    fn chosen_delimiter_never_collides(s in tricky_string()) {
        let escaped = escape_string(&s);
        prop_assert!(delimiter_is_safe(&escaped, choose_delimiter(&s)));
    }

    #[test]
    fn short_delimiters_never_hold_raw_newline(s in tricky_string()) {
        let formatted = format_string(&s);
        if !formatted.starts_with(LONG_QUOTE) || formatted.len() < 6 {
            prop_assert!(!formatted.contains('\n'));
        }
    }
}

// ---------------------------------------------------------------------------
// IRIs and language tags
// ---------------------------------------------------------------------------

#[test]
fn safe_iri_accepted() {
    assert_eq!(
        ensure_safe_iri("http://example.org/a#b").unwrap(),
        "http://example.org/a#b"
    );
}

#[test]
fn unsafe_iri_rejected() {
    for uri in ["http://x/>", "http://x/\n", "http://x/\0"] {
        assert!(
            matches!(ensure_safe_iri(uri), Err(Error::UnsafeIri(_))),
            "should reject {uri:?}"
        );
    }
}

#[test]
fn language_tags() {
    assert!(valid_language_tag("en"));
    assert!(valid_language_tag("en-US"));
    assert!(valid_language_tag("zh-Hant-TW"));
    assert!(valid_language_tag("x-1234"));
    assert!(!valid_language_tag(""));
    assert!(!valid_language_tag("en-"));
    assert!(!valid_language_tag("1en"));
    assert!(!valid_language_tag("en US"));
    assert!(!valid_language_tag("en_US"));
}

// ---------------------------------------------------------------------------
// Built-in datatypes
// ---------------------------------------------------------------------------

#[test]
fn xsd_local_names_map_to_types() {
    assert_eq!(LexicalType::from_xsd_local("boolean"), Some(LexicalType::Boolean));
    assert_eq!(LexicalType::from_xsd_local("integer"), Some(LexicalType::Integer));
    assert_eq!(LexicalType::from_xsd_local("decimal"), Some(LexicalType::Decimal));
    assert_eq!(LexicalType::from_xsd_local("double"), Some(LexicalType::Double));
    assert_eq!(LexicalType::from_xsd_local("string"), None);
    assert_eq!(LexicalType::from_xsd_local("dateTime"), None);
}

#[test]
fn boolean_pattern_is_anchored() {
    assert!(LexicalType::Boolean.matches("true"));
    assert!(LexicalType::Boolean.matches("false"));
    assert!(!LexicalType::Boolean.matches("untrue"));
    assert!(!LexicalType::Boolean.matches("TRUE"));
}

#[test]
fn integer_and_decimal_patterns() {
    assert!(LexicalType::Integer.matches("42"));
    assert!(LexicalType::Integer.matches("-7"));
    assert!(!LexicalType::Integer.matches("4.2"));
    assert!(LexicalType::Decimal.matches("4.2"));
    assert!(LexicalType::Decimal.matches(".5"));
    assert!(!LexicalType::Decimal.matches("4"));
    assert!(!LexicalType::Decimal.matches("4x2"));
}

#[test]
fn double_coercion_appends_exponent() {
    assert_eq!(try_format_double("1.5e3").as_deref(), Some("1.5e3"));
    assert_eq!(try_format_double("1.5").as_deref(), Some("1.5e0"));
    assert_eq!(try_format_double("3").as_deref(), Some("3e0"));
    assert_eq!(try_format_double("NaN"), None);
    assert_eq!(try_format_double("abc"), None);
}

#[test]
fn try_format_type_rejects_mismatch() {
    assert_eq!(
        try_format_type("12", LexicalType::Integer).as_deref(),
        Some("12")
    );
    assert_eq!(try_format_type("twelve", LexicalType::Integer), None);
    assert_eq!(
        try_format_type("2", LexicalType::Double).as_deref(),
        Some("2e0")
    );
}
