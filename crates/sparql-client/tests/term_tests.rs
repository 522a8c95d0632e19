use std::collections::BTreeMap;

use sparql_client::{Error, Iri, IriSource, Literal, StringLiteral, Term};

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

// --- IRI ---

#[test]
fn iri_from_uri_formats_in_angle_brackets() {
    let iri = Iri::create("http://example.org/thing").unwrap();
    assert_eq!(iri.format(), "<http://example.org/thing>");
    assert_eq!(iri.uri(), Some("http://example.org/thing"));
    assert_eq!(iri.namespace(), None);
}

#[test]
fn iri_from_mapping_formats_as_prefixed_name() {
    let iri = Iri::create(("ex", "thing")).unwrap();
    assert_eq!(iri.format(), "ex:thing");
    assert_eq!(iri.namespace(), Some("ex"));
    assert_eq!(iri.local_name(), Some("thing"));
    assert_eq!(iri.uri(), None);
}

#[test]
fn iri_mapping_must_have_one_entry() {
    let empty = BTreeMap::<String, String>::new();
    assert!(matches!(Iri::create(empty), Err(Error::InvalidIri(_))));

    let two = BTreeMap::from([
        ("a".to_string(), "x".to_string()),
        ("b".to_string(), "y".to_string()),
    ]);
    assert!(matches!(Iri::create(two), Err(Error::InvalidIri(_))));
}

#[test]
fn iri_rejects_unsafe_uri() {
    assert!(matches!(
        Iri::create("http://x/> DROP ALL"),
        Err(Error::UnsafeIri(_))
    ));
}

#[test]
fn iri_rejects_bad_prefixed_name() {
    assert!(Iri::create(("1bad", "x")).is_err());
    assert!(Iri::create(("ex", "has space")).is_err());
    assert!(Iri::create(("ex", "a>b")).is_err());
}

#[test]
fn iri_default_prefix_allowed() {
    assert_eq!(Iri::create(("", "thing")).unwrap().format(), ":thing");
}

#[test]
fn xsd_uri_is_tagged_with_namespace() {
    let iri = Iri::create(format!("{XSD}integer")).unwrap();
    assert_eq!(iri.namespace(), Some("xsd"));
    assert_eq!(iri.local_name(), Some("integer"));
}

#[test]
fn iri_source_round_trips_through_iri() {
    let iri = Iri::create(("xsd", "double")).unwrap();
    assert_eq!(Iri::create(IriSource::from(&iri)).unwrap(), iri);
}

// --- Literal ---

#[test]
fn untyped_literal_is_quoted() {
    let lit = Literal::new("hello").unwrap();
    assert_eq!(lit.format(), "'hello'");
    assert!(lit.datatype().is_none());
}

#[test]
fn literal_value_is_stringified() {
    assert_eq!(Literal::new(42).unwrap().value(), "42");
}

#[test]
fn literal_rejects_nul() {
    assert!(matches!(Literal::new("a\0b"), Err(Error::NulInLiteral)));
    assert!(matches!(
        StringLiteral::plain("a\0b"),
        Err(Error::NulInLiteral)
    ));
}

#[test]
fn bad_datatype_reports_input() {
    let err = Literal::typed("1", BTreeMap::<String, String>::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidDatatype(_)));
    assert!(err.to_string().contains("datatype"));
}

#[test]
fn builtin_types_format_bare() {
    assert_eq!(Literal::typed("true", ("xsd", "boolean")).unwrap().format(), "true");
    assert_eq!(Literal::typed("42", ("xsd", "integer")).unwrap().format(), "42");
    assert_eq!(Literal::typed("4.2", ("xsd", "decimal")).unwrap().format(), "4.2");
    assert_eq!(Literal::typed("4.2E1", ("xsd", "double")).unwrap().format(), "4.2E1");
}

#[test]
fn builtin_types_with_full_uri_format_bare() {
    let lit = Literal::typed("42", format!("{XSD}integer")).unwrap();
    assert_eq!(lit.format(), "42");
}

#[test]
fn double_is_coerced_with_exponent() {
    assert_eq!(Literal::typed("4.2", ("xsd", "double")).unwrap().format(), "4.2e0");
    assert_eq!(Literal::typed(7, ("xsd", "double")).unwrap().format(), "7e0");
}

#[test]
fn mismatched_builtin_falls_back_to_typed_string() {
    assert_eq!(
        Literal::typed("forty-two", ("xsd", "integer")).unwrap().format(),
        "'forty-two'^^xsd:integer"
    );
    assert_eq!(
        Literal::typed("lots", format!("{XSD}double")).unwrap().format(),
        format!("'lots'^^<{XSD}double>")
    );
}

#[test]
fn other_xsd_types_are_quoted() {
    assert_eq!(
        Literal::typed("2024-01-01", ("xsd", "date")).unwrap().format(),
        "'2024-01-01'^^xsd:date"
    );
}

#[test]
fn custom_datatype_is_quoted() {
    assert_eq!(
        Literal::typed("42", "http://example.org/dt").unwrap().format(),
        "'42'^^<http://example.org/dt>"
    );
}

// --- StringLiteral ---

#[test]
fn string_literal_with_language() {
    let lit = StringLiteral::with_language("chat", "fr").unwrap();
    assert_eq!(lit.format(), "'chat'@fr");
    assert_eq!(lit.language(), Some("fr"));
}

#[test]
fn string_literal_without_language() {
    assert_eq!(StringLiteral::plain("it's").unwrap().format(), "\"it\\'s\"");
}

#[test]
fn string_literal_never_bare() {
    assert_eq!(StringLiteral::plain("42").unwrap().format(), "'42'");
}

#[test]
fn string_literal_rejects_bad_tag() {
    assert!(matches!(
        StringLiteral::with_language("x", "en_US"),
        Err(Error::InvalidLanguageTag(_))
    ));
    assert!(matches!(
        StringLiteral::with_language("x", ""),
        Err(Error::InvalidLanguageTag(_))
    ));
}

// --- Term ---

#[test]
fn term_dispatches_format() {
    let terms: Vec<Term> = vec![
        Iri::create("http://x/").unwrap().into(),
        Literal::typed("1", ("xsd", "integer")).unwrap().into(),
        StringLiteral::with_language("hi", "en").unwrap().into(),
    ];
    let formatted: Vec<String> = terms.iter().map(Term::format).collect();
    assert_eq!(formatted, vec!["<http://x/>", "1", "'hi'@en"]);
    assert_eq!(terms[2].to_string(), "'hi'@en");
}

#[test]
fn native_values_become_typed_terms() {
    assert_eq!(Term::from(true).format(), "true");
    assert_eq!(Term::from(-3i64).format(), "-3");
    assert_eq!(Term::from(7u8).format(), "7");
    assert_eq!(Term::from(2.5f64).format(), "2.5e0");
    assert_eq!(Term::from(3.0f64).format(), "3e0");
}

#[test]
fn special_doubles_are_typed_strings() {
    assert_eq!(Term::from(f64::NAN).format(), format!("'NaN'^^<{XSD}double>"));
    assert_eq!(
        Term::from(f64::NEG_INFINITY).format(),
        format!("'-INF'^^<{XSD}double>")
    );
}
