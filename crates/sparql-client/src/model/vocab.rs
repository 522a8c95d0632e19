//! Namespace constants and the well-known prefix table.
//!
//! The table follows the "initial namespaces" section of SPARQL 1.1 Query
//! (http://www.w3.org/TR/sparql11-query/#docNamespaces).

/// Standard namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const FN: &str = "http://www.w3.org/2005/xpath-functions#";
    pub const SFN: &str = "http://www.w3.org/ns/sparql#";
}

/// XML Schema datatypes with a bare SPARQL lexical form.
pub mod xsd {
    pub const PREFIX: &str = "xsd";

    pub const BOOLEAN: &str = "boolean";
    pub const INTEGER: &str = "integer";
    pub const DECIMAL: &str = "decimal";
    pub const DOUBLE: &str = "double";
}

/// Well-known prefixes, in the order they are merged by
/// [`Registry::register_common`](crate::query::registry::Registry::register_common).
pub const COMMON_PREFIXES: &[(&str, &str)] = &[
    ("rdf", standard::RDF),
    ("rdfs", standard::RDFS),
    ("xsd", standard::XSD),
    ("fn", standard::FN),
    ("sfn", standard::SFN),
];

/// Look up a well-known prefix by name.
pub fn common_prefix(name: &str) -> Option<&'static str> {
    COMMON_PREFIXES
        .iter()
        .find(|(prefix, _)| *prefix == name)
        .map(|(_, uri)| *uri)
}
