//! The closed set of terms that can be written into a query.

use std::fmt;

use crate::model::iri::Iri;
use crate::model::literal::{Literal, StringLiteral};
use crate::model::vocab::xsd;

/// Any value with a SPARQL surface syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(Iri),
    Literal(Literal),
    StringLiteral(StringLiteral),
}

impl Term {
    /// Exact lexical form of the term.
    pub fn format(&self) -> String {
        match self {
            Term::Iri(iri) => iri.format(),
            Term::Literal(literal) => literal.format(),
            Term::StringLiteral(literal) => literal.format(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<StringLiteral> for Term {
    fn from(literal: StringLiteral) -> Self {
        Term::StringLiteral(literal)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Literal(Literal::xsd(value.to_string(), xsd::BOOLEAN))
    }
}

macro_rules! integer_terms {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Term {
                fn from(value: $ty) -> Self {
                    Term::Literal(Literal::xsd(value.to_string(), xsd::INTEGER))
                }
            }
        )*
    };
}

integer_terms!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        // XML Schema spells the special values differently from Rust.
        let lexical = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            let sign = if value > 0.0 { "" } else { "-" };
            format!("{sign}INF")
        } else {
            value.to_string()
        };
        Term::Literal(Literal::xsd(lexical, xsd::DOUBLE))
    }
}
