pub mod iri;
pub mod lexical;
pub mod literal;
pub mod term;
pub mod vocab;

pub use iri::{Iri, IriSource};
pub use literal::{Literal, StringLiteral};
pub use term::Term;
