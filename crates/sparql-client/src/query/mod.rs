pub mod classify;
pub mod registry;
pub mod template;

pub use classify::{classify, statement_is_update, StatementKind};
pub use registry::{build_preamble, Registration, Registry};
pub use template::Query;
