//! Diagnostics for the specification exporters
//!
//! Exporters follow a collect-don't-abort policy: a mapper that meets
//! something it cannot fully handle produces a best-effort result and a
//! diagnostic, never a failure. To keep that without hidden shared state,
//! mappers return their diagnostics next to their output and callers merge
//! the collections on the way up.

mod collection;
mod diagnostic;

pub use collection::*;
pub use diagnostic::*;
