//! SHR specification object model
//!
//! Plain data structures describing specification content: namespaces,
//! data element definitions, value slots with their constraints, and
//! terminology (value sets and code systems). The model is owned by the
//! caller and read-only to the exporters; it carries no behavior beyond
//! construction and lookup.

mod concepts;
mod constraints;
mod elements;
mod identifier;
mod specifications;
mod terminology;
mod values;

pub use concepts::*;
pub use constraints::*;
pub use elements::*;
pub use identifier::*;
pub use specifications::*;
pub use terminology::*;
pub use values::*;
