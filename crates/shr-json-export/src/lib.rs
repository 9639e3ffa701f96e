//! Hierarchical JSON export of SHR specifications
//!
//! Converts an in-memory specification collection (namespaces, data
//! elements, value sets, code systems) into a generic labeled tree. Every
//! node carries a `type` attribute, an optional `label`, and optional
//! `children`, so documentation generators and viewers can render
//! specification content without knowing the model's type hierarchy.
//!
//! The export never aborts: an unrecognized value or constraint variant
//! keeps its raw tag in the tree and surfaces as a collected diagnostic.

pub mod converter;
pub mod model;
pub mod serialize;

pub use converter::HierarchyConverter;
pub use model::*;
pub use serialize::{JsonSerializer, SerializeError};

use shr_diagnostics::Diagnostics;
use shr_models::Specifications;

/// Assembled tree plus the error messages collected along the way
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    /// Root of the hierarchy
    pub json: SpecificationsNode,
    /// One message per unrecognized variant, in encounter order
    pub errors: Vec<String>,
}

/// Export a specification collection as a hierarchy of labeled nodes.
///
/// The export is a pure projection of the input and cannot fail; anomalies
/// end up in [`ExportResult::errors`] so callers can render output and
/// report problems in the same pass.
pub fn export_to_json(specifications: &Specifications) -> ExportResult {
    let (json, diagnostics) = export_with_diagnostics(specifications);
    ExportResult {
        json,
        errors: diagnostics.messages(),
    }
}

/// Like [`export_to_json`], keeping the structured diagnostics.
pub fn export_with_diagnostics(
    specifications: &Specifications,
) -> (SpecificationsNode, Diagnostics) {
    HierarchyConverter::new().convert_specifications(specifications)
}
