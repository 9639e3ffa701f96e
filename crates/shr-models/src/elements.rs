//! Data element definitions

use crate::{Concept, Identifier, Value, Version};

/// A named, typed structural definition with an optional primary value and
/// nested field slots
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    pub identifier: Identifier,
    /// Whether the element can stand on its own as an entry
    pub is_entry: bool,
    /// Concepts the element is coded with
    pub concepts: Vec<Concept>,
    pub description: Option<String>,
    /// Elements this definition is based on
    pub based_on: Vec<Identifier>,
    /// The primary value slot, if the element declares one
    pub value: Option<Value>,
    /// Field slots, in declaration order
    pub fields: Vec<Value>,
    /// Version of the grammar the element was authored in
    pub grammar_version: Option<Version>,
}

impl DataElement {
    /// Create a new data element with no content
    pub fn new(identifier: Identifier, is_entry: bool) -> Self {
        Self {
            identifier,
            is_entry,
            concepts: Vec::new(),
            description: None,
            based_on: Vec::new(),
            value: None,
            fields: Vec::new(),
            grammar_version: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a concept
    pub fn with_concept(mut self, concept: Concept) -> Self {
        self.concepts.push(concept);
        self
    }

    /// Append a based-on identifier
    pub fn with_based_on(mut self, identifier: Identifier) -> Self {
        self.based_on.push(identifier);
        self
    }

    /// Set the primary value
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Append a field slot
    pub fn with_field(mut self, field: Value) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the authoring grammar version
    pub fn with_grammar_version(mut self, version: Version) -> Self {
        self.grammar_version = Some(version);
        self
    }
}
