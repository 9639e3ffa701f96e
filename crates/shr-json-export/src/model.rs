//! Hierarchy node model
//!
//! The generic labeled tree produced by the exporter. Every node carries a
//! `type` attribute; `label` is optional (anonymous node when absent) and
//! `children` is optional (leaf when absent). Struct field order matches
//! the emitted key order, `Option` fields are omitted when absent, and
//! bare `Vec` fields are always emitted, possibly empty — the two omission
//! policies are deliberate and distinct.

use serde::{Deserialize, Serialize};

/// Root node wrapping a whole exported specification collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationsNode {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub children: Vec<SectionNode>,
}

/// A top-level grouping under the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionNode {
    /// All namespaces with their data elements
    Namespaces {
        label: String,
        children: Vec<NamespaceNode>,
    },
    /// Value sets flattened across namespaces
    ValueSets {
        label: String,
        children: Vec<ValueSetNode>,
    },
    /// Code systems flattened across namespaces
    CodeSystems {
        label: String,
        children: Vec<CodeSystemNode>,
    },
}

/// One namespace with its name-sorted data elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceNode {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_version: Option<GrammarVersionNode>,
    pub children: Vec<DataElementNode>,
}

/// One grammar version or several, depending on how many a namespace reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrammarVersionNode {
    One(VersionNode),
    Many(Vec<VersionNode>),
}

/// A grammar version triple; attribute object, not a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNode {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// One data element definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataElementNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub is_entry: bool,
    pub concepts: Vec<ConceptNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_version: Option<VersionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<IdentifierNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueNode>,
    pub children: Vec<ValueNode>,
}

/// A mapped value slot
///
/// Known kinds are `IdentifiableValue`, `RefValue`, `ChoiceValue`, `TBD`,
/// and `Incomplete`; an unrecognized upstream kind passes through with its
/// raw tag, which is why `kind` is an open string rather than a closed
/// serde tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    pub min: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub constraints: Vec<ConstraintNode>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<IdentifierNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ValueNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A mapped constraint, `kind` open for the same reason as [`ValueNode`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valueset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ConceptNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<IdentifierNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Path segments joined with `:`; empty string for an unscoped constraint
    pub path: String,
}

/// A namespace-qualified identifier leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierNode {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub namespace: String,
}

/// A coded concept leaf with a browser URL for its terminology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub system: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub url: String,
}

/// A lightweight code leaf used inside value set rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
    pub system: String,
}

/// One value set rule; `kind` is the rule's verbatim kind name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSetRuleNode {
    pub label: String,
    pub code: CodeNode,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One value set; `children` holds its rules and is omitted entirely when
/// the rule list is empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub concepts: Vec<ConceptNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_version: Option<VersionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ValueSetRuleNode>>,
}

/// One code system; `children` holds its codes and is omitted when empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_version: Option<VersionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ConceptNode>>,
}
