//! The root specification collection and its namespace-keyed lookup tables

use indexmap::IndexMap;

use crate::{CodeSystem, DataElement, ValueSet, Version};

/// A named grouping of definitions, analogous to a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub description: Option<String>,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// All namespaces, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespaces {
    entries: Vec<Namespace>,
}

impl Namespaces {
    /// Register a namespace
    pub fn add(&mut self, namespace: Namespace) {
        self.entries.push(namespace);
    }

    /// All namespaces, in registration order
    pub fn all(&self) -> &[Namespace] {
        &self.entries
    }

    /// Look a namespace up by name
    pub fn find(&self, name: &str) -> Option<&Namespace> {
        self.entries.iter().find(|ns| ns.name == name)
    }
}

/// Data element definitions keyed by namespace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataElements {
    entries: IndexMap<String, Vec<DataElement>>,
}

impl DataElements {
    /// Register a data element under its own namespace
    pub fn add(&mut self, element: DataElement) {
        self.entries
            .entry(element.identifier.namespace.clone())
            .or_default()
            .push(element);
    }

    /// All elements, grouped by namespace in registration order
    pub fn all(&self) -> impl Iterator<Item = &DataElement> {
        self.entries.values().flatten()
    }

    /// Elements of one namespace, in registration order
    pub fn by_namespace(&self, namespace: &str) -> &[DataElement] {
        self.entries
            .get(namespace)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Grammar versions across all elements, deduplicated and ascending
    pub fn grammar_versions(&self) -> Vec<Version> {
        dedup_versions(self.all().filter_map(|e| e.grammar_version))
    }

    /// Grammar versions of one namespace's elements, deduplicated and
    /// ascending
    pub fn grammar_versions_for(&self, namespace: &str) -> Vec<Version> {
        dedup_versions(
            self.by_namespace(namespace)
                .iter()
                .filter_map(|e| e.grammar_version),
        )
    }
}

/// Value set definitions keyed by namespace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSets {
    entries: IndexMap<String, Vec<ValueSet>>,
}

impl ValueSets {
    /// Register a value set under its own namespace
    pub fn add(&mut self, value_set: ValueSet) {
        self.entries
            .entry(value_set.identifier.namespace.clone())
            .or_default()
            .push(value_set);
    }

    /// All value sets, grouped by namespace in registration order
    pub fn all(&self) -> impl Iterator<Item = &ValueSet> {
        self.entries.values().flatten()
    }

    /// Value sets of one namespace, in registration order
    pub fn by_namespace(&self, namespace: &str) -> &[ValueSet] {
        self.entries
            .get(namespace)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Grammar versions across all value sets, deduplicated and
    /// ascending
    pub fn grammar_versions(&self) -> Vec<Version> {
        dedup_versions(self.all().filter_map(|vs| vs.grammar_version))
    }

    /// Grammar versions of one namespace's value sets, deduplicated and
    /// ascending
    pub fn grammar_versions_for(&self, namespace: &str) -> Vec<Version> {
        dedup_versions(
            self.by_namespace(namespace)
                .iter()
                .filter_map(|vs| vs.grammar_version),
        )
    }
}

/// Code system definitions keyed by namespace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeSystems {
    entries: IndexMap<String, Vec<CodeSystem>>,
}

impl CodeSystems {
    /// Register a code system under its own namespace
    pub fn add(&mut self, code_system: CodeSystem) {
        self.entries
            .entry(code_system.identifier.namespace.clone())
            .or_default()
            .push(code_system);
    }

    /// All code systems, grouped by namespace in registration order
    pub fn all(&self) -> impl Iterator<Item = &CodeSystem> {
        self.entries.values().flatten()
    }

    /// Code systems of one namespace, in registration order
    pub fn by_namespace(&self, namespace: &str) -> &[CodeSystem] {
        self.entries
            .get(namespace)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Grammar versions across all code systems, deduplicated and
    /// ascending
    pub fn grammar_versions(&self) -> Vec<Version> {
        dedup_versions(self.all().filter_map(|cs| cs.grammar_version))
    }

    /// Grammar versions of one namespace's code systems, deduplicated and
    /// ascending
    pub fn grammar_versions_for(&self, namespace: &str) -> Vec<Version> {
        dedup_versions(
            self.by_namespace(namespace)
                .iter()
                .filter_map(|cs| cs.grammar_version),
        )
    }
}

/// The root collection handed to the exporters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specifications {
    pub namespaces: Namespaces,
    pub data_elements: DataElements,
    pub value_sets: ValueSets,
    pub code_systems: CodeSystems,
}

impl Specifications {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }
}

fn dedup_versions(versions: impl IntoIterator<Item = Version>) -> Vec<Version> {
    let mut out: Vec<Version> = Vec::new();
    for version in versions {
        if !out.contains(&version) {
            out.push(version);
        }
    }
    // Ascending so the summary is independent of registration order.
    out.sort();
    out
}
