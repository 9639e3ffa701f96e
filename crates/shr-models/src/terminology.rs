//! Value sets and code systems

use std::fmt;

use crate::{Code, Concept, Identifier, Version};

/// How a value set rule selects codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSetRuleKind {
    /// Include the rule's code itself
    IncludesCode,
    /// Include the code and everything below it
    IncludesDescendants,
    /// Exclude the code and everything below it
    ExcludesDescendants,
    /// Include every code from the rule's code system
    IncludesFromCode,
}

impl ValueSetRuleKind {
    /// The kind name as it appears in exported output
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueSetRuleKind::IncludesCode => "includes-code",
            ValueSetRuleKind::IncludesDescendants => "includes-descendants",
            ValueSetRuleKind::ExcludesDescendants => "excludes-descendants",
            ValueSetRuleKind::IncludesFromCode => "includes-from-code",
        }
    }
}

impl fmt::Display for ValueSetRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inclusion/exclusion rule inside a value set
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSetRule {
    pub kind: ValueSetRuleKind,
    pub code: Code,
}

impl ValueSetRule {
    /// Create a new rule
    pub fn new(kind: ValueSetRuleKind, code: Code) -> Self {
        Self { kind, code }
    }
}

/// A named collection of concepts plus rules defining an allowed code range
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSet {
    pub identifier: Identifier,
    pub description: Option<String>,
    pub url: String,
    pub concepts: Vec<Concept>,
    /// Rules in author order
    pub rules: Vec<ValueSetRule>,
    /// Version of the grammar the value set was authored in
    pub grammar_version: Option<Version>,
}

impl ValueSet {
    /// Create a new value set with no concepts or rules
    pub fn new(identifier: Identifier, url: impl Into<String>) -> Self {
        Self {
            identifier,
            description: None,
            url: url.into(),
            concepts: Vec::new(),
            rules: Vec::new(),
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

    /// Append a rule
    pub fn with_rule(mut self, rule: ValueSetRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the authoring grammar version
    pub fn with_grammar_version(mut self, version: Version) -> Self {
        self.grammar_version = Some(version);
        self
    }
}

/// A named collection of concepts defining a terminology's code space
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSystem {
    pub identifier: Identifier,
    pub description: Option<String>,
    pub url: String,
    /// Codes in author order
    pub codes: Vec<Concept>,
    /// Version of the grammar the code system was authored in
    pub grammar_version: Option<Version>,
}

impl CodeSystem {
    /// Create a new code system with no codes
    pub fn new(identifier: Identifier, url: impl Into<String>) -> Self {
        Self {
            identifier,
            description: None,
            url: url.into(),
            codes: Vec::new(),
            grammar_version: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a code
    pub fn with_code(mut self, code: Concept) -> Self {
        self.codes.push(code);
        self
    }

    /// Set the authoring grammar version
    pub fn with_grammar_version(mut self, version: Version) -> Self {
        self.grammar_version = Some(version);
        self
    }
}
