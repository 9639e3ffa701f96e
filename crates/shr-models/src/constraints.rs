//! Constraints attached to values

use crate::{Cardinality, Concept, Identifier};

/// A restriction on a value, scoped by a path into nested structure
///
/// `Unknown` is the forward-compatibility arm, mirroring [`crate::Value`]:
/// constraint kinds added upstream keep their raw tag and still flow
/// through the exporters.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Restrict the value to a value set
    ValueSet(ValueSetConstraint),
    /// Fix the value to a single concept
    Code(CodeConstraint),
    /// Require the value to include a concept
    IncludesCode(IncludesCodeConstraint),
    /// Restrict the value to a subtype
    Type(TypeConstraint),
    /// Fix the value to a boolean
    Boolean(BooleanConstraint),
    /// Narrow the value's cardinality
    Card(CardConstraint),
    /// A constraint kind this model does not recognize
    Unknown(UnknownConstraint),
}

impl Constraint {
    /// Path segments carried by every variant, in order
    pub fn path(&self) -> &[String] {
        match self {
            Constraint::ValueSet(c) => &c.path,
            Constraint::Code(c) => &c.path,
            Constraint::IncludesCode(c) => &c.path,
            Constraint::Type(c) => &c.path,
            Constraint::Boolean(c) => &c.path,
            Constraint::Card(c) => &c.path,
            Constraint::Unknown(c) => &c.path,
        }
    }
}

/// Restrict the value to a value set
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSetConstraint {
    /// Identifier or URI of the referenced value set
    pub value_set: String,
    pub path: Vec<String>,
}

impl ValueSetConstraint {
    pub fn new(value_set: impl Into<String>) -> Self {
        Self {
            value_set: value_set.into(),
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// Fix the value to a single concept
#[derive(Debug, Clone, PartialEq)]
pub struct CodeConstraint {
    pub code: Concept,
    pub path: Vec<String>,
}

impl CodeConstraint {
    pub fn new(code: Concept) -> Self {
        Self {
            code,
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// Require the value to include a concept
#[derive(Debug, Clone, PartialEq)]
pub struct IncludesCodeConstraint {
    pub code: Concept,
    pub path: Vec<String>,
}

impl IncludesCodeConstraint {
    pub fn new(code: Concept) -> Self {
        Self {
            code,
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// Restrict the value to a subtype
#[derive(Debug, Clone, PartialEq)]
pub struct TypeConstraint {
    /// Element the value must be an instance of
    pub is_a: Identifier,
    pub path: Vec<String>,
}

impl TypeConstraint {
    pub fn new(is_a: Identifier) -> Self {
        Self {
            is_a,
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// Fix the value to a boolean
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanConstraint {
    pub value: bool,
    pub path: Vec<String>,
}

impl BooleanConstraint {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// Narrow the value's cardinality
#[derive(Debug, Clone, PartialEq)]
pub struct CardConstraint {
    pub card: Cardinality,
    pub path: Vec<String>,
}

impl CardConstraint {
    pub fn new(card: Cardinality) -> Self {
        Self {
            card,
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// A constraint kind this model does not recognize
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownConstraint {
    /// Raw tag reported by the upstream model
    pub type_name: String,
    pub path: Vec<String>,
}

impl UnknownConstraint {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            path: Vec::new(),
        }
    }

    /// Scope the constraint to a path
    pub fn on_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}
