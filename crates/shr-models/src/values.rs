//! Value slots and cardinality

use crate::{Constraint, Identifier};

/// How many times a value may occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    /// Minimum number of occurrences
    pub min: u32,
    /// Maximum number of occurrences; `None` means unbounded
    pub max: Option<u32>,
}

impl Cardinality {
    /// Create a bounded cardinality
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Create a cardinality with no upper bound
    pub const fn unbounded(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Create a cardinality requiring exactly `n` occurrences
    pub const fn exactly(n: u32) -> Self {
        Self::new(n, n)
    }

    /// Whether the upper bound is unbounded
    pub const fn is_max_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

/// A typed slot inside a data element or field
///
/// `Unknown` is the forward-compatibility arm: value kinds added upstream
/// that this model does not know yet still round through the exporters,
/// carrying their raw tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A value that is an instance of the identified element
    Identifiable(IdentifiableValue),
    /// A value that points at an instance of the identified element
    Ref(RefValue),
    /// A choice among ordered alternatives
    Choice(ChoiceValue),
    /// A to-be-determined placeholder
    Tbd(TbdValue),
    /// A value whose definition is not yet complete
    Incomplete(IncompleteValue),
    /// A value kind this model does not recognize
    Unknown(UnknownValue),
}

impl Value {
    /// Cardinality carried by every variant
    pub fn card(&self) -> &Cardinality {
        match self {
            Value::Identifiable(v) => &v.card,
            Value::Ref(v) => &v.card,
            Value::Choice(v) => &v.card,
            Value::Tbd(v) => &v.card,
            Value::Incomplete(v) => &v.card,
            Value::Unknown(v) => &v.card,
        }
    }

    /// Constraints carried by every variant, in author order
    pub fn constraints(&self) -> &[Constraint] {
        match self {
            Value::Identifiable(v) => &v.constraints,
            Value::Ref(v) => &v.constraints,
            Value::Choice(v) => &v.constraints,
            Value::Tbd(v) => &v.constraints,
            Value::Incomplete(v) => &v.constraints,
            Value::Unknown(v) => &v.constraints,
        }
    }
}

/// A value that is an instance of the identified element
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiableValue {
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
    pub identifier: Identifier,
}

impl IdentifiableValue {
    /// Create a new identifiable value with no constraints
    pub fn new(card: Cardinality, identifier: Identifier) -> Self {
        Self {
            card,
            constraints: Vec::new(),
            identifier,
        }
    }

    /// Append a constraint
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A value that points at an instance of the identified element
#[derive(Debug, Clone, PartialEq)]
pub struct RefValue {
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
    pub identifier: Identifier,
}

impl RefValue {
    /// Create a new reference value with no constraints
    pub fn new(card: Cardinality, identifier: Identifier) -> Self {
        Self {
            card,
            constraints: Vec::new(),
            identifier,
        }
    }

    /// Append a constraint
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A choice among ordered alternatives
///
/// The option order is the author's intended display and precedence order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceValue {
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
    pub options: Vec<Value>,
}

impl ChoiceValue {
    /// Create a new choice with no options
    pub fn new(card: Cardinality) -> Self {
        Self {
            card,
            constraints: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Append an alternative
    pub fn with_option(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }

    /// Append a constraint
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A to-be-determined placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct TbdValue {
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
    /// Free-form placeholder text
    pub text: String,
}

impl TbdValue {
    /// Create a new placeholder value
    pub fn new(card: Cardinality, text: impl Into<String>) -> Self {
        Self {
            card,
            constraints: Vec::new(),
            text: text.into(),
        }
    }
}

/// A value whose definition is not yet complete
#[derive(Debug, Clone, PartialEq)]
pub struct IncompleteValue {
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
}

impl IncompleteValue {
    /// Create a new incomplete value
    pub fn new(card: Cardinality) -> Self {
        Self {
            card,
            constraints: Vec::new(),
        }
    }
}

/// A value kind this model does not recognize
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownValue {
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
    /// Raw tag reported by the upstream model
    pub type_name: String,
}

impl UnknownValue {
    /// Create a new unknown value carrying its raw tag
    pub fn new(card: Cardinality, type_name: impl Into<String>) -> Self {
        Self {
            card,
            constraints: Vec::new(),
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_unbounded_flag() {
        assert!(Cardinality::unbounded(0).is_max_unbounded());
        assert!(!Cardinality::new(0, 1).is_max_unbounded());
        assert_eq!(Cardinality::exactly(1), Cardinality::new(1, 1));
    }

    #[test]
    fn value_accessors_cover_every_variant() {
        let card = Cardinality::exactly(1);
        let id = Identifier::new("shr.core", "Patient");
        let values = [
            Value::Identifiable(IdentifiableValue::new(card, id.clone())),
            Value::Ref(RefValue::new(card, id)),
            Value::Choice(ChoiceValue::new(card)),
            Value::Tbd(TbdValue::new(card, "later")),
            Value::Incomplete(IncompleteValue::new(card)),
            Value::Unknown(UnknownValue::new(card, "MysteryValue")),
        ];
        for value in &values {
            assert_eq!(value.card().min, 1);
            assert!(value.constraints().is_empty());
        }
    }
}
