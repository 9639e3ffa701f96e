//! Specification to hierarchy conversion
//!
//! Walks a [`Specifications`] collection and produces the labeled-tree
//! node model. The walk is a pure projection: nothing in the input is
//! mutated and every call rebuilds the tree from scratch. Mappers that can
//! meet an unrecognized variant return their diagnostics next to their
//! node, and callers merge those collections on the way up.

use log::{debug, warn};

use shr_diagnostics::{Diagnostic, Diagnostics};
use shr_models::{
    Code, CodeSystem, Concept, Constraint, DataElement, Identifier, Namespace, Specifications,
    Value, ValueSet, ValueSetRule, Version,
};

use crate::model::{
    CodeNode, CodeSystemNode, ConceptNode, ConstraintNode, DataElementNode, GrammarVersionNode,
    IdentifierNode, NamespaceNode, SectionNode, SpecificationsNode, ValueNode, ValueSetNode,
    ValueSetRuleNode, VersionNode,
};

/// Converts specification content into hierarchy nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyConverter;

impl HierarchyConverter {
    /// Create a new converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a whole specification collection into the root node
    pub fn convert_specifications(
        &self,
        specs: &Specifications,
    ) -> (SpecificationsNode, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let mut namespaces = Vec::new();
        for ns in specs.namespaces.all() {
            let elements = specs.data_elements.by_namespace(&ns.name);
            let versions = specs.data_elements.grammar_versions_for(&ns.name);
            let (node, d) = self.convert_namespace(ns, elements, &versions);
            diagnostics.merge(d);
            namespaces.push(node);
        }

        let value_sets: Vec<ValueSetNode> = specs
            .value_sets
            .all()
            .map(|vs| self.convert_value_set(vs))
            .collect();
        let code_systems: Vec<CodeSystemNode> = specs
            .code_systems
            .all()
            .map(|cs| self.convert_code_system(cs))
            .collect();

        debug!(
            "converted {} namespaces, {} value sets, {} code systems",
            namespaces.len(),
            value_sets.len(),
            code_systems.len()
        );

        let root = SpecificationsNode {
            label: "SHR".to_string(),
            kind: "SHR".to_string(),
            children: vec![
                SectionNode::Namespaces {
                    label: "Namespaces".to_string(),
                    children: namespaces,
                },
                SectionNode::ValueSets {
                    label: "Value Sets".to_string(),
                    children: value_sets,
                },
                SectionNode::CodeSystems {
                    label: "Code Systems".to_string(),
                    children: code_systems,
                },
            ],
        };
        (root, diagnostics)
    }

    /// Convert one namespace with its data elements and grammar versions
    pub fn convert_namespace(
        &self,
        namespace: &Namespace,
        elements: &[DataElement],
        versions: &[Version],
    ) -> (NamespaceNode, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        // The one place output order is not source order: elements sort by
        // name so exports stay stable regardless of enumeration order.
        let mut sorted: Vec<&DataElement> = elements.iter().collect();
        sorted.sort_by_key(|e| (e.identifier.name.to_lowercase(), e.identifier.name.clone()));

        let mut children = Vec::with_capacity(sorted.len());
        for element in sorted {
            let (node, d) = self.convert_data_element(element);
            diagnostics.merge(d);
            children.push(node);
        }

        let grammar_version = match versions {
            [] => None,
            [only] => Some(GrammarVersionNode::One(self.convert_version(only))),
            many => Some(GrammarVersionNode::Many(
                many.iter().map(|v| self.convert_version(v)).collect(),
            )),
        };

        let node = NamespaceNode {
            label: namespace.name.clone(),
            kind: "Namespace".to_string(),
            description: namespace.description.clone(),
            grammar_version,
            children,
        };
        (node, diagnostics)
    }

    /// Convert one data element definition
    pub fn convert_data_element(&self, element: &DataElement) -> (DataElementNode, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let value = element.value.as_ref().map(|v| {
            let (node, d) = self.convert_value(v);
            diagnostics.merge(d);
            node
        });

        let mut children = Vec::with_capacity(element.fields.len());
        for field in &element.fields {
            let (node, d) = self.convert_value(field);
            diagnostics.merge(d);
            children.push(node);
        }

        let based_on = if element.based_on.is_empty() {
            None
        } else {
            Some(
                element
                    .based_on
                    .iter()
                    .map(|id| self.convert_identifier(id))
                    .collect(),
            )
        };

        let node = DataElementNode {
            kind: "DataElement".to_string(),
            label: element.identifier.name.clone(),
            is_entry: element.is_entry,
            concepts: element
                .concepts
                .iter()
                .map(|c| self.convert_concept(c))
                .collect(),
            description: element.description.clone(),
            grammar_version: element
                .grammar_version
                .as_ref()
                .map(|v| self.convert_version(v)),
            based_on,
            value,
            children,
        };
        (node, diagnostics)
    }

    /// Convert one value slot, recursing through choice alternatives
    pub fn convert_value(&self, value: &Value) -> (ValueNode, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let card = value.card();
        let (constraints, d) = self.convert_constraints(value.constraints());
        diagnostics.merge(d);

        let mut node = ValueNode {
            min: card.min,
            max: card.max,
            constraints,
            kind: String::new(),
            label: None,
            identifier: None,
            value: None,
            text: None,
        };

        match value {
            Value::Identifiable(v) => {
                node.kind = "IdentifiableValue".to_string();
                node.label = Some(self.identifier_to_string(&v.identifier));
                node.identifier = Some(self.convert_identifier(&v.identifier));
            }
            Value::Ref(v) => {
                node.kind = "RefValue".to_string();
                node.label = Some(format!(
                    "reference to {}",
                    self.identifier_to_string(&v.identifier)
                ));
                node.identifier = Some(self.convert_identifier(&v.identifier));
            }
            Value::Choice(v) => {
                node.kind = "ChoiceValue".to_string();
                let mut options = Vec::with_capacity(v.options.len());
                for option in &v.options {
                    let (mapped, d) = self.convert_value(option);
                    diagnostics.merge(d);
                    options.push(mapped);
                }
                node.value = Some(options);
            }
            Value::Tbd(v) => {
                node.kind = "TBD".to_string();
                node.text = Some(v.text.clone());
            }
            Value::Incomplete(_) => {
                node.kind = "Incomplete".to_string();
            }
            Value::Unknown(v) => {
                warn!("unknown value type '{}'", v.type_name);
                node.kind = v.type_name.clone();
                diagnostics.push(
                    Diagnostic::error(format!("Unknown value type '{}'", v.type_name))
                        .with_subject(v.type_name.clone()),
                );
            }
        }
        (node, diagnostics)
    }

    fn convert_constraints(
        &self,
        constraints: &[Constraint],
    ) -> (Vec<ConstraintNode>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let mut nodes = Vec::with_capacity(constraints.len());
        for constraint in constraints {
            let (node, d) = self.convert_constraint(constraint);
            diagnostics.merge(d);
            nodes.push(node);
        }
        (nodes, diagnostics)
    }

    /// Convert one constraint
    pub fn convert_constraint(&self, constraint: &Constraint) -> (ConstraintNode, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let mut node = ConstraintNode {
            kind: String::new(),
            valueset: None,
            code: None,
            is_a: None,
            value: None,
            min: None,
            max: None,
            path: constraint.path().join(":"),
        };

        match constraint {
            Constraint::ValueSet(c) => {
                node.kind = "ValueSetConstraint".to_string();
                node.valueset = Some(c.value_set.clone());
            }
            Constraint::Code(c) => {
                node.kind = "CodeConstraint".to_string();
                node.code = Some(self.convert_concept(&c.code));
            }
            Constraint::IncludesCode(c) => {
                node.kind = "IncludesCodeConstraint".to_string();
                node.code = Some(self.convert_concept(&c.code));
            }
            Constraint::Type(c) => {
                node.kind = "TypeConstraint".to_string();
                node.is_a = Some(self.convert_identifier(&c.is_a));
            }
            Constraint::Boolean(c) => {
                node.kind = "BooleanConstraint".to_string();
                node.value = Some(c.value);
            }
            Constraint::Card(c) => {
                node.kind = "CardConstraint".to_string();
                node.min = Some(c.card.min);
                node.max = c.card.max;
            }
            Constraint::Unknown(c) => {
                warn!("unknown constraint type '{}'", c.type_name);
                node.kind = c.type_name.clone();
                diagnostics.push(
                    Diagnostic::error(format!("Unknown constraint type '{}'", c.type_name))
                        .with_subject(c.type_name.clone()),
                );
            }
        }
        (node, diagnostics)
    }

    /// Convert one value set with its rules
    pub fn convert_value_set(&self, value_set: &ValueSet) -> ValueSetNode {
        let children = if value_set.rules.is_empty() {
            None
        } else {
            Some(
                value_set
                    .rules
                    .iter()
                    .map(|r| self.convert_rule(r))
                    .collect(),
            )
        };

        ValueSetNode {
            kind: "ValueSet".to_string(),
            label: value_set.identifier.name.clone(),
            namespace: value_set.identifier.namespace.clone(),
            description: value_set.description.clone(),
            url: value_set.url.clone(),
            concepts: value_set
                .concepts
                .iter()
                .map(|c| self.convert_concept(c))
                .collect(),
            grammar_version: value_set
                .grammar_version
                .as_ref()
                .map(|v| self.convert_version(v)),
            children,
        }
    }

    fn convert_rule(&self, rule: &ValueSetRule) -> ValueSetRuleNode {
        let label = rule
            .code
            .display
            .clone()
            .unwrap_or_else(|| rule.code.code.clone());
        ValueSetRuleNode {
            label,
            code: self.convert_code(&rule.code),
            kind: rule.kind.as_str().to_string(),
        }
    }

    /// Convert one code system with its codes
    pub fn convert_code_system(&self, code_system: &CodeSystem) -> CodeSystemNode {
        let children = if code_system.codes.is_empty() {
            None
        } else {
            Some(
                code_system
                    .codes
                    .iter()
                    .map(|c| self.convert_concept(c))
                    .collect(),
            )
        };

        CodeSystemNode {
            kind: "CodeSystem".to_string(),
            label: code_system.identifier.name.clone(),
            namespace: code_system.identifier.namespace.clone(),
            description: code_system.description.clone(),
            url: code_system.url.clone(),
            grammar_version: code_system
                .grammar_version
                .as_ref()
                .map(|v| self.convert_version(v)),
            children,
        }
    }

    /// Convert an identifier leaf
    pub fn convert_identifier(&self, identifier: &Identifier) -> IdentifierNode {
        IdentifierNode {
            label: identifier.name.clone(),
            kind: "Identifier".to_string(),
            namespace: identifier.namespace.clone(),
        }
    }

    /// Convert a concept leaf
    pub fn convert_concept(&self, concept: &Concept) -> ConceptNode {
        ConceptNode {
            label: self.concept_to_string(concept),
            kind: "Concept".to_string(),
            system: concept.system.clone(),
            code: concept.code.clone(),
            display: concept.display.clone(),
            url: self.concept_url(concept),
        }
    }

    /// Convert a code leaf
    pub fn convert_code(&self, code: &Code) -> CodeNode {
        CodeNode {
            label: code.display.clone(),
            kind: "code".to_string(),
            code: code.code.clone(),
            system: code.system.clone(),
        }
    }

    fn convert_version(&self, version: &Version) -> VersionNode {
        VersionNode {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
        }
    }

    /// `"{namespace}:{name}"`
    pub fn identifier_to_string(&self, identifier: &Identifier) -> String {
        format!("{}:{}", identifier.namespace, identifier.name)
    }

    /// `"{display} ({system}:{code})"` when a display is present, else
    /// `"{system}:{code}"`
    pub fn concept_to_string(&self, concept: &Concept) -> String {
        match &concept.display {
            Some(display) => format!("{} ({}:{})", display, concept.system, concept.code),
            None => format!("{}:{}", concept.system, concept.code),
        }
    }

    // Known terminology servers get a direct browser link; anything else
    // falls back to "{system}/{code}".
    fn concept_url(&self, concept: &Concept) -> String {
        match concept.system.as_str() {
            "http://uts.nlm.nih.gov/metathesaurus" => format!(
                "https://uts.nlm.nih.gov/metathesaurus.html?cui={}",
                concept.code
            ),
            "http://snomed.info/sct" => format!(
                "https://uts.nlm.nih.gov/snomedctBrowser.html?conceptId={}",
                concept.code
            ),
            "http://loinc.org" => {
                format!("http://s.details.loinc.org/LOINC/{}.html", concept.code)
            }
            "http://unitsofmeasure.org" => {
                "http://unitsofmeasure.org/ucum.html#section-Alphabetic-Index-By-Symbol".to_string()
            }
            _ => format!("{}/{}", concept.system, concept.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shr_models::{
        BooleanConstraint, CardConstraint, Cardinality, UnknownConstraint, ValueSetConstraint,
    };

    fn converter() -> HierarchyConverter {
        HierarchyConverter::new()
    }

    #[test]
    fn identifier_display_string() {
        let id = Identifier::new("shr.core", "Patient");
        assert_eq!(converter().identifier_to_string(&id), "shr.core:Patient");
    }

    #[test]
    fn concept_display_string_with_and_without_display() {
        let plain = Concept::new("http://snomed.info/sct", "12345");
        assert_eq!(
            converter().concept_to_string(&plain),
            "http://snomed.info/sct:12345"
        );

        let named = plain.with_display("Stuff");
        assert_eq!(
            converter().concept_to_string(&named),
            "Stuff (http://snomed.info/sct:12345)"
        );
    }

    #[rstest]
    #[case(
        "http://uts.nlm.nih.gov/metathesaurus",
        "C0025202",
        "https://uts.nlm.nih.gov/metathesaurus.html?cui=C0025202"
    )]
    #[case(
        "http://snomed.info/sct",
        "12345",
        "https://uts.nlm.nih.gov/snomedctBrowser.html?conceptId=12345"
    )]
    #[case(
        "http://loinc.org",
        "1234-5",
        "http://s.details.loinc.org/LOINC/1234-5.html"
    )]
    #[case(
        "http://unitsofmeasure.org",
        "mg",
        "http://unitsofmeasure.org/ucum.html#section-Alphabetic-Index-By-Symbol"
    )]
    #[case("http://example.org/x", "9", "http://example.org/x/9")]
    fn concept_url_table(#[case] system: &str, #[case] code: &str, #[case] expected: &str) {
        let node = converter().convert_concept(&Concept::new(system, code));
        assert_eq!(node.url, expected);
    }

    #[test]
    fn code_without_display_has_no_label() {
        let node = converter().convert_code(&Code::new("http://loinc.org", "1234-5"));
        assert_eq!(node.label, None);
        assert_eq!(node.kind, "code");

        let node =
            converter().convert_code(&Code::new("http://loinc.org", "1234-5").with_display("X"));
        assert_eq!(node.label.as_deref(), Some("X"));
    }

    #[test]
    fn constraint_path_joins_segments() {
        let constraint = Constraint::ValueSet(
            ValueSetConstraint::new("http://standardhealth.org/vs/sample")
                .on_path(vec!["Quantity".to_string(), "Units".to_string()]),
        );
        let (node, diags) = converter().convert_constraint(&constraint);
        assert_eq!(node.path, "Quantity:Units");
        assert!(diags.is_empty());

        let unscoped = Constraint::Boolean(BooleanConstraint::new(true));
        let (node, _) = converter().convert_constraint(&unscoped);
        assert_eq!(node.path, "");
        assert_eq!(node.value, Some(true));
    }

    #[test]
    fn card_constraint_drops_max_when_unbounded() {
        let bounded = Constraint::Card(CardConstraint::new(Cardinality::new(1, 2)));
        let (node, _) = converter().convert_constraint(&bounded);
        assert_eq!(node.min, Some(1));
        assert_eq!(node.max, Some(2));

        let unbounded = Constraint::Card(CardConstraint::new(Cardinality::unbounded(0)));
        let (node, _) = converter().convert_constraint(&unbounded);
        assert_eq!(node.min, Some(0));
        assert_eq!(node.max, None);
    }

    #[test]
    fn unknown_constraint_keeps_tag_and_reports_once() {
        let constraint = Constraint::Unknown(UnknownConstraint::new("FancyNewConstraint"));
        let (node, diags) = converter().convert_constraint(&constraint);
        assert_eq!(node.kind, "FancyNewConstraint");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags.messages(),
            ["Unknown constraint type 'FancyNewConstraint'"]
        );
    }
}
