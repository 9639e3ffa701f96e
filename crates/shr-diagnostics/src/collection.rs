//! Append-only diagnostic collections

use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// Diagnostics accumulated across a conversion
///
/// Composes by concatenation: every recursive mapper merges its callees'
/// collections into its own, so encounter order is preserved end to end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Concatenate another collection onto this one
    pub fn merge(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// Whether any diagnostics were collected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of collected diagnostics
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Render every message, in collection order
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(|d| d.message.clone()).collect()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            items: vec![diagnostic],
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_preserves_encounter_order() {
        let mut first = Diagnostics::new();
        first.push(Diagnostic::error("one"));
        let mut second = Diagnostics::new();
        second.push(Diagnostic::error("two"));
        second.push(Diagnostic::warning("three"));

        first.merge(second);
        assert_eq!(first.len(), 3);
        assert_eq!(first.messages(), ["one", "two", "three"]);
    }

    #[test]
    fn from_single_diagnostic() {
        let diags = Diagnostics::from(Diagnostic::error("only"));
        assert_eq!(diags.len(), 1);
        assert!(!diags.is_empty());
    }
}
