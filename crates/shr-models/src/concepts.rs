//! Coded references into external terminology systems

/// A coded concept from a terminology system such as SNOMED CT or LOINC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Terminology system URI
    pub system: String,
    /// Code within the system
    pub code: String,
    /// Human-readable display text, if the source recorded one
    pub display: Option<String>,
}

impl Concept {
    /// Create a new concept without display text
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: None,
        }
    }

    /// Set the display text
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// A lightweight code reference used inside value set rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Terminology system URI
    pub system: String,
    /// Code within the system
    pub code: String,
    /// Human-readable display text, if the source recorded one
    pub display: Option<String>,
}

impl Code {
    /// Create a new code without display text
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: None,
        }
    }

    /// Set the display text
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}
