//! Hierarchy serialization
//!
//! JSON serialization for exported hierarchies. The tree is plain data;
//! this module wraps `serde_json` with writer plumbing and a
//! pretty-printing switch.

use std::io::{Read, Write};

use crate::model::SpecificationsNode;

/// Errors that can occur during serialization
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON serializer for exported hierarchies
#[derive(Debug, Default, Clone)]
pub struct JsonSerializer {
    /// Whether to produce pretty-printed output
    pub pretty: bool,
}

impl JsonSerializer {
    /// Create a new JSON serializer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new JSON serializer with pretty-printing enabled
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Serialize a hierarchy to a string
    pub fn serialize(&self, root: &SpecificationsNode) -> Result<String, SerializeError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(root)?
        } else {
            serde_json::to_string(root)?
        };
        Ok(json)
    }

    /// Serialize a hierarchy to a writer
    pub fn serialize_to_writer<W: Write>(
        &self,
        root: &SpecificationsNode,
        mut writer: W,
    ) -> Result<(), SerializeError> {
        let json = self.serialize(root)?;
        writer.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Deserialize a hierarchy from a string
    pub fn deserialize(&self, input: &str) -> Result<SpecificationsNode, SerializeError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Deserialize a hierarchy from a reader
    pub fn deserialize_from_reader<R: Read>(
        &self,
        mut reader: R,
    ) -> Result<SpecificationsNode, SerializeError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.deserialize(&content)
    }
}

/// Convenience functions for quick serialization
impl SpecificationsNode {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, SerializeError> {
        JsonSerializer::new().serialize(self)
    }

    /// Serialize to pretty-printed JSON string
    pub fn to_json_pretty(&self) -> Result<String, SerializeError> {
        JsonSerializer::pretty().serialize(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, SerializeError> {
        JsonSerializer::new().deserialize(json)
    }
}
