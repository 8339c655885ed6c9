//! Document type and typed field mapping.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single document: an identifier plus a JSON field map.
///
/// The store never interprets `fields`; translating to and from model types
/// happens at the repository layer through [`Document::encode`] and
/// [`Document::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier, unique within its collection.
    pub id: String,

    /// Document contents as a JSON value.
    pub fields: serde_json::Value,
}

impl Document {
    /// Creates a document from raw JSON fields.
    pub fn new(id: impl Into<String>, fields: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Serializes a model value into a document with the given identifier.
    pub fn encode<T: Serialize>(id: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            fields: serde_json::to_value(value)?,
        })
    }

    /// Deserializes the document fields into a model type.
    ///
    /// Unreadable data surfaces as `StoreError::Serialization`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.fields.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn encode_then_decode_preserves_value() {
        let sample = Sample {
            name: "door A".to_string(),
            count: 3,
        };
        let doc = Document::encode("doc-1", &sample).unwrap();
        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.decode::<Sample>().unwrap(), sample);
    }

    #[test]
    fn decode_surfaces_unreadable_fields() {
        let doc = Document::new("doc-2", serde_json::json!({"name": 42}));
        assert!(doc.decode::<Sample>().is_err());
    }
}
