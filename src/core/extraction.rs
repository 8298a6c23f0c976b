use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque metadata payload produced by an extractor.
///
/// The payload is whatever the backend emitted; it is never inspected or
/// reshaped, only carried through and re-serialized. Serializing the same
/// payload twice yields identical bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extraction(Value);

impl Extraction {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    /// Serialize as a single-line JSON document. String contents are escaped
    /// by the serializer, so the output can never span multiple lines.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<Value> for Extraction {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
