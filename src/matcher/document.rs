//! Read-only document access
//!
//! The matcher never owns or mutates documents. Anything that can answer
//! "what kind are you", "what is under this field" and "what are your string
//! bytes" can be matched.

use serde_json::Value;

/// Kind of a document value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    /// Scalar kinds without a JSON counterpart (binary, dates, ...)
    Other,
}

impl ValueKind {
    /// Returns the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Other => "other",
        }
    }
}

/// Read-only view of a value inside a document.
pub trait DocumentValue {
    /// Kind of this value.
    fn kind(&self) -> ValueKind;

    /// Looks up a direct field. Returns `None` when absent or when this
    /// value is not an object.
    fn field(&self, name: &str) -> Option<&dyn DocumentValue>;

    /// Raw bytes of a string value, `None` for every other kind.
    ///
    /// The bytes are expected to be UTF-8 but need not be valid.
    fn string_bytes(&self) -> Option<&[u8]>;
}

impl DocumentValue for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    fn field(&self, name: &str) -> Option<&dyn DocumentValue> {
        self.as_object()?
            .get(name)
            .map(|value| value as &dyn DocumentValue)
    }

    fn string_bytes(&self) -> Option<&[u8]> {
        self.as_str().map(str::as_bytes)
    }
}
