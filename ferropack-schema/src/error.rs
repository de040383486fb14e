//! Error types for record type declaration and field addressing.

use thiserror::Error;

/// Error type for layout declaration and field lookup.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Byte field declared without a length.
    #[error("fixed-length byte fields require an explicit positive length")]
    MissingByteLength,

    /// Field name not present in the layout.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The name that failed to resolve.
        name: String,
    },

    /// One or more field names not present in the layout.
    #[error("unknown fields: {}", .names.join(", "))]
    UnknownFields {
        /// Every name that failed to resolve, in input order.
        names: Vec<String>,
    },
}

impl SchemaError {
    /// Creates an unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Creates an unknown fields error from the collected names.
    pub fn unknown_fields(names: Vec<String>) -> Self {
        Self::UnknownFields { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::unknown_field("price");
        assert_eq!(err.to_string(), "unknown field 'price'");

        let err = SchemaError::unknown_fields(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "unknown fields: a, b");

        let err = SchemaError::MissingByteLength;
        assert!(err.to_string().contains("positive length"));
    }
}
