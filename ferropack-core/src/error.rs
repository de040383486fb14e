//! Error types for packing and unpacking record values.

use crate::types::PrimitiveType;
use thiserror::Error;

/// Error raised when values cannot be converted to or from wire bytes.
#[derive(Debug, Error)]
pub enum PackError {
    /// Input or output buffer does not match the packed size.
    #[error("size mismatch: expected {expected} bytes, got {actual} bytes")]
    SizeMismatch {
        /// Packed size of the layout in bytes.
        expected: usize,
        /// Size of the buffer handed in.
        actual: usize,
    },

    /// A field was packed without a value or default.
    #[error("field '{field}' has no value to pack")]
    UnsetField {
        /// Name of the unset field.
        field: String,
    },

    /// A value's variant does not suit the field's wire type.
    #[error("field '{field}' expects a {expected} value, got {found}")]
    TypeMismatch {
        /// Name of the offending field.
        field: String,
        /// Wire type declared for the field.
        expected: PrimitiveType,
        /// Variant name of the value actually held.
        found: &'static str,
    },

    /// An integer does not fit the field's wire width.
    #[error("value {value} out of range for field '{field}' of type {primitive}")]
    ValueOutOfRange {
        /// Name of the offending field.
        field: String,
        /// The integer that failed the range check.
        value: i128,
        /// Wire type declared for the field.
        primitive: PrimitiveType,
    },

    /// A byte value's length differs from the field's declared length.
    #[error("byte field '{field}' expects exactly {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Name of the offending field.
        field: String,
        /// Length declared for the field.
        expected: usize,
        /// Length of the value actually held.
        actual: usize,
    },
}

/// Result type alias for pack and unpack operations.
pub type Result<T> = std::result::Result<T, PackError>;
