//! Field descriptors.
//!
//! A [`FieldSpec`] describes one field before compilation: its wire
//! type, the declared length for byte fields, and an optional default
//! value. Descriptors are built through the typed constructors, one
//! per primitive, so an unknown wire type cannot be expressed.

use crate::error::SchemaError;
use ferropack_core::{PrimitiveType, Value};

/// Declares one record field: wire type, length, and default.
///
/// Defaults are not validated here. Like explicit assignments, they
/// are checked against the wire type when the record is packed.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    primitive: PrimitiveType,
    length: Option<usize>,
    default: Option<Value>,
}

impl FieldSpec {
    const fn new(primitive: PrimitiveType) -> Self {
        Self {
            primitive,
            length: None,
            default: None,
        }
    }

    /// Declares a signed 8-bit field.
    #[must_use]
    pub const fn int8() -> Self {
        Self::new(PrimitiveType::Int8)
    }

    /// Declares a signed 16-bit field.
    #[must_use]
    pub const fn int16() -> Self {
        Self::new(PrimitiveType::Int16)
    }

    /// Declares a signed 32-bit field.
    #[must_use]
    pub const fn int32() -> Self {
        Self::new(PrimitiveType::Int32)
    }

    /// Declares a signed 64-bit field.
    #[must_use]
    pub const fn int64() -> Self {
        Self::new(PrimitiveType::Int64)
    }

    /// Declares an unsigned 8-bit field.
    #[must_use]
    pub const fn uint8() -> Self {
        Self::new(PrimitiveType::Uint8)
    }

    /// Declares an unsigned 16-bit field.
    #[must_use]
    pub const fn uint16() -> Self {
        Self::new(PrimitiveType::Uint16)
    }

    /// Declares an unsigned 32-bit field.
    #[must_use]
    pub const fn uint32() -> Self {
        Self::new(PrimitiveType::Uint32)
    }

    /// Declares an unsigned 64-bit field.
    #[must_use]
    pub const fn uint64() -> Self {
        Self::new(PrimitiveType::Uint64)
    }

    /// Declares a 32-bit floating point field.
    #[must_use]
    pub const fn float32() -> Self {
        Self::new(PrimitiveType::Float32)
    }

    /// Declares a 64-bit floating point field.
    #[must_use]
    pub const fn float64() -> Self {
        Self::new(PrimitiveType::Float64)
    }

    /// Declares a fixed-length byte field.
    ///
    /// # Arguments
    /// * `length` - Number of bytes the field occupies on the wire
    ///
    /// # Errors
    /// Returns [`SchemaError::MissingByteLength`] when `length` is
    /// zero; byte fields carry no implicit width.
    pub fn bytes(length: usize) -> Result<Self, SchemaError> {
        if length == 0 {
            return Err(SchemaError::MissingByteLength);
        }
        Ok(Self {
            primitive: PrimitiveType::Bytes,
            length: Some(length),
            default: None,
        })
    }

    /// Attaches a default value, used whenever a record leaves this
    /// field unassigned.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Returns the wire type of the field.
    #[must_use]
    pub const fn primitive(&self) -> PrimitiveType {
        self.primitive
    }

    /// Returns the declared length for byte fields.
    #[must_use]
    pub const fn length(&self) -> Option<usize> {
        self.length
    }

    /// Returns the default value, if one was declared.
    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the encoded length of the field in bytes.
    #[must_use]
    pub fn encoded_length(&self) -> usize {
        self.primitive.size() * self.length.unwrap_or(1)
    }

    /// Returns the natural alignment of the field in bytes.
    #[must_use]
    pub fn alignment(&self) -> usize {
        self.primitive.alignment()
    }
}
