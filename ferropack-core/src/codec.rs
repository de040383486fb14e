//! Scalar codec: one field value to or from its wire bytes.
//!
//! [`encode_value`] performs the per-field checks deferred from
//! assignment time: variant compatibility, integer range, and byte
//! length. [`decode_value`] is the infallible inverse; callers verify
//! the buffer size once per record, not once per field.

use crate::buffer::{ReadBuffer, WriteBuffer};
use crate::error::{PackError, Result};
use crate::types::{ByteOrder, PrimitiveType};
use crate::value::Value;

/// Encodes one field value at the given offset.
///
/// Integers are accepted from either integer variant and range-checked
/// against the wire width. Floats accept integer values by conversion;
/// a float64 value in a float32 field is narrowed with `as`. Byte
/// values must match the declared length exactly.
///
/// # Arguments
/// * `buf` - Destination buffer, already sized for the layout
/// * `offset` - Byte offset of the field
/// * `field` - Field name, used in error context
/// * `primitive` - Wire type declared for the field
/// * `length` - Encoded length in bytes; only consulted for byte fields
/// * `order` - Byte order to encode with
/// * `value` - Value to encode
///
/// # Errors
/// Returns [`PackError::TypeMismatch`], [`PackError::ValueOutOfRange`],
/// or [`PackError::LengthMismatch`] when the value does not suit the
/// field.
pub fn encode_value<B: WriteBuffer + ?Sized>(
    buf: &mut B,
    offset: usize,
    field: &str,
    primitive: PrimitiveType,
    length: usize,
    order: ByteOrder,
    value: &Value,
) -> Result<()> {
    match primitive {
        PrimitiveType::Int8 => {
            let n = int_value(field, primitive, value)?;
            let n = i8::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_i8(offset, n);
        }
        PrimitiveType::Int16 => {
            let n = int_value(field, primitive, value)?;
            let n = i16::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_i16(offset, n, order);
        }
        PrimitiveType::Int32 => {
            let n = int_value(field, primitive, value)?;
            let n = i32::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_i32(offset, n, order);
        }
        PrimitiveType::Int64 => {
            let n = int_value(field, primitive, value)?;
            let n = i64::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_i64(offset, n, order);
        }
        PrimitiveType::Uint8 => {
            let n = int_value(field, primitive, value)?;
            let n = u8::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_u8(offset, n);
        }
        PrimitiveType::Uint16 => {
            let n = int_value(field, primitive, value)?;
            let n = u16::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_u16(offset, n, order);
        }
        PrimitiveType::Uint32 => {
            let n = int_value(field, primitive, value)?;
            let n = u32::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_u32(offset, n, order);
        }
        PrimitiveType::Uint64 => {
            let n = int_value(field, primitive, value)?;
            let n = u64::try_from(n).map_err(|_| out_of_range(field, primitive, n))?;
            buf.put_u64(offset, n, order);
        }
        PrimitiveType::Float32 => {
            let x = float_value(field, primitive, value)?;
            buf.put_f32(offset, x as f32, order);
        }
        PrimitiveType::Float64 => {
            let x = float_value(field, primitive, value)?;
            buf.put_f64(offset, x, order);
        }
        PrimitiveType::Bytes => {
            let b = byte_value(field, primitive, value)?;
            if b.len() != length {
                return Err(PackError::LengthMismatch {
                    field: field.to_string(),
                    expected: length,
                    actual: b.len(),
                });
            }
            buf.put_bytes(offset, b);
        }
    }
    Ok(())
}

/// Decodes one field value at the given offset.
///
/// Signed wire types decode to [`Value::Int`], unsigned to
/// [`Value::Uint`], floats to [`Value::Float`], and byte runs to an
/// owned [`Value::Bytes`].
///
/// # Arguments
/// * `buf` - Source buffer, already verified to cover the layout
/// * `offset` - Byte offset of the field
/// * `primitive` - Wire type declared for the field
/// * `length` - Encoded length in bytes; only consulted for byte fields
/// * `order` - Byte order to decode with
///
/// # Panics
/// Panics if the buffer is too short for the field; size is the
/// caller's check.
#[must_use]
pub fn decode_value<B: ReadBuffer + ?Sized>(
    buf: &B,
    offset: usize,
    primitive: PrimitiveType,
    length: usize,
    order: ByteOrder,
) -> Value {
    match primitive {
        PrimitiveType::Int8 => Value::Int(i64::from(buf.get_i8(offset))),
        PrimitiveType::Int16 => Value::Int(i64::from(buf.get_i16(offset, order))),
        PrimitiveType::Int32 => Value::Int(i64::from(buf.get_i32(offset, order))),
        PrimitiveType::Int64 => Value::Int(buf.get_i64(offset, order)),
        PrimitiveType::Uint8 => Value::Uint(u64::from(buf.get_u8(offset))),
        PrimitiveType::Uint16 => Value::Uint(u64::from(buf.get_u16(offset, order))),
        PrimitiveType::Uint32 => Value::Uint(u64::from(buf.get_u32(offset, order))),
        PrimitiveType::Uint64 => Value::Uint(buf.get_u64(offset, order)),
        PrimitiveType::Float32 => Value::Float(f64::from(buf.get_f32(offset, order))),
        PrimitiveType::Float64 => Value::Float(buf.get_f64(offset, order)),
        PrimitiveType::Bytes => Value::Bytes(buf.get_bytes(offset, length).to_vec()),
    }
}

fn int_value(field: &str, primitive: PrimitiveType, value: &Value) -> Result<i128> {
    match value {
        Value::Int(n) => Ok(i128::from(*n)),
        Value::Uint(n) => Ok(i128::from(*n)),
        other => Err(type_mismatch(field, primitive, other)),
    }
}

fn float_value(field: &str, primitive: PrimitiveType, value: &Value) -> Result<f64> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Int(n) => Ok(*n as f64),
        Value::Uint(n) => Ok(*n as f64),
        other @ Value::Bytes(_) => Err(type_mismatch(field, primitive, other)),
    }
}

fn byte_value<'a>(field: &str, primitive: PrimitiveType, value: &'a Value) -> Result<&'a [u8]> {
    match value {
        Value::Bytes(b) => Ok(b.as_slice()),
        other => Err(type_mismatch(field, primitive, other)),
    }
}

fn type_mismatch(field: &str, primitive: PrimitiveType, found: &Value) -> PackError {
    PackError::TypeMismatch {
        field: field.to_string(),
        expected: primitive,
        found: found.type_name(),
    }
}

fn out_of_range(field: &str, primitive: PrimitiveType, value: i128) -> PackError {
    PackError::ValueOutOfRange {
        field: field.to_string(),
        value,
        primitive,
    }
}
