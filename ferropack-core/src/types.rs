//! Primitive type and byte-order definitions for record packing.
//!
//! This module provides the wire-level vocabulary of the crate: the
//! primitive types a field can carry, the byte-order modes a layout
//! can be packed under, and the concrete endianness each mode
//! resolves to on the running platform.

/// Primitive wire type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Fixed-length run of raw bytes; the length lives in the field
    /// descriptor, not here.
    Bytes,
}

impl PrimitiveType {
    /// Returns the size of one element of this type in bytes.
    ///
    /// For [`Self::Bytes`] this is the size of a single byte; the
    /// field descriptor multiplies it by the declared length.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Bytes => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
        }
    }

    /// Returns the natural alignment of this type in bytes.
    ///
    /// Only consulted when packing under [`ByteOrder::NativeAligned`];
    /// byte runs align to 1 regardless of their length.
    #[must_use]
    pub const fn alignment(&self) -> usize {
        match self {
            Self::Bytes => 1,
            _ => self.size(),
        }
    }

    /// Returns the canonical name of this type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Bytes => "bytes",
        }
    }

    /// Returns true if this is a signed integer type.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true if this is an unsigned integer type.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    /// Returns true if this is an integer type of either signedness.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Returns true if this is the raw bytes type.
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes)
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Concrete endianness a byte-order mode resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Returns the endianness of the running platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

/// Byte order a layout is packed under.
///
/// The mode decides two things: the endianness of multi-byte values
/// and whether fields are padded to their natural alignment. Only
/// [`Self::NativeAligned`] inserts padding; every other mode packs
/// fields back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Platform endianness with natural alignment padding.
    NativeAligned,
    /// Platform endianness, packed without padding.
    Native,
    /// Little-endian byte order, packed (the default).
    #[default]
    LittleEndian,
    /// Big-endian byte order, packed.
    BigEndian,
    /// Network byte order, packed. Identical on the wire to
    /// [`Self::BigEndian`].
    Network,
}

impl ByteOrder {
    /// Parses a byte order from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nativealigned" | "native-aligned" => Some(Self::NativeAligned),
            "native" => Some(Self::Native),
            "littleendian" | "little-endian" | "le" => Some(Self::LittleEndian),
            "bigendian" | "big-endian" | "be" => Some(Self::BigEndian),
            "network" => Some(Self::Network),
            _ => None,
        }
    }

    /// Returns true if this mode pads fields to their natural alignment.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        matches!(self, Self::NativeAligned)
    }

    /// Returns the concrete endianness values take under this mode.
    #[must_use]
    pub const fn endianness(&self) -> Endianness {
        match self {
            Self::NativeAligned | Self::Native => Endianness::native(),
            Self::LittleEndian => Endianness::Little,
            Self::BigEndian | Self::Network => Endianness::Big,
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NativeAligned => "native-aligned",
            Self::Native => "native",
            Self::LittleEndian => "little-endian",
            Self::BigEndian => "big-endian",
            Self::Network => "network",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_type_size() {
        assert_eq!(PrimitiveType::Int8.size(), 1);
        assert_eq!(PrimitiveType::Uint8.size(), 1);
        assert_eq!(PrimitiveType::Int16.size(), 2);
        assert_eq!(PrimitiveType::Uint16.size(), 2);
        assert_eq!(PrimitiveType::Int32.size(), 4);
        assert_eq!(PrimitiveType::Uint32.size(), 4);
        assert_eq!(PrimitiveType::Float32.size(), 4);
        assert_eq!(PrimitiveType::Int64.size(), 8);
        assert_eq!(PrimitiveType::Uint64.size(), 8);
        assert_eq!(PrimitiveType::Float64.size(), 8);
        assert_eq!(PrimitiveType::Bytes.size(), 1);
    }

    #[test]
    fn test_primitive_type_alignment() {
        assert_eq!(PrimitiveType::Uint8.alignment(), 1);
        assert_eq!(PrimitiveType::Uint16.alignment(), 2);
        assert_eq!(PrimitiveType::Uint32.alignment(), 4);
        assert_eq!(PrimitiveType::Float64.alignment(), 8);
        assert_eq!(PrimitiveType::Bytes.alignment(), 1);
    }

    #[test]
    fn test_primitive_type_classification() {
        assert!(PrimitiveType::Int32.is_signed());
        assert!(!PrimitiveType::Int32.is_unsigned());
        assert!(PrimitiveType::Uint64.is_unsigned());
        assert!(PrimitiveType::Int8.is_integer());
        assert!(PrimitiveType::Uint16.is_integer());
        assert!(!PrimitiveType::Float32.is_integer());
        assert!(PrimitiveType::Float64.is_float());
        assert!(PrimitiveType::Bytes.is_bytes());
        assert!(!PrimitiveType::Bytes.is_integer());
    }

    #[test]
    fn test_primitive_type_display() {
        assert_eq!(PrimitiveType::Uint32.to_string(), "uint32");
        assert_eq!(PrimitiveType::Float64.to_string(), "float64");
        assert_eq!(PrimitiveType::Bytes.to_string(), "bytes");
    }

    #[test]
    fn test_byte_order_parse() {
        assert_eq!(
            ByteOrder::parse("littleEndian"),
            Some(ByteOrder::LittleEndian)
        );
        assert_eq!(ByteOrder::parse("little-endian"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::parse("le"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::parse("bigEndian"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("be"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("network"), Some(ByteOrder::Network));
        assert_eq!(ByteOrder::parse("native"), Some(ByteOrder::Native));
        assert_eq!(
            ByteOrder::parse("native-aligned"),
            Some(ByteOrder::NativeAligned)
        );
        assert_eq!(ByteOrder::parse("invalid"), None);
    }

    #[test]
    fn test_byte_order_default() {
        assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_byte_order_alignment() {
        assert!(ByteOrder::NativeAligned.is_aligned());
        assert!(!ByteOrder::Native.is_aligned());
        assert!(!ByteOrder::LittleEndian.is_aligned());
        assert!(!ByteOrder::BigEndian.is_aligned());
        assert!(!ByteOrder::Network.is_aligned());
    }

    #[test]
    fn test_byte_order_endianness() {
        assert_eq!(ByteOrder::LittleEndian.endianness(), Endianness::Little);
        assert_eq!(ByteOrder::BigEndian.endianness(), Endianness::Big);
        // Network order is big-endian by definition.
        assert_eq!(
            ByteOrder::Network.endianness(),
            ByteOrder::BigEndian.endianness()
        );
        assert_eq!(ByteOrder::Native.endianness(), Endianness::native());
        assert_eq!(ByteOrder::NativeAligned.endianness(), Endianness::native());
    }
}
