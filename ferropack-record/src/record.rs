//! Record instances bound to a compiled layout.
//!
//! A [`Record`] holds one value slot per layout field. Slots start
//! from the layout's defaults, may be reassigned or cleared freely,
//! and are only validated when the record is packed. Unpacking fills
//! every slot from wire bytes; a failed unpack leaves the record as
//! it was.

use ferropack_core::{ByteOrder, PackError, Value, WriteBuffer, codec};
use ferropack_schema::{Layout, SchemaError, WireFormat};

/// A value holder for one record of a compiled layout.
///
/// Cloning copies the values and shares the layout.
#[derive(Debug, Clone)]
pub struct Record {
    layout: Layout,
    values: Vec<Option<Value>>,
}

impl Record {
    /// Creates a record with every slot seeded from the layout's
    /// defaults. Fields without a default start unset.
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
            values: layout.defaults().to_vec(),
        }
    }

    /// Creates a record and assigns the given fields by name.
    ///
    /// # Arguments
    /// * `layout` - Layout the record binds to
    /// * `values` - Name and value pairs to assign
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownFields`] naming every entry that
    /// does not resolve to a layout field. Known names are matched
    /// case-sensitively.
    pub fn with_values<I, N, V>(layout: &Layout, values: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new(layout);
        let mut unknown = Vec::new();
        for (name, value) in values {
            match layout.position(name.as_ref()) {
                Some(position) => record.values[position] = Some(value.into()),
                None => unknown.push(name.as_ref().to_string()),
            }
        }
        if unknown.is_empty() {
            Ok(record)
        } else {
            Err(SchemaError::unknown_fields(unknown))
        }
    }

    /// Returns the layout the record binds to.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the packed size in bytes under the declared byte order.
    #[must_use]
    pub fn size(&self) -> usize {
        self.layout.packed_size()
    }

    /// Returns every slot in declaration order; `None` marks an unset
    /// field.
    #[must_use]
    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Returns the value of a field, or `None` when the field is
    /// unset.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownField`] when the name does not
    /// resolve.
    pub fn get(&self, name: &str) -> Result<Option<&Value>, SchemaError> {
        let position = self.position_of(name)?;
        Ok(self.values[position].as_ref())
    }

    /// Assigns a field by name.
    ///
    /// The value is taken as-is; variant, range, and length checks
    /// run when the record is packed, not here.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownField`] when the name does not
    /// resolve.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SchemaError> {
        let position = self.position_of(name)?;
        self.values[position] = Some(value.into());
        Ok(())
    }

    /// Clears a field back to unset. Packing then fails until the
    /// field is assigned again; construction-time defaults are not
    /// reapplied.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownField`] when the name does not
    /// resolve.
    pub fn clear(&mut self, name: &str) -> Result<(), SchemaError> {
        let position = self.position_of(name)?;
        self.values[position] = None;
        Ok(())
    }

    /// Packs the record under its declared byte order.
    ///
    /// # Errors
    /// Returns [`PackError::UnsetField`] for a slot holding no value,
    /// or the codec's type, range, and length errors.
    pub fn pack(&self) -> Result<Vec<u8>, PackError> {
        let wire = self.layout.wire();
        let mut buf = vec![0u8; wire.size()];
        self.encode_fields(&mut buf, wire, self.layout.byte_order())?;
        Ok(buf)
    }

    /// Packs the record under an arbitrary byte order, ignoring the
    /// declared one.
    ///
    /// # Errors
    /// Same as [`Record::pack`].
    pub fn pack_with_order(&self, order: ByteOrder) -> Result<Vec<u8>, PackError> {
        let wire = self.layout.wire_format(order);
        let mut buf = vec![0u8; wire.size()];
        self.encode_fields(&mut buf, &wire, order)?;
        Ok(buf)
    }

    /// Packs the record into the front of `dst` and returns the number
    /// of bytes written. Padding bytes are zeroed; bytes past the
    /// packed size are left untouched.
    ///
    /// # Errors
    /// Returns [`PackError::SizeMismatch`] when `dst` is shorter than
    /// the packed size, plus the errors of [`Record::pack`].
    pub fn pack_into(&self, dst: &mut [u8]) -> Result<usize, PackError> {
        let wire = self.layout.wire();
        let size = wire.size();
        if dst.len() < size {
            return Err(PackError::SizeMismatch {
                expected: size,
                actual: dst.len(),
            });
        }
        dst.zero(0, size);
        self.encode_fields(dst, wire, self.layout.byte_order())?;
        Ok(size)
    }

    /// Fills every slot from wire bytes under the declared byte order.
    ///
    /// The input must be exactly the packed size. On error the record
    /// keeps its previous values.
    ///
    /// # Errors
    /// Returns [`PackError::SizeMismatch`] when `src` is not exactly
    /// the packed size.
    pub fn unpack(&mut self, src: &[u8]) -> Result<(), PackError> {
        let order = self.layout.byte_order();
        let wire = self.layout.wire();
        check_size(wire.size(), src.len())?;
        let values = decode_fields(&self.layout, wire, src, order);
        self.values = values;
        Ok(())
    }

    /// Fills every slot from wire bytes under an arbitrary byte order.
    ///
    /// # Errors
    /// Same as [`Record::unpack`], with the size taken under `order`.
    pub fn unpack_with_order(&mut self, src: &[u8], order: ByteOrder) -> Result<(), PackError> {
        let wire = self.layout.wire_format(order);
        check_size(wire.size(), src.len())?;
        self.values = decode_fields(&self.layout, &wire, src, order);
        Ok(())
    }

    fn position_of(&self, name: &str) -> Result<usize, SchemaError> {
        self.layout
            .position(name)
            .ok_or_else(|| SchemaError::unknown_field(name))
    }

    fn encode_fields(
        &self,
        dst: &mut [u8],
        wire: &WireFormat,
        order: ByteOrder,
    ) -> Result<(), PackError> {
        for ((field, slot), &offset) in self
            .layout
            .fields()
            .iter()
            .zip(&self.values)
            .zip(wire.offsets())
        {
            let value = slot.as_ref().ok_or_else(|| PackError::UnsetField {
                field: field.name().to_string(),
            })?;
            codec::encode_value(
                dst,
                offset,
                field.name(),
                field.primitive(),
                field.encoded_length(),
                order,
                value,
            )?;
        }
        Ok(())
    }
}

fn check_size(expected: usize, actual: usize) -> Result<(), PackError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PackError::SizeMismatch { expected, actual })
    }
}

fn decode_fields(
    layout: &Layout,
    wire: &WireFormat,
    src: &[u8],
    order: ByteOrder,
) -> Vec<Option<Value>> {
    layout
        .fields()
        .iter()
        .zip(wire.offsets())
        .map(|(field, &offset)| {
            Some(codec::decode_value(
                src,
                offset,
                field.primitive(),
                field.encoded_length(),
                order,
            ))
        })
        .collect()
}
