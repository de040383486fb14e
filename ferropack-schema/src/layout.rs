//! Layout compilation: from field declarations to a wire layout.
//!
//! This module provides:
//! - [`LayoutBuilder`] for declaring fields in order
//! - [`Layout`], the immutable compiled result records bind to
//! - [`CompiledField`], one declared field bound to its name
//! - [`WireFormat`], the offsets and total size under one byte order
//!
//! Field order is declaration order. Re-declaring a name replaces the
//! descriptor but keeps the original slot, so a derived layout can
//! override an inherited field without disturbing the wire positions
//! of its neighbours.

use std::collections::HashMap;
use std::sync::Arc;

use ferropack_core::{ByteOrder, PrimitiveType, Value};

use crate::field::FieldSpec;

/// One compiled field: a descriptor bound to its name.
#[derive(Debug, Clone)]
pub struct CompiledField {
    name: String,
    spec: FieldSpec,
}

impl CompiledField {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wire type of the field.
    #[must_use]
    pub const fn primitive(&self) -> PrimitiveType {
        self.spec.primitive()
    }

    /// Returns the declared length for byte fields.
    #[must_use]
    pub const fn length(&self) -> Option<usize> {
        self.spec.length()
    }

    /// Returns the default value, if one was declared.
    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.spec.default()
    }

    /// Returns the encoded length of the field in bytes.
    #[must_use]
    pub fn encoded_length(&self) -> usize {
        self.spec.encoded_length()
    }

    /// Returns the natural alignment of the field in bytes.
    #[must_use]
    pub fn alignment(&self) -> usize {
        self.spec.alignment()
    }

    /// Returns the underlying descriptor.
    #[must_use]
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }
}

/// Byte offsets and total size of a layout under one byte order.
///
/// Offsets depend on the order: aligned mode pads each field to its
/// natural alignment, every packed mode lays fields back to back.
/// There is no trailing padding in either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireFormat {
    offsets: Vec<usize>,
    size: usize,
}

impl WireFormat {
    fn compute(fields: &[CompiledField], order: ByteOrder) -> Self {
        let mut offsets = Vec::with_capacity(fields.len());
        let mut position = 0usize;
        for field in fields {
            if order.is_aligned() {
                position = position.next_multiple_of(field.alignment());
            }
            offsets.push(position);
            position += field.encoded_length();
        }
        Self {
            offsets,
            size: position,
        }
    }

    /// Returns the byte offset of each field, in declaration order.
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the byte offset of the field at the given position.
    #[must_use]
    pub fn offset(&self, position: usize) -> Option<usize> {
        self.offsets.get(position).copied()
    }

    /// Returns the total packed size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

#[derive(Debug)]
struct LayoutInner {
    fields: Vec<CompiledField>,
    index: HashMap<String, usize>,
    defaults: Vec<Option<Value>>,
    byte_order: ByteOrder,
    wire: WireFormat,
}

/// An immutable compiled record layout.
///
/// Compilation resolves every field to a position and byte offset
/// once; records made from the layout reuse that work. Cloning is
/// cheap and the result can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Layout {
    inner: Arc<LayoutInner>,
}

impl Layout {
    /// Starts a builder for a new layout.
    #[must_use]
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::new()
    }

    /// Starts a builder seeded with this layout's fields and byte
    /// order.
    ///
    /// Declaring an inherited name in the returned builder replaces
    /// the descriptor in place; new names append after the inherited
    /// fields.
    #[must_use]
    pub fn extend(&self) -> LayoutBuilder {
        LayoutBuilder {
            fields: self.inner.fields.clone(),
            index: self.inner.index.clone(),
            byte_order: self.inner.byte_order,
        }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.inner.fields.len()
    }

    /// Returns true if the layout has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Returns the byte order the layout was declared with.
    #[must_use]
    pub fn byte_order(&self) -> ByteOrder {
        self.inner.byte_order
    }

    /// Returns the packed size in bytes under the declared byte order.
    #[must_use]
    pub fn packed_size(&self) -> usize {
        self.inner.wire.size
    }

    /// Returns the position of a field by name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.inner.index.get(name).copied()
    }

    /// Returns a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.position(name).map(|p| &self.inner.fields[p])
    }

    /// Returns a field by position.
    #[must_use]
    pub fn field_at(&self, position: usize) -> Option<&CompiledField> {
        self.inner.fields.get(position)
    }

    /// Returns all fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[CompiledField] {
        &self.inner.fields
    }

    /// Returns the byte offset of a field by name under the declared
    /// byte order.
    #[must_use]
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.position(name).map(|p| self.inner.wire.offsets[p])
    }

    /// Returns the default value of each field, by position.
    #[must_use]
    pub fn defaults(&self) -> &[Option<Value>] {
        &self.inner.defaults
    }

    /// Returns the wire format under the declared byte order.
    #[must_use]
    pub fn wire(&self) -> &WireFormat {
        &self.inner.wire
    }

    /// Returns the wire format under an arbitrary byte order.
    ///
    /// The declared order's format is precomputed; any other order is
    /// computed on demand.
    #[must_use]
    pub fn wire_format(&self, order: ByteOrder) -> WireFormat {
        if order.is_aligned() == self.inner.byte_order.is_aligned() {
            self.inner.wire.clone()
        } else {
            WireFormat::compute(&self.inner.fields, order)
        }
    }
}

/// Builder for record layouts.
///
/// Fields occupy the wire in the order they are declared. The byte
/// order defaults to little-endian when none is set.
#[derive(Debug)]
pub struct LayoutBuilder {
    fields: Vec<CompiledField>,
    index: HashMap<String, usize>,
    byte_order: ByteOrder,
}

impl LayoutBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            index: HashMap::new(),
            byte_order: ByteOrder::default(),
        }
    }

    /// Declares a field.
    ///
    /// A new name appends the field; a name declared before replaces
    /// the earlier descriptor while keeping its slot.
    ///
    /// # Arguments
    /// * `name` - Field name, unique within the layout
    /// * `spec` - Field descriptor
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => {
                self.fields[position] = CompiledField { name, spec };
            }
            None => {
                self.index.insert(name.clone(), self.fields.len());
                self.fields.push(CompiledField { name, spec });
            }
        }
        self
    }

    /// Sets the byte order the layout packs under.
    #[must_use]
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Compiles the declared fields into an immutable layout.
    #[must_use]
    pub fn compile(self) -> Layout {
        let wire = WireFormat::compute(&self.fields, self.byte_order);
        let defaults = self.fields.iter().map(|f| f.default().cloned()).collect();
        Layout {
            inner: Arc::new(LayoutInner {
                fields: self.fields,
                index: self.index,
                defaults,
                byte_order: self.byte_order,
                wire,
            }),
        }
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_layout() -> Layout {
        LayoutBuilder::new()
            .field("id", FieldSpec::uint32().with_default(0u32))
            .field("flag", FieldSpec::uint8().with_default(1u8))
            .field("tag", FieldSpec::bytes(4).unwrap().with_default(b"none"))
            .compile()
    }

    #[test]
    fn test_packed_offsets() {
        let layout = header_layout();
        assert_eq!(layout.field_count(), 3);
        assert_eq!(layout.packed_size(), 9);
        assert_eq!(layout.offset_of("id"), Some(0));
        assert_eq!(layout.offset_of("flag"), Some(4));
        assert_eq!(layout.offset_of("tag"), Some(5));
        assert_eq!(layout.wire().offsets(), &[0, 4, 5]);
    }

    #[test]
    fn test_declaration_order_is_wire_order() {
        let layout = LayoutBuilder::new()
            .field("c", FieldSpec::uint8())
            .field("a", FieldSpec::uint8())
            .field("b", FieldSpec::uint8())
            .compile();
        let names: Vec<&str> = layout.fields().iter().map(CompiledField::name).collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert_eq!(layout.position("c"), Some(0));
        assert_eq!(layout.position("b"), Some(2));
    }

    #[test]
    fn test_aligned_offsets_pad_before_field() {
        let layout = LayoutBuilder::new()
            .field("flag", FieldSpec::uint8())
            .field("count", FieldSpec::uint32())
            .byte_order(ByteOrder::NativeAligned)
            .compile();
        assert_eq!(layout.wire().offsets(), &[0, 4]);
        assert_eq!(layout.packed_size(), 8);
    }

    #[test]
    fn test_aligned_has_no_trailing_padding() {
        let layout = LayoutBuilder::new()
            .field("count", FieldSpec::uint32())
            .field("flag", FieldSpec::uint8())
            .byte_order(ByteOrder::NativeAligned)
            .compile();
        assert_eq!(layout.wire().offsets(), &[0, 4]);
        assert_eq!(layout.packed_size(), 5);
    }

    #[test]
    fn test_aligned_bytes_align_to_one() {
        let layout = LayoutBuilder::new()
            .field("tag", FieldSpec::bytes(3).unwrap())
            .field("price", FieldSpec::float64())
            .field("note", FieldSpec::bytes(2).unwrap())
            .byte_order(ByteOrder::NativeAligned)
            .compile();
        assert_eq!(layout.wire().offsets(), &[0, 8, 16]);
        assert_eq!(layout.packed_size(), 18);
    }

    #[test]
    fn test_packed_modes_never_pad() {
        for order in [
            ByteOrder::Native,
            ByteOrder::LittleEndian,
            ByteOrder::BigEndian,
            ByteOrder::Network,
        ] {
            let layout = LayoutBuilder::new()
                .field("flag", FieldSpec::uint8())
                .field("count", FieldSpec::uint64())
                .byte_order(order)
                .compile();
            assert_eq!(layout.wire().offsets(), &[0, 1], "{order}");
            assert_eq!(layout.packed_size(), 9, "{order}");
        }
    }

    #[test]
    fn test_default_byte_order_is_little_endian() {
        let layout = LayoutBuilder::new().compile();
        assert_eq!(layout.byte_order(), ByteOrder::LittleEndian);
        assert!(layout.is_empty());
        assert_eq!(layout.packed_size(), 0);
    }

    #[test]
    fn test_override_keeps_slot() {
        let layout = LayoutBuilder::new()
            .field("a", FieldSpec::uint8())
            .field("b", FieldSpec::uint8())
            .field("a", FieldSpec::uint32())
            .field("c", FieldSpec::uint8())
            .compile();
        assert_eq!(layout.position("a"), Some(0));
        assert_eq!(layout.position("b"), Some(1));
        assert_eq!(layout.position("c"), Some(2));
        assert_eq!(
            layout.field("a").map(CompiledField::primitive),
            Some(PrimitiveType::Uint32)
        );
        assert_eq!(layout.packed_size(), 6);
    }

    #[test]
    fn test_extend_appends_and_overrides() {
        let base = header_layout();
        let derived = base
            .extend()
            .field("flag", FieldSpec::uint16().with_default(7u16))
            .field("extra", FieldSpec::int64())
            .compile();

        // Base is untouched.
        assert_eq!(base.field_count(), 3);
        assert_eq!(
            base.field("flag").map(CompiledField::primitive),
            Some(PrimitiveType::Uint8)
        );

        // Derived keeps the base order, widens the override in place,
        // and appends the new field.
        assert_eq!(derived.field_count(), 4);
        assert_eq!(derived.position("flag"), Some(1));
        assert_eq!(derived.position("extra"), Some(3));
        assert_eq!(
            derived.field("flag").map(CompiledField::primitive),
            Some(PrimitiveType::Uint16)
        );
        assert_eq!(derived.defaults()[1], Some(Value::Uint(7)));
        assert_eq!(derived.packed_size(), 4 + 2 + 4 + 8);
    }

    #[test]
    fn test_extend_keeps_byte_order() {
        let base = LayoutBuilder::new()
            .field("x", FieldSpec::uint16())
            .byte_order(ByteOrder::BigEndian)
            .compile();
        let derived = base.extend().field("y", FieldSpec::uint16()).compile();
        assert_eq!(derived.byte_order(), ByteOrder::BigEndian);
    }

    #[test]
    fn test_defaults_by_position() {
        let layout = header_layout();
        assert_eq!(layout.defaults()[0], Some(Value::Uint(0)));
        assert_eq!(layout.defaults()[1], Some(Value::Uint(1)));
        assert_eq!(layout.defaults()[2], Some(Value::Bytes(b"none".to_vec())));

        let bare = LayoutBuilder::new().field("x", FieldSpec::int32()).compile();
        assert_eq!(bare.defaults(), &[None]);
    }

    #[test]
    fn test_lookup_misses() {
        let layout = header_layout();
        assert_eq!(layout.position("missing"), None);
        assert!(layout.field("missing").is_none());
        assert!(layout.field_at(3).is_none());
        assert_eq!(layout.offset_of("missing"), None);
    }

    #[test]
    fn test_wire_format_for_other_order() {
        let layout = LayoutBuilder::new()
            .field("flag", FieldSpec::uint8())
            .field("count", FieldSpec::uint32())
            .compile();
        assert_eq!(layout.packed_size(), 5);

        let aligned = layout.wire_format(ByteOrder::NativeAligned);
        assert_eq!(aligned.offsets(), &[0, 4]);
        assert_eq!(aligned.size(), 8);

        // Endianness alone never moves offsets.
        let big = layout.wire_format(ByteOrder::BigEndian);
        assert_eq!(big, layout.wire().clone());
    }

    #[test]
    fn test_layout_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Layout>();
    }

    #[test]
    fn test_clone_shares_compiled_state() {
        let layout = header_layout();
        let clone = layout.clone();
        assert_eq!(clone.packed_size(), layout.packed_size());
        assert!(std::ptr::eq(
            layout.fields().as_ptr(),
            clone.fields().as_ptr()
        ));
    }
}
