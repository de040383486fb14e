//! # FerroPack
//!
//! Declarative fixed-size binary records for Rust.
//!
//! FerroPack compiles a list of named, typed fields into an immutable
//! layout, binds records to it, and packs them to deterministic wire
//! bytes under a choice of byte orders.
//!
//! ## Features
//!
//! - **Declarative layouts** - Fields declared in order, with optional
//!   per-field defaults
//! - **Five byte orders** - Aligned native through network order, with
//!   little-endian as the default
//! - **Deferred validation** - Records accept any value at assignment;
//!   type, range, and length are checked once, when packing
//! - **Whole-record stream I/O** - Journals of fixed-size records read
//!   back with a plain `while` loop
//!
//! ## Quick Start
//!
//! ```
//! use ferropack::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let point = LayoutBuilder::new()
//!     .field("x", FieldSpec::int32())
//!     .field("y", FieldSpec::int32())
//!     .compile();
//!
//! let mut record = Record::with_values(&point, [("x", 3), ("y", -4)])?;
//! let bytes = record.pack()?;
//! assert_eq!(bytes.len(), 8);
//!
//! record.unpack(&bytes)?;
//! assert_eq!(record.get("x")?, Some(&Value::Int(3)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Primitive types, byte orders, values, and the codec
//! - [`schema`] - Field descriptors and layout compilation
//! - [`record`] - Record instances and stream I/O

pub mod prelude;

/// Primitive types, byte orders, values, and the codec.
pub mod core {
    pub use ferropack_core::*;
}

/// Field descriptors and layout compilation.
pub mod schema {
    pub use ferropack_schema::*;
}

/// Record instances and stream I/O.
pub mod record {
    pub use ferropack_record::*;
}

// Re-export commonly used items at the crate root
pub use ferropack_core::{
    buffer::{ReadBuffer, WriteBuffer},
    error::PackError,
    types::{ByteOrder, Endianness, PrimitiveType},
    value::Value,
};

pub use ferropack_schema::{CompiledField, FieldSpec, Layout, LayoutBuilder, SchemaError};

pub use ferropack_record::{Record, RecordStream, StreamError};
