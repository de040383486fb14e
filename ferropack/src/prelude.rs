//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use ferropack::prelude::*;
//! ```

// Core types
pub use ferropack_core::buffer::{ReadBuffer, WriteBuffer};
pub use ferropack_core::error::{PackError, Result as PackResult};
pub use ferropack_core::types::{ByteOrder, Endianness, PrimitiveType};
pub use ferropack_core::value::Value;

// Schema types
pub use ferropack_schema::{CompiledField, FieldSpec, Layout, LayoutBuilder, SchemaError};

// Record types
pub use ferropack_record::{Record, RecordStream, StreamError};
