//! # FerroPack Schema
//!
//! Field descriptors and layout compilation for FerroPack records.
//!
//! This crate provides:
//! - [`FieldSpec`] descriptors, one typed constructor per wire type
//! - [`LayoutBuilder`] for declaring fields in order
//! - [`Layout`], the compiled, shareable result records bind to
//! - Error types for declaration and field lookup

pub mod error;
pub mod field;
pub mod layout;

pub use error::SchemaError;
pub use field::FieldSpec;
pub use layout::{CompiledField, Layout, LayoutBuilder, WireFormat};
