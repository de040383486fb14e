//! # FerroPack Core
//!
//! Core types and the value codec for FerroPack record packing.
//!
//! This crate provides:
//! - Primitive wire types and byte-order modes
//! - The dynamically typed [`Value`] records hold between packing
//! - Buffer traits for byte-order-qualified read/write access
//! - The scalar codec converting one value to or from wire bytes
//! - Error types for pack and unpack operations

pub mod buffer;
pub mod codec;
pub mod error;
pub mod types;
pub mod value;

pub use buffer::{ReadBuffer, WriteBuffer};
pub use codec::{decode_value, encode_value};
pub use error::{PackError, Result};
pub use types::{ByteOrder, Endianness, PrimitiveType};
pub use value::Value;
