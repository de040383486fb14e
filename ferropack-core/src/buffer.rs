//! Buffer traits for byte-order-qualified primitive access.
//!
//! This module provides:
//! - [`ReadBuffer`] trait for read-only buffer access
//! - [`WriteBuffer`] trait for read-write buffer access
//!
//! Multi-byte accessors take a [`ByteOrder`] so the same buffer can be
//! decoded or encoded under any of the supported orders. Offsets are
//! absolute; callers are expected to have sized the buffer beforehand,
//! so out-of-range access panics rather than returning an error.

use crate::types::{ByteOrder, Endianness};

/// Trait for read-only buffer access with fixed-offset primitive reads.
pub trait ReadBuffer {
    /// Returns the buffer as a byte slice.
    fn as_slice(&self) -> &[u8];

    /// Returns the length of the buffer in bytes.
    fn len(&self) -> usize;

    /// Returns true if the buffer is empty.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads a u8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u8(&self, offset: usize) -> u8 {
        self.as_slice()[offset]
    }

    /// Reads an i8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_i8(&self, offset: usize) -> i8 {
        self.as_slice()[offset] as i8
    }

    /// Reads a u16 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_u16(&self, offset: usize, order: ByteOrder) -> u16 {
        let bytes = &self.as_slice()[offset..offset + 2];
        let bytes = [bytes[0], bytes[1]];
        match order.endianness() {
            Endianness::Little => u16::from_le_bytes(bytes),
            Endianness::Big => u16::from_be_bytes(bytes),
        }
    }

    /// Reads an i16 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_i16(&self, offset: usize, order: ByteOrder) -> i16 {
        self.get_u16(offset, order) as i16
    }

    /// Reads a u32 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_u32(&self, offset: usize, order: ByteOrder) -> u32 {
        let bytes = &self.as_slice()[offset..offset + 4];
        let bytes = [bytes[0], bytes[1], bytes[2], bytes[3]];
        match order.endianness() {
            Endianness::Little => u32::from_le_bytes(bytes),
            Endianness::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Reads an i32 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_i32(&self, offset: usize, order: ByteOrder) -> i32 {
        self.get_u32(offset, order) as i32
    }

    /// Reads a u64 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_u64(&self, offset: usize, order: ByteOrder) -> u64 {
        let bytes: [u8; 8] = self.as_slice()[offset..offset + 8].try_into().unwrap();
        match order.endianness() {
            Endianness::Little => u64::from_le_bytes(bytes),
            Endianness::Big => u64::from_be_bytes(bytes),
        }
    }

    /// Reads an i64 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_i64(&self, offset: usize, order: ByteOrder) -> i64 {
        self.get_u64(offset, order) as i64
    }

    /// Reads an f32 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_f32(&self, offset: usize, order: ByteOrder) -> f32 {
        f32::from_bits(self.get_u32(offset, order))
    }

    /// Reads an f64 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    /// * `order` - Byte order to decode with
    #[inline(always)]
    fn get_f64(&self, offset: usize, order: ByteOrder) -> f64 {
        f64::from_bits(self.get_u64(offset, order))
    }

    /// Returns a slice of bytes at the given offset and length.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to start from
    /// * `len` - Number of bytes to read
    #[inline(always)]
    fn get_bytes(&self, offset: usize, len: usize) -> &[u8] {
        &self.as_slice()[offset..offset + len]
    }
}

/// Trait for read-write buffer access with fixed-offset primitive writes.
pub trait WriteBuffer: ReadBuffer {
    /// Returns the buffer as a mutable byte slice.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Writes a u8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_u8(&mut self, offset: usize, value: u8) {
        self.as_mut_slice()[offset] = value;
    }

    /// Writes an i8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_i8(&mut self, offset: usize, value: i8) {
        self.as_mut_slice()[offset] = value as u8;
    }

    /// Writes a u16 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_u16(&mut self, offset: usize, value: u16, order: ByteOrder) {
        let bytes = match order.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.as_mut_slice()[offset..offset + 2].copy_from_slice(&bytes);
    }

    /// Writes an i16 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_i16(&mut self, offset: usize, value: i16, order: ByteOrder) {
        self.put_u16(offset, value as u16, order);
    }

    /// Writes a u32 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_u32(&mut self, offset: usize, value: u32, order: ByteOrder) {
        let bytes = match order.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.as_mut_slice()[offset..offset + 4].copy_from_slice(&bytes);
    }

    /// Writes an i32 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_i32(&mut self, offset: usize, value: i32, order: ByteOrder) {
        self.put_u32(offset, value as u32, order);
    }

    /// Writes a u64 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_u64(&mut self, offset: usize, value: u64, order: ByteOrder) {
        let bytes = match order.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.as_mut_slice()[offset..offset + 8].copy_from_slice(&bytes);
    }

    /// Writes an i64 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_i64(&mut self, offset: usize, value: i64, order: ByteOrder) {
        self.put_u64(offset, value as u64, order);
    }

    /// Writes an f32 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_f32(&mut self, offset: usize, value: f32, order: ByteOrder) {
        self.put_u32(offset, value.to_bits(), order);
    }

    /// Writes an f64 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    /// * `order` - Byte order to encode with
    #[inline(always)]
    fn put_f64(&mut self, offset: usize, value: f64, order: ByteOrder) {
        self.put_u64(offset, value.to_bits(), order);
    }

    /// Writes a byte slice at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `src` - Source bytes to copy
    #[inline(always)]
    fn put_bytes(&mut self, offset: usize, src: &[u8]) {
        self.as_mut_slice()[offset..offset + src.len()].copy_from_slice(src);
    }

    /// Fills a range with zeros.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to start from
    /// * `len` - Number of bytes to zero
    #[inline]
    fn zero(&mut self, offset: usize, len: usize) {
        self.as_mut_slice()[offset..offset + len].fill(0);
    }
}

/// Implement ReadBuffer for byte slices.
impl ReadBuffer for [u8] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

/// Implement WriteBuffer for byte slices.
impl WriteBuffer for [u8] {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

/// Implement ReadBuffer for `Vec<u8>`.
impl ReadBuffer for Vec<u8> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Implement WriteBuffer for `Vec<u8>`.
impl WriteBuffer for Vec<u8> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}
