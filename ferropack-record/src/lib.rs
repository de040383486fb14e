//! # FerroPack Record
//!
//! Record instances and stream I/O for FerroPack.
//!
//! This crate provides:
//! - [`Record`], a value holder bound to a compiled layout, with
//!   pack and unpack under any byte order
//! - [`RecordStream`], whole-record reads and writes over any
//!   `Read`/`Write` stream
//! - [`StreamError`] combining I/O and packing failures

pub mod error;
pub mod record;
pub mod stream;

pub use error::StreamError;
pub use record::Record;
pub use stream::RecordStream;
