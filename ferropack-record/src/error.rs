//! Error type for record stream I/O.

use ferropack_core::PackError;
use thiserror::Error;

/// Error raised by stream reads and writes.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be packed or unpacked.
    #[error(transparent)]
    Pack(#[from] PackError),
}
