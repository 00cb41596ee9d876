//! ORB Error Types
//!
//! Defines all host-side error conditions produced by the Ophis Runtime Bridge.
//! Errors are deterministic and scoped strictly to runtime concerns.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrbError {
    // Memory errors
    #[error("word access out of bounds: word index {0}")]
    AddressOutOfBounds(usize),

    #[error("memory grow to {requested} pages exceeds maximum of {max}")]
    MemoryLimit { requested: usize, max: usize },

    // Value encoding errors
    #[error("number {0} cannot be encoded without overflow")]
    NumberOverflow(i64),

    // Fatal guest fault reported through the host import surface.
    // The diagnostic has already been written to the output sink.
    #[error("{diagnostic}")]
    GuestFault { code: u64, diagnostic: String },
}

pub type OrbResult<T> = Result<T, OrbError>;
