//! ORB Configuration
//!
//! Defines memory limits for a single run of a guest program.
//! Configuration specifies constraints only; enforcement is handled by
//! [`LinearMemory`](crate::memory::LinearMemory).

use serde::{Deserialize, Serialize};

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbConfig {
    /// Pages allocated when memory is created
    pub initial_pages: usize,

    /// Hard ceiling on memory growth, in pages
    pub max_pages: usize,
}

impl Default for OrbConfig {
    fn default() -> Self {
        OrbConfig {
            initial_pages: 1,
            max_pages: 200,
        }
    }
}

impl OrbConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
