//! Ophis Runtime Bridge - Core Library
//!
//! Public API surface for the ORB core: the tagged value scheme, the
//! shared linear memory, and the host import surface (`print`, `equal`,
//! `error`) given to an externally compiled guest program.

pub mod error;
pub mod config;
pub mod value;
pub mod memory;
pub mod heap;
pub mod render;
pub mod equal;
pub mod fault;
pub mod bridge;

// Re-export commonly used types
pub use error::{OrbError, OrbResult};
pub use config::OrbConfig;
pub use value::{TaggedValue, ValueKind, FALSE, NIL, TRUE};
pub use memory::{LinearMemory, MemoryView, PAGE_SIZE, WORD_SIZE};
pub use heap::HeapTuple;
pub use fault::FaultCode;
pub use bridge::{Bridge, OutputSink};
