//! Heap Tuple Reader
//!
//! Resolves tuple references against the shared linear memory. A tuple at
//! word index `i` stores its element count at `i` and the elements at
//! `i+1 ..= i+n`, each itself a tagged value. Elements are read lazily;
//! nested references are only followed when a consumer recurses.
//!
//! The heap is assumed acyclic (it is produced only by well-behaved
//! compiled code); there is no cycle detection here or in the consumers.

use tracing::debug;

use crate::error::OrbResult;
use crate::memory::MemoryView;
use crate::value::TaggedValue;

/// A resolved tuple header
#[derive(Debug, Clone, Copy)]
pub struct HeapTuple {
    addr: usize,
    len: u64,
}

impl HeapTuple {
    /// Read the tuple header at `addr` (a word index)
    pub fn read(view: MemoryView<'_>, addr: usize) -> OrbResult<HeapTuple> {
        let len = view.word(addr)?;
        debug!(addr, len, "tuple header");
        Ok(HeapTuple { addr, len })
    }

    /// Element count
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Word index of the tuple header
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Read element `index` (zero-based)
    pub fn elem(&self, view: MemoryView<'_>, index: u64) -> OrbResult<TaggedValue> {
        view.value(self.addr + 1 + index as usize)
    }
}
