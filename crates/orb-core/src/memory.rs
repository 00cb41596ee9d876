//! Linear Memory
//!
//! The page-addressable byte buffer shared with the executing program.
//! The guest owns all writes; the bridge only ever reads through a
//! [`MemoryView`], re-acquired per call because the buffer may grow
//! between host calls.

use crate::config::OrbConfig;
use crate::error::{OrbError, OrbResult};
use crate::value::TaggedValue;

/// Page size in bytes
pub const PAGE_SIZE: usize = 64 * 1024;

/// Word size in bytes; the heap is organized as unsigned 64-bit words
pub const WORD_SIZE: usize = 8;

/// Growable linear memory with a hard page ceiling
#[derive(Debug)]
pub struct LinearMemory {
    bytes: Vec<u8>,
    max_pages: usize,
}

impl LinearMemory {
    /// Create memory with the configured initial size, zero-filled
    pub fn new(config: &OrbConfig) -> OrbResult<Self> {
        if config.initial_pages > config.max_pages {
            return Err(OrbError::MemoryLimit {
                requested: config.initial_pages,
                max: config.max_pages,
            });
        }
        Ok(LinearMemory {
            bytes: vec![0; config.initial_pages * PAGE_SIZE],
            max_pages: config.max_pages,
        })
    }

    /// Current size in pages
    pub fn pages(&self) -> usize {
        self.bytes.len() / PAGE_SIZE
    }

    /// Current size in words
    pub fn words(&self) -> usize {
        self.bytes.len() / WORD_SIZE
    }

    /// Grow by `additional` pages, returning the previous page count.
    /// Exceeding the ceiling fails without changing the buffer; the guest
    /// is expected to report that as an out-of-memory fault.
    pub fn grow(&mut self, additional: usize) -> OrbResult<usize> {
        let current = self.pages();
        let requested = current + additional;
        if requested > self.max_pages {
            return Err(OrbError::MemoryLimit {
                requested,
                max: self.max_pages,
            });
        }
        self.bytes.resize(requested * PAGE_SIZE, 0);
        Ok(current)
    }

    /// Producer-side write of one word
    pub fn store_word(&mut self, index: usize, word: u64) -> OrbResult<()> {
        let start = index
            .checked_mul(WORD_SIZE)
            .ok_or(OrbError::AddressOutOfBounds(index))?;
        let end = start
            .checked_add(WORD_SIZE)
            .ok_or(OrbError::AddressOutOfBounds(index))?;
        let slot = self
            .bytes
            .get_mut(start..end)
            .ok_or(OrbError::AddressOutOfBounds(index))?;
        slot.copy_from_slice(&word.to_le_bytes());
        Ok(())
    }

    /// Read-only word view over the current buffer.
    /// Never cache this across host calls; the buffer may have grown.
    pub fn view(&self) -> MemoryView<'_> {
        MemoryView { bytes: &self.bytes }
    }
}

/// Bounds-checked, read-only view of linear memory as 64-bit words
#[derive(Debug, Clone, Copy)]
pub struct MemoryView<'a> {
    bytes: &'a [u8],
}

impl<'a> MemoryView<'a> {
    /// Read the word at `index` (little-endian, matching the guest's
    /// in-memory layout)
    pub fn word(&self, index: usize) -> OrbResult<u64> {
        let start = index
            .checked_mul(WORD_SIZE)
            .ok_or(OrbError::AddressOutOfBounds(index))?;
        let end = start
            .checked_add(WORD_SIZE)
            .ok_or(OrbError::AddressOutOfBounds(index))?;
        let bytes = self
            .bytes
            .get(start..end)
            .ok_or(OrbError::AddressOutOfBounds(index))?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Read the word at `index` as a tagged value
    pub fn value(&self, index: usize) -> OrbResult<TaggedValue> {
        self.word(index).map(TaggedValue)
    }

    /// View size in words
    pub fn words(&self) -> usize {
        self.bytes.len() / WORD_SIZE
    }
}
