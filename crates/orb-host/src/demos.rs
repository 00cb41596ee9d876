//! Demo guest programs
//!
//! Hand-written stand-ins for compiled guest code, exercising the bridge
//! the way real programs do: building heap tuples, printing, comparing
//! structures and reporting faults. These back the CLI and the
//! integration tests.

use orb_core::{
    Bridge, FaultCode, LinearMemory, OrbError, OrbResult, TaggedValue, NIL,
};

use crate::GuestProgram;

fn int(n: i64) -> OrbResult<TaggedValue> {
    TaggedValue::from_int(n).ok_or(OrbError::NumberOverflow(n))
}

/// Bump allocator over the guest-owned end of memory, growing by whole
/// pages when a tuple would not fit
struct BumpHeap {
    next: usize,
}

impl BumpHeap {
    fn new() -> Self {
        BumpHeap { next: 0 }
    }

    fn tuple(&mut self, mem: &mut LinearMemory, elems: &[TaggedValue]) -> OrbResult<TaggedValue> {
        let needed = elems.len() + 1;
        while self.next + needed > mem.words() {
            mem.grow(1)?;
        }
        let addr = self.next;
        mem.store_word(addr, elems.len() as u64)?;
        for (i, e) in elems.iter().enumerate() {
            mem.store_word(addr + 1 + i, e.raw())?;
        }
        self.next += needed;
        Ok(TaggedValue::tuple_ref(addr))
    }
}

/// Linked lists as nested pairs: builds `(1, (2, (3, nil)))`, prints it,
/// then prints its reversal
pub struct ListsDemo;

impl GuestProgram for ListsDemo {
    fn run(
        &self,
        memory: &mut LinearMemory,
        host: &mut Bridge<String>,
    ) -> OrbResult<TaggedValue> {
        let mut heap = BumpHeap::new();

        let mut list = NIL;
        for n in [3i64, 2, 1] {
            list = heap.tuple(memory, &[int(n)?, list])?;
        }
        host.print(memory.view(), list)?;

        let mut reversed = NIL;
        for n in [1i64, 2, 3] {
            reversed = heap.tuple(memory, &[int(n)?, reversed])?;
        }
        host.print(memory.view(), reversed)
    }
}

/// Structural equality over tuples: prints the encoded boolean results
pub struct TupleEqDemo;

impl GuestProgram for TupleEqDemo {
    fn run(
        &self,
        memory: &mut LinearMemory,
        host: &mut Bridge<String>,
    ) -> OrbResult<TaggedValue> {
        let mut heap = BumpHeap::new();

        let a = heap.tuple(memory, &[int(1)?, int(2)?, int(3)?])?;
        let b = heap.tuple(memory, &[int(1)?, int(2)?, int(3)?])?;
        let shorter = heap.tuple(memory, &[int(1)?, int(2)?])?;

        let same = host.equal(memory.view(), a, b)?;
        host.print(memory.view(), same)?;

        let different = host.equal(memory.view(), a, shorter)?;
        host.print(memory.view(), different)
    }
}

/// Prints one value, then reports an arithmetic type fault
pub struct FaultDemo;

impl GuestProgram for FaultDemo {
    fn run(
        &self,
        memory: &mut LinearMemory,
        host: &mut Bridge<String>,
    ) -> OrbResult<TaggedValue> {
        host.print(memory.view(), int(42)?)?;
        host.error(
            memory.view(),
            orb_core::TRUE,
            FaultCode::ArithmeticExpectedNumber as u64,
        )
    }
}

/// Grows memory until the ceiling, then reports out-of-memory
pub struct OomDemo;

impl GuestProgram for OomDemo {
    fn run(
        &self,
        memory: &mut LinearMemory,
        host: &mut Bridge<String>,
    ) -> OrbResult<TaggedValue> {
        loop {
            if memory.grow(1).is_err() {
                return host.error(memory.view(), NIL, FaultCode::OutOfMemory as u64);
            }
        }
    }
}
