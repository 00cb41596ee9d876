//! Structural Equality Engine
//!
//! Implements the guest language's equality semantics. The result is
//! itself a tagged boolean, not a native one: equality is a first-class
//! runtime operation with the same representation as any other value.
//!
//! Assumes acyclic tuple graphs, like the heap reader.

use tracing::debug;

use crate::error::OrbResult;
use crate::heap::HeapTuple;
use crate::memory::MemoryView;
use crate::value::{TaggedValue, ValueKind, FALSE, NIL, TRUE};

/// Compare two values, returning the encoded `true`/`false` singletons.
///
/// A left-hand value with an unrecognized encoding yields `NIL` as a
/// sentinel rather than a boolean. When such a value sits inside a
/// nested tuple, the sentinel propagates outward through the recursion
/// instead of being normalized to `false` (the escape hatch for
/// malformed heaps).
pub fn equal(view: MemoryView<'_>, lhs: TaggedValue, rhs: TaggedValue) -> OrbResult<TaggedValue> {
    let lhs_addr = match lhs.classify() {
        ValueKind::True => return Ok(TaggedValue::from_bool(rhs == TRUE)),
        ValueKind::False => return Ok(TaggedValue::from_bool(rhs == FALSE)),
        ValueKind::Nil => return Ok(TaggedValue::from_bool(rhs == NIL)),
        // numbers compare by raw encoding, which is injective
        ValueKind::Number(_) => return Ok(TaggedValue::from_bool(rhs == lhs)),
        // closures fall back to reference identity
        ValueKind::ClosureRef => return Ok(TaggedValue::from_bool(rhs == lhs)),
        // not a tuple either, meaning something went very wrong
        ValueKind::Unknown(_) => return Ok(NIL),
        ValueKind::TupleRef(addr) => addr,
    };

    let rhs_addr = match rhs.classify() {
        ValueKind::TupleRef(addr) => addr,
        _ => return Ok(FALSE),
    };

    let lhs_tuple = HeapTuple::read(view, lhs_addr)?;
    let rhs_tuple = HeapTuple::read(view, rhs_addr)?;
    debug!(
        lhs_addr,
        lhs_len = lhs_tuple.len(),
        rhs_addr,
        rhs_len = rhs_tuple.len(),
        "tuple comparison"
    );

    // tuples of unequal length cannot be equal
    if lhs_tuple.len() != rhs_tuple.len() {
        return Ok(FALSE);
    }

    for i in 0..lhs_tuple.len() {
        let ans = equal(view, lhs_tuple.elem(view, i)?, rhs_tuple.elem(view, i)?)?;
        if ans != TRUE {
            return Ok(ans);
        }
    }

    Ok(TRUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbConfig;
    use crate::memory::LinearMemory;

    fn memory() -> LinearMemory {
        LinearMemory::new(&OrbConfig::default()).unwrap()
    }

    fn write_tuple(mem: &mut LinearMemory, addr: usize, elems: &[TaggedValue]) -> TaggedValue {
        mem.store_word(addr, elems.len() as u64).unwrap();
        for (i, e) in elems.iter().enumerate() {
            mem.store_word(addr + 1 + i, e.raw()).unwrap();
        }
        TaggedValue::tuple_ref(addr)
    }

    fn int(n: i64) -> TaggedValue {
        TaggedValue::from_int(n).unwrap()
    }

    #[test]
    fn singletons_reflexive_and_distinct() {
        let mem = memory();
        for v in [TRUE, FALSE, NIL] {
            assert_eq!(equal(mem.view(), v, v).unwrap(), TRUE);
        }
        assert_eq!(equal(mem.view(), TRUE, FALSE).unwrap(), FALSE);
        assert_eq!(equal(mem.view(), FALSE, NIL).unwrap(), FALSE);
        assert_eq!(equal(mem.view(), NIL, TRUE).unwrap(), FALSE);
    }

    #[test]
    fn numbers_compare_by_value() {
        let mem = memory();
        assert_eq!(equal(mem.view(), int(7), int(7)).unwrap(), TRUE);
        assert_eq!(equal(mem.view(), int(7), int(-7)).unwrap(), FALSE);
        assert_eq!(equal(mem.view(), int(0), NIL).unwrap(), FALSE);
    }

    #[test]
    fn closures_compare_by_identity() {
        let mem = memory();
        let a = TaggedValue::closure_ref(1);
        let b = TaggedValue::closure_ref(2);
        assert_eq!(equal(mem.view(), a, a).unwrap(), TRUE);
        assert_eq!(equal(mem.view(), a, b).unwrap(), FALSE);
    }

    #[test]
    fn equal_tuples() {
        let mut mem = memory();
        let a = write_tuple(&mut mem, 0, &[int(1), int(2), int(3)]);
        let b = write_tuple(&mut mem, 16, &[int(1), int(2), int(3)]);
        assert_eq!(equal(mem.view(), a, b).unwrap(), TRUE);
        assert_eq!(equal(mem.view(), b, a).unwrap(), TRUE);
    }

    #[test]
    fn nested_tuples() {
        let mut mem = memory();
        let a_inner = write_tuple(&mut mem, 0, &[int(2), int(3)]);
        let a = write_tuple(&mut mem, 8, &[int(1), a_inner]);
        let b_inner = write_tuple(&mut mem, 16, &[int(2), int(3)]);
        let b = write_tuple(&mut mem, 24, &[int(1), b_inner]);
        assert_eq!(equal(mem.view(), a, b).unwrap(), TRUE);
    }

    #[test]
    fn unequal_lengths_never_equal() {
        let mut mem = memory();
        let a = write_tuple(&mut mem, 0, &[int(1), int(2)]);
        let b = write_tuple(&mut mem, 8, &[int(1), int(2), int(3)]);
        assert_eq!(equal(mem.view(), a, b).unwrap(), FALSE);
        assert_eq!(equal(mem.view(), b, a).unwrap(), FALSE);
    }

    #[test]
    fn element_mismatch() {
        let mut mem = memory();
        let a = write_tuple(&mut mem, 0, &[int(1), int(2)]);
        let b = write_tuple(&mut mem, 8, &[int(1), int(9)]);
        assert_eq!(equal(mem.view(), a, b).unwrap(), FALSE);
    }

    #[test]
    fn tuple_against_non_tuple() {
        let mut mem = memory();
        let a = write_tuple(&mut mem, 0, &[int(1)]);
        assert_eq!(equal(mem.view(), a, int(1)).unwrap(), FALSE);
        assert_eq!(equal(mem.view(), int(1), a).unwrap(), FALSE);
    }

    // The sentinel is deliberately asymmetric: an unrecognized left-hand
    // side yields NIL, while the mirrored comparison classifies the
    // recognized side first and yields FALSE.
    #[test]
    fn unknown_lhs_yields_sentinel() {
        let mem = memory();
        let junk = TaggedValue(0b1011);
        assert_eq!(equal(mem.view(), junk, TRUE).unwrap(), NIL);
        assert_eq!(equal(mem.view(), TRUE, junk).unwrap(), FALSE);
    }

    #[test]
    fn nested_sentinel_propagates() {
        let mut mem = memory();
        let junk = TaggedValue(0b1011);
        let a = write_tuple(&mut mem, 0, &[junk]);
        let b = write_tuple(&mut mem, 8, &[junk]);
        // the sub-comparison returns the sentinel, and it propagates
        // outward instead of collapsing to false
        assert_eq!(equal(mem.view(), a, b).unwrap(), NIL);
    }
}
