//! Value Printer
//!
//! Renders any tagged value to text, recursing through heap tuples.
//! Rendering is a pure function of the value and the memory view; the
//! caller decides where the text goes.

use crate::error::OrbResult;
use crate::heap::HeapTuple;
use crate::memory::MemoryView;
use crate::value::{TaggedValue, ValueKind};

/// Render `value` to its textual form.
///
/// Total over every encoding, including unrecognized ones, which render
/// as a diagnostic placeholder. Non-terminating only if the heap contains
/// a cycle, which callers are expected not to produce.
pub fn render(view: MemoryView<'_>, value: TaggedValue) -> OrbResult<String> {
    let mut out = String::new();
    render_into(view, value, &mut out)?;
    Ok(out)
}

fn render_into(view: MemoryView<'_>, value: TaggedValue, out: &mut String) -> OrbResult<()> {
    match value.classify() {
        ValueKind::True => out.push_str("true"),
        ValueKind::False => out.push_str("false"),
        ValueKind::Nil => out.push_str("nil"),
        ValueKind::ClosureRef => out.push_str("<function>"),
        ValueKind::Number(n) => out.push_str(&n.to_string()),
        ValueKind::TupleRef(addr) => {
            let tuple = HeapTuple::read(view, addr)?;
            out.push('(');
            for i in 0..tuple.len() {
                if i > 0 {
                    out.push_str(", ");
                }
                let elem = tuple.elem(view, i)?;
                render_into(view, elem, out)?;
            }
            out.push(')');
        }
        ValueKind::Unknown(raw) => {
            // raw encodings come from an i64 guest value; print them signed
            out.push_str(&format!("unknown value ({})", raw as i64));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbConfig;
    use crate::memory::LinearMemory;
    use crate::value::{FALSE, NIL, TRUE};

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
    fn literals() {
        let mem = memory();
        assert_eq!(render(mem.view(), TRUE).unwrap(), "true");
        assert_eq!(render(mem.view(), FALSE).unwrap(), "false");
        assert_eq!(render(mem.view(), NIL).unwrap(), "nil");
    }

    #[test]
    fn numbers() {
        let mem = memory();
        assert_eq!(render(mem.view(), int(0)).unwrap(), "0");
        assert_eq!(render(mem.view(), int(42)).unwrap(), "42");
        assert_eq!(render(mem.view(), int(-7)).unwrap(), "-7");
    }

    #[test]
    fn closures_are_opaque() {
        let mem = memory();
        let v = TaggedValue::closure_ref(9);
        assert_eq!(render(mem.view(), v).unwrap(), "<function>");
    }

    #[test]
    fn flat_tuple() {
        let mut mem = memory();
        let tup = write_tuple(&mut mem, 0, &[int(1), int(2), int(3)]);
        assert_eq!(render(mem.view(), tup).unwrap(), "(1, 2, 3)");
    }

    #[test]
    fn nested_tuple() {
        let mut mem = memory();
        let inner = write_tuple(&mut mem, 0, &[int(2), int(3)]);
        let outer = write_tuple(&mut mem, 8, &[int(1), inner]);
        assert_eq!(render(mem.view(), outer).unwrap(), "(1, (2, 3))");
    }

    #[test]
    fn one_element_tuple_keeps_brackets() {
        let mut mem = memory();
        let tup = write_tuple(&mut mem, 0, &[int(5)]);
        assert_eq!(render(mem.view(), tup).unwrap(), "(5)");
    }

    #[test]
    fn empty_tuple() {
        let mut mem = memory();
        let tup = write_tuple(&mut mem, 0, &[]);
        assert_eq!(render(mem.view(), tup).unwrap(), "()");
    }

    #[test]
    fn unknown_encoding_renders_placeholder() {
        let mem = memory();
        assert_eq!(
            render(mem.view(), TaggedValue(0b1011)).unwrap(),
            "unknown value (11)"
        );
    }
}
