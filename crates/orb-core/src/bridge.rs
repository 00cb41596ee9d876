//! Host Import Surface
//!
//! The three operations a guest program is given: `print`, `equal` and
//! `error`. Each call takes the memory view as a parameter so the view is
//! re-resolved against the current buffer, which the guest may have grown
//! since the previous call.
//!
//! Output goes to an explicit sink owned by the bridge; there is no
//! global accumulator.

use tracing::debug;

use crate::equal::equal;
use crate::error::{OrbError, OrbResult};
use crate::fault;
use crate::memory::MemoryView;
use crate::render::render;
use crate::value::TaggedValue;

/// Destination for guest-visible output
pub trait OutputSink {
    fn append(&mut self, text: &str);
}

impl OutputSink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// The host import surface handed to a guest program
#[derive(Debug)]
pub struct Bridge<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> Bridge<S> {
    pub fn new(sink: S) -> Self {
        Bridge { sink }
    }

    /// Render `value` to the sink with a trailing newline and return it
    /// unchanged, so it can sit in expression position in the guest.
    pub fn print(&mut self, view: MemoryView<'_>, value: TaggedValue) -> OrbResult<TaggedValue> {
        debug!(raw = value.raw(), "print");
        let text = render(view, value)?;
        self.sink.append(&text);
        self.sink.append("\n");
        Ok(value)
    }

    /// Structural equality; returns the encoded boolean
    pub fn equal(
        &self,
        view: MemoryView<'_>,
        lhs: TaggedValue,
        rhs: TaggedValue,
    ) -> OrbResult<TaggedValue> {
        equal(view, lhs, rhs)
    }

    /// Report a fatal fault: write the diagnostic to the sink, then fail.
    /// Always returns `Err`; the guest propagates it and the run ends.
    pub fn error(
        &mut self,
        view: MemoryView<'_>,
        value: TaggedValue,
        raw_code: u64,
    ) -> OrbResult<TaggedValue> {
        let diagnostic = fault::diagnostic(view, value, raw_code)?;
        self.sink.append(&diagnostic);
        self.sink.append("\n");
        Err(OrbError::GuestFault {
            code: raw_code,
            diagnostic,
        })
    }

    /// Borrow the output sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the sink back, consuming the bridge
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbConfig;
    use crate::fault::FaultCode;
    use crate::memory::LinearMemory;
    use crate::value::{FALSE, NIL, TRUE};

    fn memory() -> LinearMemory {
        LinearMemory::new(&OrbConfig::default()).unwrap()
    }

    #[test]
    fn print_returns_value_unchanged() {
        let mut mem = memory();
        let mut bridge = Bridge::new(String::new());

        let num = TaggedValue::from_int(5).unwrap();
        mem.store_word(0, 2).unwrap();
        mem.store_word(1, num.raw()).unwrap();
        mem.store_word(2, NIL.raw()).unwrap();
        let tup = TaggedValue::tuple_ref(0);

        let junk = TaggedValue(0b1011);
        for v in [TRUE, FALSE, NIL, num, TaggedValue::closure_ref(1), tup, junk] {
            let returned = bridge.print(mem.view(), v).unwrap();
            assert_eq!(returned, v);
        }
        assert_eq!(
            bridge.into_sink(),
            "true\nfalse\nnil\n5\n<function>\n(5, nil)\nunknown value (11)\n"
        );
    }

    #[test]
    fn equal_returns_encoded_boolean() {
        let mem = memory();
        let bridge = Bridge::new(String::new());
        let a = TaggedValue::from_int(1).unwrap();
        assert_eq!(bridge.equal(mem.view(), a, a).unwrap(), TRUE);
        assert_eq!(bridge.equal(mem.view(), a, NIL).unwrap(), FALSE);
    }

    #[test]
    fn error_writes_diagnostic_and_fails() {
        let mem = memory();
        let mut bridge = Bridge::new(String::new());
        let res = bridge.error(mem.view(), TRUE, FaultCode::IfExpectedBoolean as u64);
        match res {
            Err(OrbError::GuestFault { code, diagnostic }) => {
                assert_eq!(code, 4);
                assert_eq!(diagnostic, "ERROR: if expected a boolean, got true");
            }
            other => panic!("expected guest fault, got {:?}", other),
        }
        assert_eq!(bridge.into_sink(), "ERROR: if expected a boolean, got true\n");
    }
}
