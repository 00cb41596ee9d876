//! Fault Taxonomy & Reporter
//!
//! The closed set of runtime fault codes a guest program can report, and
//! the rendering of their diagnostics. The numeric ids are a wire
//! contract with the compiler and must never change.
//!
//! Every reported fault is fatal to the run. The reporter is total over
//! the whole code domain: an out-of-range code still produces a
//! best-effort diagnostic instead of an opaque failure.

use crate::error::OrbResult;
use crate::memory::MemoryView;
use crate::render::render;
use crate::value::TaggedValue;

/// Guest-reportable fault codes (stable numeric ids)
#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    ComparisonExpectedNumber = 1,
    ArithmeticExpectedNumber = 2,
    LogicExpectedBoolean = 3,
    IfExpectedBoolean = 4,
    IntegerOverflow = 5,
    GetExpectedTuple = 6,
    GetIndexTooLow = 7,
    GetIndexTooHigh = 8,
    GetExpectedNumericIndex = 9,
    NilDeref = 10,
    OutOfMemory = 11,
    SetExpectedTuple = 12,
    SetIndexTooLow = 13,
    SetExpectedNumericIndex = 14,
    SetIndexTooHigh = 15,
    CallExpectedClosure = 16,
    CallArityMismatch = 17,
    TupleSizeMismatch = 18,
}

impl FaultCode {
    /// Decode a raw code, `None` for anything outside the taxonomy
    pub fn from_raw(raw: u64) -> Option<FaultCode> {
        match raw {
            1 => Some(FaultCode::ComparisonExpectedNumber),
            2 => Some(FaultCode::ArithmeticExpectedNumber),
            3 => Some(FaultCode::LogicExpectedBoolean),
            4 => Some(FaultCode::IfExpectedBoolean),
            5 => Some(FaultCode::IntegerOverflow),
            6 => Some(FaultCode::GetExpectedTuple),
            7 => Some(FaultCode::GetIndexTooLow),
            8 => Some(FaultCode::GetIndexTooHigh),
            9 => Some(FaultCode::GetExpectedNumericIndex),
            10 => Some(FaultCode::NilDeref),
            11 => Some(FaultCode::OutOfMemory),
            12 => Some(FaultCode::SetExpectedTuple),
            13 => Some(FaultCode::SetIndexTooLow),
            14 => Some(FaultCode::SetExpectedNumericIndex),
            15 => Some(FaultCode::SetIndexTooHigh),
            16 => Some(FaultCode::CallExpectedClosure),
            17 => Some(FaultCode::CallArityMismatch),
            18 => Some(FaultCode::TupleSizeMismatch),
            _ => None,
        }
    }

    /// Diagnostic template, including the separator before the rendered
    /// value where one follows
    pub fn message(self) -> &'static str {
        match self {
            FaultCode::ComparisonExpectedNumber => "comparison expected a number, got ",
            FaultCode::ArithmeticExpectedNumber => "arithmetic expected a number, got ",
            FaultCode::LogicExpectedBoolean => "logic expected a boolean, got ",
            FaultCode::IfExpectedBoolean => "if expected a boolean, got ",
            FaultCode::IntegerOverflow => "integer overflow, got ",
            FaultCode::GetExpectedTuple => "get expected tuple, got ",
            FaultCode::GetIndexTooLow => "index too small to get, got ",
            FaultCode::GetIndexTooHigh => "index too large to get, got ",
            FaultCode::GetExpectedNumericIndex => "get expected numeric index, got ",
            FaultCode::NilDeref => "tried to access component of nil",
            FaultCode::OutOfMemory => "out of memory",
            FaultCode::SetExpectedTuple => "set expected tuple, got ",
            FaultCode::SetIndexTooLow => "index too small to set, got ",
            FaultCode::SetExpectedNumericIndex => "set expected numeric index, got ",
            FaultCode::SetIndexTooHigh => "index too large to set, got ",
            FaultCode::CallExpectedClosure => "tried to call a non-closure value: ",
            FaultCode::CallArityMismatch => "arity mismatch in call",
            FaultCode::TupleSizeMismatch => "tuple failed size assertion: ",
        }
    }

    /// Whether the diagnostic carries the offending value
    pub fn carries_value(self) -> bool {
        !matches!(
            self,
            FaultCode::NilDeref | FaultCode::OutOfMemory | FaultCode::CallArityMismatch
        )
    }
}

/// Build the one-line diagnostic for `raw_code`, rendering the offending
/// value where the code carries one. Total over all of `u64`.
pub fn diagnostic(
    view: MemoryView<'_>,
    value: TaggedValue,
    raw_code: u64,
) -> OrbResult<String> {
    let mut line = String::from("ERROR: ");
    match FaultCode::from_raw(raw_code) {
        Some(code) => {
            line.push_str(code.message());
            if code.carries_value() {
                line.push_str(&render(view, value)?);
            }
        }
        None => {
            line.push_str(&format!("unknown error code: {}, val: ", raw_code));
            line.push_str(&render(view, value)?);
        }
    }
    Ok(line)
}
