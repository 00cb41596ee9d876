//! Tagged Value Scheme
//!
//! Every runtime value of the guest language is a single 64-bit integer.
//! This module defines the bit layout and the one place where a raw
//! integer is decoded into a typed variant; nothing outside this module
//! inspects tag bits directly.
//!
//! Layout (wire contract with the compiler, bit-for-bit):
//! - three reserved singletons for `true`, `false` and `nil`;
//! - low 3 bits `0b101`: closure reference (opaque, identity only);
//! - low 3 bits `0b001`: tuple reference, upper bits / 8 give a word index
//!   into the shared heap;
//! - even values: signed number, decoded by arithmetic shift right by one.

use std::fmt;

/// Boolean `true` singleton (i64 -1)
pub const TRUE: TaggedValue = TaggedValue(0xFFFF_FFFF_FFFF_FFFF);

/// Boolean `false` singleton
pub const FALSE: TaggedValue = TaggedValue(0x7FFF_FFFF_FFFF_FFFF);

/// `nil` singleton
pub const NIL: TaggedValue = TaggedValue(0x0000_0001_0000_0001);

const TAG_MASK: u64 = 0b111;
const TUPLE_TAG: u64 = 0b001;
const CLOSURE_TAG: u64 = 0b101;

/// A tagged runtime value
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaggedValue(pub u64);

/// Decoded form of a [`TaggedValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    True,
    False,
    Nil,
    /// Signed number
    Number(i64),
    /// Opaque callable reference, compared by identity only
    ClosureRef,
    /// Word index of a heap tuple
    TupleRef(usize),
    /// Unrecognized encoding, kept raw for diagnostics
    Unknown(u64),
}

impl TaggedValue {
    /// Encode a signed number. Returns `None` if the value does not
    /// round-trip through the shift (numbers use 63 bits).
    pub fn from_int(n: i64) -> Option<TaggedValue> {
        let encoded = n.checked_mul(2)?;
        Some(TaggedValue(encoded as u64))
    }

    /// Encode a boolean as the matching singleton
    pub fn from_bool(b: bool) -> TaggedValue {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    /// Build a tuple reference from a heap word index
    pub fn tuple_ref(word_index: usize) -> TaggedValue {
        let byte_addr = (word_index as u64) * 8;
        TaggedValue((byte_addr << 3) | TUPLE_TAG)
    }

    /// Build a closure reference from an opaque id
    pub fn closure_ref(id: u64) -> TaggedValue {
        TaggedValue((id << 3) | CLOSURE_TAG)
    }

    /// Raw 64-bit encoding
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Decode into a typed variant.
    ///
    /// The order of the checks is part of the contract: the singletons
    /// overlap the tag space (`NIL` carries the tuple tag bits, the
    /// booleans are odd), so they must be matched by exact equality
    /// before any tag classification.
    pub fn classify(self) -> ValueKind {
        if self == TRUE {
            return ValueKind::True;
        }
        if self == FALSE {
            return ValueKind::False;
        }
        if self == NIL {
            return ValueKind::Nil;
        }
        if self.0 & TAG_MASK == CLOSURE_TAG {
            return ValueKind::ClosureRef;
        }
        if self.0 & TAG_MASK == TUPLE_TAG {
            return ValueKind::TupleRef(((self.0 >> 3) / 8) as usize);
        }
        if self.0 & 1 == 0 {
            return ValueKind::Number((self.0 as i64) >> 1);
        }
        ValueKind::Unknown(self.0)
    }
}

impl fmt::Debug for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            ValueKind::True => write!(f, "True"),
            ValueKind::False => write!(f, "False"),
            ValueKind::Nil => write!(f, "Nil"),
            ValueKind::Number(n) => write!(f, "Number({})", n),
            ValueKind::ClosureRef => write!(f, "ClosureRef({:#x})", self.0),
            ValueKind::TupleRef(addr) => write!(f, "TupleRef({})", addr),
            ValueKind::Unknown(raw) => write!(f, "Unknown({:#x})", raw),
        }
    }
}
