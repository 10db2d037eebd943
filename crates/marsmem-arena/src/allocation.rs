//! Ranges handed out by the arena.

use std::fmt;

use marsmem_core::{Address, ElementWidth};

/// A range of heap addresses returned by [`BumpArena::allocate`](crate::BumpArena::allocate).
///
/// Covers `[start, start + len)` in elements. Allocations are plain values;
/// the arena keeps no record of them and never takes them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Allocation {
    start: Address,
    len: u32,
    element_width: ElementWidth,
}

impl Allocation {
    pub(crate) fn new(start: Address, len: u32, element_width: ElementWidth) -> Self {
        Self {
            start,
            len,
            element_width,
        }
    }

    /// First address of the range.
    pub fn start(&self) -> Address {
        self.start
    }

    /// Length in elements.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length in bytes.
    pub fn byte_len(&self) -> u64 {
        self.len as u64 * self.element_width.bytes() as u64
    }

    /// Exclusive end of the range in bytes.
    pub fn end(&self) -> u64 {
        self.start.0 as u64 + self.byte_len()
    }

    /// Address of the `index`-th element, or `None` past the end.
    pub fn element(&self, index: u32) -> Option<Address> {
        if index >= self.len {
            return None;
        }
        self.start.offset_elements(index as i64, self.element_width)
    }

    /// Whether `address` falls inside the range.
    pub fn contains(&self, address: Address) -> bool {
        address >= self.start && (address.0 as u64) < self.end()
    }

    /// Whether the two ranges share at least one byte. Empty ranges
    /// overlap nothing.
    pub fn overlaps(&self, other: &Allocation) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.start.0 as u64) < other.end()
            && (other.start.0 as u64) < self.end()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation({}, len={})", self.start, self.len)
    }
}
