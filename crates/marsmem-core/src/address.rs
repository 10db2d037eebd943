//! Byte addresses and element widths.

use std::fmt;

use crate::error::LayoutError;

/// A byte address in the simulated 32-bit address space.
///
/// Displayed as zero-padded hex (`0x10010000`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub u32);

impl Address {
    /// The raw address value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Offset this address by a signed number of elements.
    ///
    /// Returns `None` if the result leaves the 32-bit address space.
    pub fn offset_elements(self, elements: i64, width: ElementWidth) -> Option<Address> {
        let bytes = elements.checked_mul(width.bytes() as i64)?;
        let target = (self.0 as i64).checked_add(bytes)?;
        u32::try_from(target).ok().map(Address)
    }

    /// Distance from `base` to this address, in whole elements.
    ///
    /// Returns `None` if this address is below `base` or not aligned to
    /// an element boundary relative to it.
    pub fn elements_from(self, base: Address, width: ElementWidth) -> Option<u32> {
        let bytes = self.0.checked_sub(base.0)?;
        if bytes % width.bytes() != 0 {
            return None;
        }
        Some(bytes / width.bytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for Address {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Size of one addressable element in bytes.
///
/// Allocation sizes and pixel offsets are counted in elements, so every
/// offset is scaled by this width before it becomes a byte address. The
/// simulated machine uses 4-byte words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementWidth {
    /// 1 byte.
    Byte,
    /// 2 bytes.
    Half,
    /// 4 bytes (the native integer width).
    #[default]
    Word,
    /// 8 bytes.
    Double,
}

impl ElementWidth {
    /// Width in bytes.
    pub fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }

    /// Number of whole elements needed to hold `bytes` bytes.
    pub fn elements_for_bytes(self, bytes: u32) -> u32 {
        bytes.div_ceil(self.bytes())
    }
}

impl TryFrom<u32> for ElementWidth {
    type Error = LayoutError;

    fn try_from(bytes: u32) -> Result<Self, Self::Error> {
        match bytes {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Half),
            4 => Ok(Self::Word),
            8 => Ok(Self::Double),
            other => Err(LayoutError::InvalidElementWidth { bytes: other }),
        }
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.bytes())
    }
}
