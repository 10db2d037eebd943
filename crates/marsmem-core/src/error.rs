//! Error types for memory access and layout validation.

use std::error::Error;
use std::fmt;

use crate::address::{Address, ElementWidth};

/// Errors from loads and stores through a [`MemoryBus`](crate::MemoryBus).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// The address does not fall inside any mapped region and the memory
    /// is bounds-checked.
    Unmapped {
        /// The offending address.
        address: Address,
    },
    /// The address is not aligned to an element boundary of its region.
    Misaligned {
        /// The offending address.
        address: Address,
        /// Element width of the memory.
        element_width: ElementWidth,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped { address } => write!(f, "address {address} is not mapped"),
            Self::Misaligned {
                address,
                element_width,
            } => write!(
                f,
                "address {address} is not aligned to {element_width} elements"
            ),
        }
    }
}

impl Error for MemoryError {}

/// Errors detected while validating a memory layout or region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Element width is not one of 1, 2, 4 or 8 bytes.
    InvalidElementWidth {
        /// The rejected width in bytes.
        bytes: u32,
    },
    /// A region was declared with zero capacity.
    EmptyRegion {
        /// Name of the region.
        name: String,
    },
    /// A region extends past the end of the 32-bit address space.
    RegionOverflow {
        /// Name of the region.
        name: String,
        /// Base address of the region.
        base: Address,
        /// Capacity in elements.
        capacity: u32,
    },
    /// A simulated region is too large to back with memory.
    RegionTooLarge {
        /// Name of the region.
        name: String,
        /// Requested capacity in elements.
        capacity: u32,
        /// Largest supported capacity in elements.
        limit: u32,
    },
    /// A region base is not aligned to the element width.
    MisalignedBase {
        /// Name of the region.
        name: String,
        /// The offending base address.
        base: Address,
    },
    /// Two regions share addresses in a bounds-checked layout.
    RegionsOverlap {
        /// Name of the first region.
        first: String,
        /// Name of the second region.
        second: String,
    },
    /// A region with this name is already mapped.
    DuplicateRegion {
        /// Name of the region.
        name: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElementWidth { bytes } => {
                write!(f, "element width must be 1, 2, 4 or 8 bytes, got {bytes}")
            }
            Self::EmptyRegion { name } => write!(f, "region '{name}' has zero capacity"),
            Self::RegionOverflow {
                name,
                base,
                capacity,
            } => write!(
                f,
                "region '{name}' at {base} with {capacity} elements exceeds the address space"
            ),
            Self::RegionTooLarge {
                name,
                capacity,
                limit,
            } => write!(
                f,
                "region '{name}' with {capacity} elements exceeds the simulated limit of {limit}"
            ),
            Self::MisalignedBase { name, base } => {
                write!(f, "region '{name}' base {base} is not element-aligned")
            }
            Self::RegionsOverlap { first, second } => {
                write!(f, "regions '{first}' and '{second}' overlap")
            }
            Self::DuplicateRegion { name } => write!(f, "region '{name}' is already mapped"),
        }
    }
}

impl Error for LayoutError {}
