//! Error types for display operations.

use std::error::Error;
use std::fmt;

use marsmem_core::{LayoutError, MemoryError};

/// Errors arising from display configuration or pixel writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayError {
    /// Display width must be positive.
    InvalidWidth,
    /// A checked display cannot hold even one row of the requested width.
    WidthExceedsCapacity {
        /// Requested width.
        width: u32,
        /// Display capacity in elements.
        capacity: u32,
    },
    /// A pixel is outside the visible area of a checked display.
    PixelOutOfBounds {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
        /// Current width.
        width: u32,
        /// Current height.
        height: u32,
    },
    /// The computed pixel address is outside the 32-bit address space.
    AddressOverflow {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// The store itself failed.
    Memory(MemoryError),
    /// The display region is invalid.
    Layout(LayoutError),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth => write!(f, "display width must be positive"),
            Self::WidthExceedsCapacity { width, capacity } => {
                write!(
                    f,
                    "display width {width} exceeds region capacity of {capacity} pixels"
                )
            }
            Self::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "pixel ({x}, {y}) out of bounds: [0, {width}) x [0, {height})")
            }
            Self::AddressOverflow { x, y } => {
                write!(f, "pixel ({x}, {y}) lies outside the address space")
            }
            Self::Memory(e) => write!(f, "pixel store failed: {e}"),
            Self::Layout(e) => write!(f, "invalid display layout: {e}"),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Memory(e) => Some(e),
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MemoryError> for DisplayError {
    fn from(e: MemoryError) -> Self {
        Self::Memory(e)
    }
}

impl From<LayoutError> for DisplayError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
