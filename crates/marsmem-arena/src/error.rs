//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use marsmem_core::{Address, LayoutError};

/// Errors that can occur during arena construction or allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A checked arena cannot fit the request in its remaining capacity.
    Exhausted {
        /// Number of elements requested.
        requested: u32,
        /// Elements still available.
        remaining: u32,
    },
    /// Advancing the cursor would leave the 32-bit address space.
    AddressOverflow {
        /// Cursor at the time of the request.
        cursor: Address,
        /// Number of elements requested.
        requested: u32,
    },
    /// The arena configuration is invalid.
    Layout(LayoutError),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "heap exhausted: requested {requested} elements, {remaining} remaining"
                )
            }
            Self::AddressOverflow { cursor, requested } => {
                write!(
                    f,
                    "allocating {requested} elements at {cursor} overflows the address space"
                )
            }
            Self::Layout(e) => write!(f, "invalid arena layout: {e}"),
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ArenaError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
