//! Core types for the marsmem simulated memory map.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! address space shared by the heap arena and the bitmap display:
//! addresses and element widths, the memory layout configuration, the
//! [`MemoryBus`] trait and [`SimMemory`], a synthetic backing store made
//! of bounds-checked regions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod error;
pub mod layout;
pub mod memory;

pub use address::{Address, ElementWidth};
pub use error::{LayoutError, MemoryError};
pub use layout::{BoundsMode, MemoryLayout, RegionSpec};
pub use memory::{MemoryBus, Region, SimMemory};
