//! Memory-map fixtures.
//!
//! - [`tiny_layout`]: a 4x4 display directly followed by a 32-element heap,
//!   small enough to reason about every address by hand.
//! - [`mars_layout`]: the simulated machine's default map.

use marsmem_core::{Address, BoundsMode, ElementWidth, MemoryLayout, RegionSpec};

/// Base address of the [`tiny_layout`] display.
pub const TINY_DISPLAY_BASE: Address = Address(0x1000);

/// Display capacity of [`tiny_layout`] in elements.
pub const TINY_DISPLAY_CAPACITY: u32 = 16;

/// Base address of the [`tiny_layout`] heap, right after the display.
pub const TINY_HEAP_BASE: Address = Address(0x1040);

/// Heap capacity of [`tiny_layout`] in elements.
pub const TINY_HEAP_CAPACITY: u32 = 32;

/// A 16-element display at `0x1000` and a 32-element heap at `0x1040`,
/// with 4-byte elements.
pub fn tiny_layout(bounds: BoundsMode) -> MemoryLayout {
    MemoryLayout {
        display: RegionSpec::new(
            MemoryLayout::DISPLAY_REGION,
            TINY_DISPLAY_BASE,
            TINY_DISPLAY_CAPACITY,
        ),
        heap: RegionSpec::new(MemoryLayout::HEAP_REGION, TINY_HEAP_BASE, TINY_HEAP_CAPACITY),
        element_width: ElementWidth::Word,
        bounds,
    }
}

/// The default machine memory map.
pub fn mars_layout(bounds: BoundsMode) -> MemoryLayout {
    MemoryLayout::new(bounds)
}
