//! Display configuration.

use marsmem_core::{Address, BoundsMode, ElementWidth, MemoryLayout, RegionSpec};

/// Placement and initial width of the bitmap display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Base address of pixel `(0, 0)`.
    pub base: Address,
    /// Display region size in elements (one element per pixel).
    pub capacity: u32,
    /// Initial row width in pixels. Default: 64.
    pub width: u32,
    /// Bytes per pixel element. Default: 4.
    pub element_width: ElementWidth,
    /// Whether pixel coordinates are validated.
    pub bounds: BoundsMode,
}

impl DisplayConfig {
    /// Default row width in pixels.
    pub const DEFAULT_WIDTH: u32 = 64;

    /// Default display base address.
    pub const DEFAULT_BASE: Address = MemoryLayout::DEFAULT_DISPLAY_BASE;

    /// Default display capacity in elements.
    pub const DEFAULT_CAPACITY: u32 = MemoryLayout::DEFAULT_DISPLAY_CAPACITY;

    /// Create a config for a display at `base` with `capacity` pixels.
    pub fn new(base: Address, capacity: u32) -> Self {
        Self {
            base,
            capacity,
            width: Self::DEFAULT_WIDTH,
            element_width: ElementWidth::default(),
            bounds: BoundsMode::default(),
        }
    }

    /// Take the display region of a machine layout.
    pub fn from_layout(layout: &MemoryLayout) -> Self {
        Self {
            base: layout.display.base,
            capacity: layout.display.capacity,
            width: Self::DEFAULT_WIDTH,
            element_width: layout.element_width,
            bounds: layout.bounds,
        }
    }

    /// Builder-style override of the initial width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Builder-style override of the bounds mode.
    pub fn with_bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    /// The display as a region spec.
    pub fn region(&self) -> RegionSpec {
        RegionSpec::new(MemoryLayout::DISPLAY_REGION, self.base, self.capacity)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE, Self::DEFAULT_CAPACITY)
    }
}
