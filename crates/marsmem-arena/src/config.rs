//! Arena configuration parameters.

use marsmem_core::{Address, BoundsMode, ElementWidth, LayoutError, MemoryLayout, RegionSpec};

/// Configuration for the bump arena.
///
/// Describes the heap region the cursor walks through. Validated at
/// construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Heap base address. The cursor starts here.
    pub base: Address,

    /// Heap capacity in elements.
    ///
    /// Enforced only in [`BoundsMode::Checked`]; an unchecked arena keeps it
    /// for reporting [`remaining`](crate::BumpArena::remaining) and overruns.
    pub capacity: u32,

    /// Bytes per allocation unit. Default: 4.
    pub element_width: ElementWidth,

    /// Whether allocations are checked against `capacity`.
    pub bounds: BoundsMode,
}

impl ArenaConfig {
    /// Default heap base address.
    pub const DEFAULT_BASE: Address = MemoryLayout::DEFAULT_HEAP_BASE;

    /// Default heap capacity in elements.
    pub const DEFAULT_CAPACITY: u32 = MemoryLayout::DEFAULT_HEAP_CAPACITY;

    /// Create a config for a heap at `base` holding `capacity` elements.
    ///
    /// Uses 4-byte elements and checked bounds.
    pub fn new(base: Address, capacity: u32) -> Self {
        Self {
            base,
            capacity,
            element_width: ElementWidth::default(),
            bounds: BoundsMode::default(),
        }
    }

    /// Take the heap region of a machine layout.
    pub fn from_layout(layout: &MemoryLayout) -> Self {
        Self {
            base: layout.heap.base,
            capacity: layout.heap.capacity,
            element_width: layout.element_width,
            bounds: layout.bounds,
        }
    }

    /// Builder-style override of the bounds mode.
    pub fn with_bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    /// Total heap capacity in bytes.
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity as u64 * self.element_width.bytes() as u64
    }

    /// The heap as a region spec.
    pub fn region(&self) -> RegionSpec {
        RegionSpec::new(MemoryLayout::HEAP_REGION, self.base, self.capacity)
    }

    /// Check that the heap fits the address space with its end address
    /// still representable, since a full arena's cursor points there.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let region = self.region();
        region.validate(self.element_width)?;
        if region.end(self.element_width) > u32::MAX as u64 {
            return Err(LayoutError::RegionOverflow {
                name: region.name,
                base: self.base,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE, Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heap_is_192k() {
        let config = ArenaConfig::default();
        assert_eq!(config.base, Address(0x1001_0000));
        assert_eq!(config.capacity_bytes(), 192 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_layout_copies_heap_region() {
        let layout = MemoryLayout::legacy();
        let config = ArenaConfig::from_layout(&layout);
        assert_eq!(config.base, layout.heap.base);
        assert_eq!(config.capacity, layout.heap.capacity);
        assert_eq!(config.bounds, BoundsMode::Unchecked);
    }

    #[test]
    fn heap_ending_at_top_of_address_space_rejected() {
        let config = ArenaConfig::new(Address(0xffff_fff0), 4);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::RegionOverflow { .. })
        ));
        assert!(ArenaConfig::new(Address(0xffff_fff0), 3).validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(
            ArenaConfig::new(Address(0x1000), 0).validate(),
            Err(LayoutError::EmptyRegion { .. })
        ));
    }
}
