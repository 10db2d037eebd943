//! Simulated memory: bounds-checked regions behind a [`MemoryBus`].
//!
//! A [`Region`] is a sized `Vec<u32>` anchored at a base address; every
//! access translates the address into an element index and validates it.
//! [`SimMemory`] routes loads and stores to the region that contains the
//! address. In unchecked mode, stores that miss every region are kept in a
//! sparse stray store instead of failing, which is how the legacy model's
//! out-of-range writes stay observable in tests.

use indexmap::IndexMap;

use crate::address::{Address, ElementWidth};
use crate::error::{LayoutError, MemoryError};
use crate::layout::{BoundsMode, MemoryLayout, RegionSpec};

/// Element-granular load/store access to a simulated address space.
///
/// Implemented by [`SimMemory`]. Every access moves one element; the value
/// is carried as a `u32` regardless of the element width.
pub trait MemoryBus {
    /// Read the element stored at `address`.
    fn load_word(&self, address: Address) -> Result<u32, MemoryError>;

    /// Overwrite the element stored at `address`.
    fn store_word(&mut self, address: Address, value: u32) -> Result<(), MemoryError>;
}

/// A contiguous memory-mapped region backed by a zero-initialised buffer.
#[derive(Clone, Debug)]
pub struct Region {
    spec: RegionSpec,
    element_width: ElementWidth,
    cells: Vec<u32>,
}

impl Region {
    /// Largest capacity, in elements, that a simulated region may back.
    ///
    /// Storage is allocated eagerly, so this caps a region at 64 MiB of
    /// cells. Specs passed to the arena or display alone are not limited.
    pub const MAX_CAPACITY: u32 = 1 << 24;

    /// Create a zeroed region from a validated spec.
    pub fn new(spec: RegionSpec, element_width: ElementWidth) -> Result<Self, LayoutError> {
        spec.validate(element_width)?;
        if spec.capacity > Self::MAX_CAPACITY {
            return Err(LayoutError::RegionTooLarge {
                name: spec.name,
                capacity: spec.capacity,
                limit: Self::MAX_CAPACITY,
            });
        }
        let cells = vec![0; spec.capacity as usize];
        Ok(Self {
            spec,
            element_width,
            cells,
        })
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// First byte address.
    pub fn base(&self) -> Address {
        self.spec.base
    }

    /// Capacity in elements.
    pub fn capacity(&self) -> u32 {
        self.spec.capacity
    }

    /// The placement this region was built from.
    pub fn spec(&self) -> &RegionSpec {
        &self.spec
    }

    /// Whether `address` falls inside the region.
    pub fn contains(&self, address: Address) -> bool {
        self.spec.contains(address, self.element_width)
    }

    /// Translate `address` into an element index, validating bounds and
    /// alignment.
    pub fn index_of(&self, address: Address) -> Result<usize, MemoryError> {
        if !self.contains(address) {
            return Err(MemoryError::Unmapped { address });
        }
        address
            .elements_from(self.spec.base, self.element_width)
            .map(|i| i as usize)
            .ok_or(MemoryError::Misaligned {
                address,
                element_width: self.element_width,
            })
    }

    /// Read the element at `address`.
    pub fn load(&self, address: Address) -> Result<u32, MemoryError> {
        let index = self.index_of(address)?;
        Ok(self.cells[index])
    }

    /// Write the element at `address`.
    pub fn store(&mut self, address: Address, value: u32) -> Result<(), MemoryError> {
        let index = self.index_of(address)?;
        self.cells[index] = value;
        Ok(())
    }

    /// The raw element buffer.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }
}

/// Synthetic address space made of named regions.
///
/// Regions are looked up in insertion order, so in an unchecked layout
/// where regions overlap the first mapped region wins.
#[derive(Clone, Debug)]
pub struct SimMemory {
    regions: IndexMap<String, Region>,
    /// Unchecked stores that missed every region, keyed by address.
    stray: IndexMap<Address, u32>,
    element_width: ElementWidth,
    bounds: BoundsMode,
}

impl SimMemory {
    /// Create an empty address space.
    pub fn new(element_width: ElementWidth, bounds: BoundsMode) -> Self {
        Self {
            regions: IndexMap::new(),
            stray: IndexMap::new(),
            element_width,
            bounds,
        }
    }

    /// Build the display and heap regions described by `layout`.
    pub fn from_layout(layout: &MemoryLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let mut memory = Self::new(layout.element_width, layout.bounds);
        memory.map_region(layout.display.clone())?;
        memory.map_region(layout.heap.clone())?;
        Ok(memory)
    }

    /// Map a new zeroed region.
    ///
    /// In checked mode the region may not overlap any existing region.
    pub fn map_region(&mut self, spec: RegionSpec) -> Result<(), LayoutError> {
        if self.regions.contains_key(&spec.name) {
            return Err(LayoutError::DuplicateRegion { name: spec.name });
        }
        if self.bounds.is_checked() {
            if let Some(existing) = self
                .regions
                .values()
                .find(|r| r.spec().overlaps(&spec, self.element_width))
            {
                return Err(LayoutError::RegionsOverlap {
                    first: existing.name().to_string(),
                    second: spec.name,
                });
            }
        }
        let region = Region::new(spec, self.element_width)?;
        tracing::debug!(
            region = %region.name(),
            base = %region.base(),
            capacity = region.capacity(),
            "mapped memory region"
        );
        self.regions.insert(region.name().to_string(), region);
        Ok(())
    }

    /// Look up a region by name.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    /// The first region containing `address`, if any.
    pub fn region_at(&self, address: Address) -> Option<&Region> {
        self.regions.values().find(|r| r.contains(address))
    }

    /// Iterate over mapped regions in mapping order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// Stores that landed outside every region, in write order.
    pub fn stray_writes(&self) -> impl Iterator<Item = (Address, u32)> + '_ {
        self.stray.iter().map(|(&a, &v)| (a, v))
    }

    /// Number of distinct stray addresses written.
    pub fn stray_count(&self) -> usize {
        self.stray.len()
    }

    /// Element width of every region.
    pub fn element_width(&self) -> ElementWidth {
        self.element_width
    }

    /// Bounds mode of this address space.
    pub fn bounds(&self) -> BoundsMode {
        self.bounds
    }

    fn check_alignment(&self, address: Address) -> Result<(), MemoryError> {
        if address.0 % self.element_width.bytes() != 0 {
            return Err(MemoryError::Misaligned {
                address,
                element_width: self.element_width,
            });
        }
        Ok(())
    }
}

impl MemoryBus for SimMemory {
    fn load_word(&self, address: Address) -> Result<u32, MemoryError> {
        if let Some(region) = self.region_at(address) {
            return region.load(address);
        }
        match self.bounds {
            BoundsMode::Checked => Err(MemoryError::Unmapped { address }),
            BoundsMode::Unchecked => {
                self.check_alignment(address)?;
                Ok(self.stray.get(&address).copied().unwrap_or(0))
            }
        }
    }

    fn store_word(&mut self, address: Address, value: u32) -> Result<(), MemoryError> {
        if let Some(index) = self.regions.values().position(|r| r.contains(address)) {
            return self.regions[index].store(address, value);
        }
        match self.bounds {
            BoundsMode::Checked => Err(MemoryError::Unmapped { address }),
            BoundsMode::Unchecked => {
                self.check_alignment(address)?;
                tracing::warn!(%address, value, "store outside every mapped region");
                self.stray.insert(address, value);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_memory(bounds: BoundsMode) -> SimMemory {
        let mut mem = SimMemory::new(ElementWidth::Word, bounds);
        mem.map_region(RegionSpec::new("a", Address(0x100), 4)).unwrap();
        mem.map_region(RegionSpec::new("b", Address(0x200), 4)).unwrap();
        mem
    }

    #[test]
    fn new_regions_are_zeroed() {
        let mem = small_memory(BoundsMode::Checked);
        assert!(mem.region("a").unwrap().cells().iter().all(|&v| v == 0));
        assert_eq!(mem.load_word(Address(0x10c)), Ok(0));
    }

    #[test]
    fn store_then_load_hits_the_right_element() {
        let mut mem = small_memory(BoundsMode::Checked);
        mem.store_word(Address(0x204), 0xdead_beef).unwrap();
        assert_eq!(mem.load_word(Address(0x204)), Ok(0xdead_beef));
        assert_eq!(mem.region("b").unwrap().cells(), &[0, 0xdead_beef, 0, 0]);
    }

    #[test]
    fn last_store_wins() {
        let mut mem = small_memory(BoundsMode::Checked);
        mem.store_word(Address(0x100), 1).unwrap();
        mem.store_word(Address(0x100), 2).unwrap();
        assert_eq!(mem.load_word(Address(0x100)), Ok(2));
    }

    #[test]
    fn checked_store_outside_regions_fails() {
        let mut mem = small_memory(BoundsMode::Checked);
        assert_eq!(
            mem.store_word(Address(0x110), 1),
            Err(MemoryError::Unmapped {
                address: Address(0x110)
            })
        );
        assert_eq!(mem.stray_count(), 0);
    }

    #[test]
    fn unchecked_store_outside_regions_is_recorded() {
        let mut mem = small_memory(BoundsMode::Unchecked);
        mem.store_word(Address(0x110), 7).unwrap();
        assert_eq!(mem.load_word(Address(0x110)), Ok(7));
        assert_eq!(mem.stray_writes().collect::<Vec<_>>(), vec![(Address(0x110), 7)]);
    }

    #[test]
    fn misaligned_access_fails_in_both_modes() {
        let mut checked = small_memory(BoundsMode::Checked);
        assert!(matches!(
            checked.store_word(Address(0x101), 1),
            Err(MemoryError::Misaligned { .. })
        ));
        let mut unchecked = small_memory(BoundsMode::Unchecked);
        assert!(matches!(
            unchecked.store_word(Address(0x301), 1),
            Err(MemoryError::Misaligned { .. })
        ));
    }

    #[test]
    fn checked_mapping_rejects_overlap() {
        let mut mem = small_memory(BoundsMode::Checked);
        let result = mem.map_region(RegionSpec::new("c", Address(0x10c), 4));
        assert_eq!(
            result,
            Err(LayoutError::RegionsOverlap {
                first: "a".into(),
                second: "c".into()
            })
        );
    }

    #[test]
    fn unchecked_mapping_allows_overlap_first_region_wins() {
        let mut mem = small_memory(BoundsMode::Unchecked);
        mem.map_region(RegionSpec::new("c", Address(0x10c), 4)).unwrap();
        mem.store_word(Address(0x10c), 9).unwrap();
        assert_eq!(mem.region_at(Address(0x10c)).unwrap().name(), "a");
        assert_eq!(mem.region("c").unwrap().cells()[0], 0);
    }

    #[test]
    fn duplicate_region_name_rejected() {
        let mut mem = small_memory(BoundsMode::Unchecked);
        assert_eq!(
            mem.map_region(RegionSpec::new("a", Address(0x400), 1)),
            Err(LayoutError::DuplicateRegion { name: "a".into() })
        );
    }

    #[test]
    fn oversized_region_rejected_before_allocating() {
        let mut mem = SimMemory::new(ElementWidth::Byte, BoundsMode::Checked);
        let spec = RegionSpec::new("huge", Address(0), u32::MAX);
        assert!(spec.validate(ElementWidth::Byte).is_ok());
        assert_eq!(
            mem.map_region(spec),
            Err(LayoutError::RegionTooLarge {
                name: "huge".into(),
                capacity: u32::MAX,
                limit: Region::MAX_CAPACITY,
            })
        );
        assert_eq!(mem.regions().count(), 0);
        assert!(mem
            .map_region(RegionSpec::new("edge", Address(0), Region::MAX_CAPACITY))
            .is_ok());
    }

    #[test]
    fn from_layout_maps_display_then_heap() {
        let mem = SimMemory::from_layout(&MemoryLayout::default()).unwrap();
        let names: Vec<_> = mem.regions().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["display", "heap"]);
        assert_eq!(
            mem.region_at(MemoryLayout::DEFAULT_HEAP_BASE).unwrap().name(),
            "heap"
        );
    }
}
