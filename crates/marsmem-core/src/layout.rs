//! Memory layout configuration: region placement and bounds checking.
//!
//! The defaults reproduce the simulated machine's memory map: a bitmap
//! display at `0x10008000` immediately followed by the heap at
//! `0x10010000`, both addressed in 4-byte words.

use crate::address::{Address, ElementWidth};
use crate::error::LayoutError;

/// Whether operations validate addresses against region capacities.
///
/// `Checked` turns heap exhaustion and out-of-range pixels into errors.
/// `Unchecked` reproduces the legacy hardware model: the heap cursor may
/// run past its region and pixel writes may land anywhere in the address
/// space, silently aliasing neighbouring regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundsMode {
    /// Validate every allocation and address against its region.
    #[default]
    Checked,
    /// Skip capacity checks. Only leaving the 32-bit address space fails.
    Unchecked,
}

impl BoundsMode {
    /// Returns `true` for [`BoundsMode::Checked`].
    pub fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }
}

/// Placement of one memory-mapped region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSpec {
    /// Human-readable region name (`"display"`, `"heap"`).
    pub name: String,
    /// First byte address of the region.
    pub base: Address,
    /// Size of the region in elements.
    pub capacity: u32,
}

impl RegionSpec {
    /// Create a region spec.
    pub fn new(name: impl Into<String>, base: Address, capacity: u32) -> Self {
        Self {
            name: name.into(),
            base,
            capacity,
        }
    }

    /// Exclusive end of the region in bytes, as a `u64` so that a region
    /// ending exactly at the top of the address space is representable.
    pub fn end(&self, width: ElementWidth) -> u64 {
        self.base.0 as u64 + self.capacity as u64 * width.bytes() as u64
    }

    /// Whether `address` falls inside the region.
    pub fn contains(&self, address: Address, width: ElementWidth) -> bool {
        address >= self.base && (address.0 as u64) < self.end(width)
    }

    /// Whether the two regions share at least one byte.
    pub fn overlaps(&self, other: &RegionSpec, width: ElementWidth) -> bool {
        (self.base.0 as u64) < other.end(width) && (other.base.0 as u64) < self.end(width)
    }

    /// Check capacity, alignment and address-space fit.
    pub fn validate(&self, width: ElementWidth) -> Result<(), LayoutError> {
        if self.capacity == 0 {
            return Err(LayoutError::EmptyRegion {
                name: self.name.clone(),
            });
        }
        if self.base.0 % width.bytes() != 0 {
            return Err(LayoutError::MisalignedBase {
                name: self.name.clone(),
                base: self.base,
            });
        }
        if self.end(width) > u32::MAX as u64 + 1 {
            return Err(LayoutError::RegionOverflow {
                name: self.name.clone(),
                base: self.base,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

/// The simulated machine's memory map.
///
/// Holds the placement of the display and heap regions together with the
/// element width and bounds mode shared by everything that addresses them.
/// Validated at construction by [`MemoryLayout::validate`]; consumers copy
/// the values they need and never mutate the layout afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Bitmap display region.
    pub display: RegionSpec,
    /// Heap region served by the bump arena.
    pub heap: RegionSpec,
    /// Bytes per element for both regions.
    pub element_width: ElementWidth,
    /// Bounds checking mode for the whole machine.
    pub bounds: BoundsMode,
}

impl MemoryLayout {
    /// Name of the display region.
    pub const DISPLAY_REGION: &'static str = "display";

    /// Name of the heap region.
    pub const HEAP_REGION: &'static str = "heap";

    /// Default display base address.
    pub const DEFAULT_DISPLAY_BASE: Address = Address(0x1000_8000);

    /// Default display capacity in elements: the whole gap up to the heap
    /// base (`0x8000` bytes of words).
    pub const DEFAULT_DISPLAY_CAPACITY: u32 = 8192;

    /// Default heap base address.
    pub const DEFAULT_HEAP_BASE: Address = Address(0x1001_0000);

    /// Default heap capacity in elements, ending at `0x10040000`.
    pub const DEFAULT_HEAP_CAPACITY: u32 = 49_152;

    /// Layout with the default memory map and the given bounds mode.
    pub fn new(bounds: BoundsMode) -> Self {
        Self {
            display: RegionSpec::new(
                Self::DISPLAY_REGION,
                Self::DEFAULT_DISPLAY_BASE,
                Self::DEFAULT_DISPLAY_CAPACITY,
            ),
            heap: RegionSpec::new(
                Self::HEAP_REGION,
                Self::DEFAULT_HEAP_BASE,
                Self::DEFAULT_HEAP_CAPACITY,
            ),
            element_width: ElementWidth::default(),
            bounds,
        }
    }

    /// Layout reproducing the legacy unchecked hardware model.
    pub fn legacy() -> Self {
        Self::new(BoundsMode::Unchecked)
    }

    /// Whether the display and heap regions share any address.
    pub fn regions_overlap(&self) -> bool {
        self.display.overlaps(&self.heap, self.element_width)
    }

    /// Validate both regions.
    ///
    /// Overlapping regions are rejected only in checked mode. An unchecked
    /// layout keeps the legacy behaviour where placement is the caller's
    /// responsibility.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.display.validate(self.element_width)?;
        self.heap.validate(self.element_width)?;
        if self.bounds.is_checked() && self.regions_overlap() {
            return Err(LayoutError::RegionsOverlap {
                first: self.display.name.clone(),
                second: self.heap.name.clone(),
            });
        }
        Ok(())
    }
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self::new(BoundsMode::Checked)
    }
}
