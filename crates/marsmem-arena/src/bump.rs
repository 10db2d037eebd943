//! The bump arena itself.

use marsmem_core::{Address, BoundsMode, ElementWidth};

use crate::allocation::Allocation;
use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// Monotonic allocator over a single heap region.
///
/// The cursor starts at the heap base and advances by exactly the requested
/// size on every successful allocation. It never moves backwards: there is
/// no free and no reset, so every range ever returned stays disjoint from
/// every later one.
///
/// Mutation requires `&mut self`; independent arenas may coexist, each with
/// its own cursor.
#[derive(Clone, Debug)]
pub struct BumpArena {
    base: Address,
    capacity: u32,
    element_width: ElementWidth,
    bounds: BoundsMode,
    /// Next address to hand out.
    cursor: Address,
    /// Elements handed out so far. May exceed `capacity` when unchecked.
    used: u64,
    allocations: u64,
}

impl BumpArena {
    /// Create an arena with the cursor at the heap base.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        tracing::debug!(
            base = %config.base,
            capacity = config.capacity,
            bounds = ?config.bounds,
            "bump arena created"
        );
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: ArenaConfig) -> Self {
        Self {
            base: config.base,
            capacity: config.capacity,
            element_width: config.element_width,
            bounds: config.bounds,
            cursor: config.base,
            used: 0,
            allocations: 0,
        }
    }

    /// Carve `size` elements off the heap.
    ///
    /// Returns the cursor as it was before the call, then advances it by
    /// `size`. `allocate(0)` returns the current cursor without moving it.
    ///
    /// In checked mode a request larger than [`remaining`](Self::remaining)
    /// fails with [`ArenaError::Exhausted`]. In unchecked mode the cursor
    /// may pass the end of the heap. In both modes a request that would
    /// move the cursor out of the address space fails with
    /// [`ArenaError::AddressOverflow`]. A failed call leaves the cursor
    /// untouched.
    pub fn allocate(&mut self, size: u32) -> Result<Allocation, ArenaError> {
        if self.bounds.is_checked() && size > self.remaining() {
            return Err(ArenaError::Exhausted {
                requested: size,
                remaining: self.remaining(),
            });
        }
        let next = self
            .cursor
            .offset_elements(size as i64, self.element_width)
            .ok_or(ArenaError::AddressOverflow {
                cursor: self.cursor,
                requested: size,
            })?;

        let start = self.cursor;
        let was_overrun = self.is_overrun();
        self.cursor = next;
        self.used += size as u64;
        self.allocations += 1;

        if !was_overrun && self.is_overrun() {
            tracing::warn!(
                cursor = %self.cursor,
                capacity = self.capacity,
                "unchecked heap cursor ran past the end of the heap"
            );
        }
        tracing::trace!(start = %start, size, "allocated");
        Ok(Allocation::new(start, size, self.element_width))
    }

    /// Allocate enough whole elements to hold `bytes` bytes.
    pub fn allocate_bytes(&mut self, bytes: u32) -> Result<Allocation, ArenaError> {
        self.allocate(self.element_width.elements_for_bytes(bytes))
    }

    /// Heap base address.
    pub fn base(&self) -> Address {
        self.base
    }

    /// Address the next allocation will start at.
    pub fn cursor(&self) -> Address {
        self.cursor
    }

    /// Elements handed out so far.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Heap capacity in elements.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Elements left before the end of the heap. Zero once an unchecked
    /// arena has overrun.
    pub fn remaining(&self) -> u32 {
        (self.capacity as u64).saturating_sub(self.used) as u32
    }

    /// Whether the cursor has passed the end of the heap. Only possible in
    /// unchecked mode.
    pub fn is_overrun(&self) -> bool {
        self.used > self.capacity as u64
    }

    /// Number of successful `allocate` calls, including zero-sized ones.
    pub fn allocation_count(&self) -> u64 {
        self.allocations
    }

    /// Bytes per element.
    pub fn element_width(&self) -> ElementWidth {
        self.element_width
    }

    /// Bounds mode.
    pub fn bounds(&self) -> BoundsMode {
        self.bounds
    }
}

impl Default for BumpArena {
    /// An arena over the default heap region. The default config is
    /// statically valid.
    fn default() -> Self {
        Self::from_validated(ArenaConfig::default())
    }
}
