//! The simulated machine.
//!
//! # Ownership model
//!
//! `Machine` is [`Send`] but all mutating methods take `&mut self`, so the
//! heap cursor and the display width each have exactly one writer at a
//! time. Callers that share a machine across threads wrap it in their own
//! lock; nothing here is global, so any number of machines can coexist.

use marsmem_arena::{Allocation, ArenaConfig, BumpArena};
use marsmem_core::{Address, MemoryBus, SimMemory};
use marsmem_display::{Color, Framebuffer};

use crate::config::{ConfigError, MachineConfig};
use crate::error::MachineError;
use crate::stats::MachineStats;

// Compile-time assertion: Machine is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Machine>();
    }
};

/// One address space with a bump-allocated heap and a bitmap display.
///
/// # Example
///
/// ```
/// use marsmem_display::Color;
/// use marsmem_machine::{Machine, MachineConfig};
///
/// let mut machine = Machine::new(MachineConfig::default()).unwrap();
/// machine.configure_display(10).unwrap();
/// let a = machine.allocate(5).unwrap();
/// let b = machine.allocate(3).unwrap();
/// assert_eq!(b.start().get(), a.start().get() + 5 * 4);
/// machine.draw_pixel(2, 1, Color::GREEN).unwrap();
/// assert_eq!(machine.read_pixel(2, 1).unwrap(), Color::GREEN);
/// ```
#[derive(Debug)]
pub struct Machine {
    memory: SimMemory,
    arena: BumpArena,
    display: Framebuffer,
    pixels_drawn: u64,
    display_configures: u64,
}

impl Machine {
    /// Validate `config`, map the display and heap regions, and place the
    /// heap cursor at the heap base.
    pub fn new(config: MachineConfig) -> Result<Self, MachineError> {
        config.validate()?;
        let memory = SimMemory::from_layout(&config.layout).map_err(ConfigError::from)?;
        let arena = BumpArena::new(ArenaConfig::from_layout(&config.layout))?;
        let framebuffer = Framebuffer::new(config.display_config())?;
        tracing::debug!(
            heap = %arena.base(),
            display = %framebuffer.base(),
            bounds = ?config.layout.bounds,
            "machine created"
        );
        Ok(Self {
            memory,
            arena,
            display: framebuffer,
            pixels_drawn: 0,
            display_configures: 0,
        })
    }

    /// Carve `size` elements off the heap. See [`BumpArena::allocate`].
    pub fn allocate(&mut self, size: u32) -> Result<Allocation, MachineError> {
        Ok(self.arena.allocate(size)?)
    }

    /// Carve enough elements to hold `bytes` bytes off the heap.
    pub fn allocate_bytes(&mut self, bytes: u32) -> Result<Allocation, MachineError> {
        Ok(self.arena.allocate_bytes(bytes)?)
    }

    /// Set the display width used by every later pixel operation.
    pub fn configure_display(&mut self, width: u32) -> Result<(), MachineError> {
        self.display.configure(width)?;
        self.display_configures += 1;
        Ok(())
    }

    /// Write `color` at pixel `(x, y)`.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), MachineError> {
        self.display.draw_pixel(&mut self.memory, x, y, color)?;
        self.pixels_drawn += 1;
        Ok(())
    }

    /// Read the color at pixel `(x, y)`.
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<Color, MachineError> {
        Ok(self.display.read_pixel(&self.memory, x, y)?)
    }

    /// Paint the whole visible display.
    pub fn clear_display(&mut self, color: Color) -> Result<(), MachineError> {
        Ok(self.display.fill(&mut self.memory, color)?)
    }

    /// Load one element from anywhere in the address space.
    pub fn load_word(&self, address: Address) -> Result<u32, MachineError> {
        Ok(self.memory.load_word(address)?)
    }

    /// Store one element anywhere in the address space.
    pub fn store_word(&mut self, address: Address, value: u32) -> Result<(), MachineError> {
        Ok(self.memory.store_word(address, value)?)
    }

    /// The backing address space.
    pub fn memory(&self) -> &SimMemory {
        &self.memory
    }

    /// The heap arena.
    pub fn arena(&self) -> &BumpArena {
        &self.arena
    }

    /// The display.
    pub fn display(&self) -> &Framebuffer {
        &self.display
    }

    /// Operation counters.
    pub fn stats(&self) -> MachineStats {
        MachineStats {
            allocations: self.arena.allocation_count(),
            heap_elements: self.arena.used(),
            pixels_drawn: self.pixels_drawn,
            display_configures: self.display_configures,
            stray_stores: self.memory.stray_count(),
        }
    }
}
