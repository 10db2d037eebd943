//! marsmem: a bump-allocated heap and a memory-mapped bitmap display for a
//! simulated 32-bit machine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all marsmem sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use marsmem::prelude::*;
//!
//! let mut machine = Machine::new(MachineConfig::default()).unwrap();
//!
//! // Heap: post-increment bump allocation from 0x10010000.
//! let a = machine.allocate(5).unwrap();
//! let b = machine.allocate(3).unwrap();
//! assert_eq!(a.start(), Address(0x1001_0000));
//! assert_eq!(b.start(), Address(0x1001_0000 + 5 * 4));
//!
//! // Display: row-major pixels from 0x10008000.
//! machine.configure_display(10).unwrap();
//! machine.draw_pixel(2, 1, Color::GREEN).unwrap();
//! assert_eq!(machine.load_word(Address(0x1000_8000 + 12 * 4)).unwrap(), 0x0000_ff00);
//! ```
//!
//! # Legacy unchecked mode
//!
//! [`BoundsMode::Unchecked`](memory::BoundsMode::Unchecked) reproduces the
//! original hardware model: the heap cursor may run past the heap and
//! out-of-range pixels are written wherever their address points.
//!
//! ```rust
//! use marsmem::prelude::*;
//!
//! let mut machine = Machine::new(MachineConfig::legacy()).unwrap();
//! // One row past the 64x128 display is the first word of the heap.
//! machine.draw_pixel(0, 128, Color::RED).unwrap();
//! assert_eq!(machine.load_word(Address(0x1001_0000)).unwrap(), Color::RED.get());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`memory`] | `marsmem-core` | Addresses, layout, `SimMemory`, `MemoryBus` |
//! | [`arena`] | `marsmem-arena` | `BumpArena`, `Allocation` |
//! | [`display`] | `marsmem-display` | `Framebuffer`, `Color` |
//! | [`machine`] | `marsmem-machine` | `Machine`, `MachineConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Addresses, memory layout, and simulated memory (`marsmem-core`).
pub use marsmem_core as memory;

/// Heap bump allocation (`marsmem-arena`).
pub use marsmem_arena as arena;

/// Bitmap display addressing and colors (`marsmem-display`).
pub use marsmem_display as display;

/// The assembled machine (`marsmem-machine`).
pub use marsmem_machine as machine;

/// Common imports for typical marsmem usage.
pub mod prelude {
    // Core
    pub use marsmem_core::{
        Address, BoundsMode, ElementWidth, MemoryBus, MemoryLayout, RegionSpec, SimMemory,
    };

    // Components
    pub use marsmem_arena::{Allocation, ArenaConfig, BumpArena};
    pub use marsmem_display::{Color, DisplayConfig, Framebuffer};

    // Machine
    pub use marsmem_machine::{Machine, MachineConfig, MachineStats};

    // Errors
    pub use marsmem_arena::ArenaError;
    pub use marsmem_core::{LayoutError, MemoryError};
    pub use marsmem_display::DisplayError;
    pub use marsmem_machine::{ConfigError, MachineError};
}
