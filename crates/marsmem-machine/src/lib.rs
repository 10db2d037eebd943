//! A simulated machine owning one address space, one heap arena and one
//! bitmap display.
//!
//! [`Machine`] is built from a single [`MachineConfig`]. It maps the display
//! and heap regions into a [`SimMemory`](marsmem_core::SimMemory), places a
//! [`BumpArena`](marsmem_arena::BumpArena) on the heap and a
//! [`Framebuffer`](marsmem_display::Framebuffer) on the display, all sharing
//! the layout's bounds mode. Because both components address the same
//! memory, an unchecked pixel write past the display really does land in
//! the heap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod machine;
pub mod stats;

pub use config::{ConfigError, MachineConfig};
pub use error::MachineError;
pub use machine::Machine;
pub use stats::MachineStats;
