//! Benchmark profiles for marsmem.
//!
//! - [`checked_machine`] / [`legacy_machine`]: the default memory map in
//!   each bounds mode
//! - [`gradient`]: a deterministic per-pixel color pattern

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use marsmem_core::BoundsMode;
use marsmem_display::Color;
use marsmem_machine::{Machine, MachineConfig, MachineError};

/// Default machine with bounds checking.
pub fn checked_machine() -> Result<Machine, MachineError> {
    Machine::new(MachineConfig::new(BoundsMode::Checked))
}

/// Default machine with the legacy unchecked behaviour.
pub fn legacy_machine() -> Result<Machine, MachineError> {
    Machine::new(MachineConfig::legacy())
}

/// Color for pixel `(x, y)`: red follows x, green follows y.
pub fn gradient(x: u32, y: u32) -> Color {
    Color::rgb((x * 4) as u8, (y * 2) as u8, 0x80)
}
