//! Errors surfaced by [`Machine`](crate::Machine) operations.

use std::error::Error;
use std::fmt;

use marsmem_arena::ArenaError;
use marsmem_core::MemoryError;
use marsmem_display::DisplayError;

use crate::config::ConfigError;

/// Any failure of a machine operation, tagged by the component that
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MachineError {
    /// Construction failed.
    Config(ConfigError),
    /// Heap allocation failed.
    Arena(ArenaError),
    /// Display configuration or pixel write failed.
    Display(DisplayError),
    /// A direct load or store failed.
    Memory(MemoryError),
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Memory(e) => write!(f, "memory: {e}"),
        }
    }
}

impl Error for MachineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Display(e) => Some(e),
            Self::Memory(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MachineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for MachineError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<DisplayError> for MachineError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

impl From<MemoryError> for MachineError {
    fn from(e: MemoryError) -> Self {
        Self::Memory(e)
    }
}
