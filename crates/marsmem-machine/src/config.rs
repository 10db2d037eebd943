//! Machine configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use marsmem_arena::ArenaConfig;
use marsmem_core::{BoundsMode, LayoutError, MemoryLayout};
use marsmem_display::DisplayConfig;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MachineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The memory layout is invalid.
    Layout(LayoutError),
    /// The initial display width is zero.
    ZeroDisplayWidth,
    /// A checked display cannot hold one row of the initial width.
    DisplayWidthTooLarge {
        /// Configured width.
        width: u32,
        /// Display capacity in elements.
        capacity: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::ZeroDisplayWidth => write!(f, "display_width must be at least 1"),
            Self::DisplayWidthTooLarge { width, capacity } => {
                write!(
                    f,
                    "display_width {width} exceeds display capacity of {capacity} pixels"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ── MachineConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing a [`Machine`](crate::Machine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineConfig {
    /// Memory map shared by the heap and the display.
    pub layout: MemoryLayout,
    /// Display width before any `configure_display` call. Default: 64.
    pub display_width: u32,
}

impl MachineConfig {
    /// Default memory map with the given bounds mode.
    pub fn new(bounds: BoundsMode) -> Self {
        Self::with_layout(MemoryLayout::new(bounds))
    }

    /// Use a custom memory map with the default display width.
    pub fn with_layout(layout: MemoryLayout) -> Self {
        Self {
            layout,
            display_width: DisplayConfig::DEFAULT_WIDTH,
        }
    }

    /// The legacy unchecked machine.
    pub fn legacy() -> Self {
        Self::with_layout(MemoryLayout::legacy())
    }

    /// Validate the layout, the heap placement and the initial display width.
    ///
    /// A heap ending exactly at the top of the address space is a valid
    /// region but not a valid arena, since the cursor of a full arena must
    /// stay representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        ArenaConfig::from_layout(&self.layout).validate()?;
        if self.display_width == 0 {
            return Err(ConfigError::ZeroDisplayWidth);
        }
        let capacity = self.layout.display.capacity;
        if self.layout.bounds.is_checked() && self.display_width > capacity {
            return Err(ConfigError::DisplayWidthTooLarge {
                width: self.display_width,
                capacity,
            });
        }
        Ok(())
    }

    /// Display configuration derived from this machine config.
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig::from_layout(&self.layout).with_width(self.display_width)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new(BoundsMode::Checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marsmem_core::Address;

    #[test]
    fn default_config_is_valid() {
        assert!(MachineConfig::default().validate().is_ok());
        assert!(MachineConfig::legacy().validate().is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let mut config = MachineConfig::default();
        config.display_width = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDisplayWidth));
    }

    #[test]
    fn oversized_width_rejected_only_when_checked() {
        let mut config = MachineConfig::default();
        config.display_width = MemoryLayout::DEFAULT_DISPLAY_CAPACITY + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DisplayWidthTooLarge { .. })
        ));
        config.layout.bounds = BoundsMode::Unchecked;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn layout_errors_are_wrapped() {
        let mut config = MachineConfig::default();
        config.layout.heap.capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Layout(LayoutError::EmptyRegion { .. }))
        ));
    }

    #[test]
    fn heap_ending_at_top_of_address_space_rejected() {
        let mut config = MachineConfig::default();
        config.layout.heap.base = Address(0xffff_fff0);
        config.layout.heap.capacity = 4;
        assert!(config.layout.validate().is_ok());
        assert_eq!(
            config.validate(),
            Err(ConfigError::Layout(LayoutError::RegionOverflow {
                name: MemoryLayout::HEAP_REGION.into(),
                base: Address(0xffff_fff0),
                capacity: 4,
            }))
        );
        config.layout.heap.capacity = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn display_config_carries_width_and_bounds() {
        let mut config = MachineConfig::legacy();
        config.display_width = 10;
        let display = config.display_config();
        assert_eq!(display.width, 10);
        assert_eq!(display.bounds, BoundsMode::Unchecked);
        assert_eq!(display.base, MemoryLayout::DEFAULT_DISPLAY_BASE);
    }
}
