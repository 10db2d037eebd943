//! Row-major pixel addressing and writes.

use marsmem_core::{Address, BoundsMode, ElementWidth, MemoryBus};

use crate::color::Color;
use crate::config::DisplayConfig;
use crate::error::DisplayError;

/// A memory-mapped bitmap display.
///
/// Holds the display placement and the current row width. It owns no pixel
/// storage: pixels live in whatever [`MemoryBus`] is passed to
/// [`draw_pixel`](Self::draw_pixel), so changing the width never moves
/// pixels that were already written.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    base: Address,
    capacity: u32,
    element_width: ElementWidth,
    bounds: BoundsMode,
    width: u32,
}

impl Framebuffer {
    /// Create a display from a config, validating the region and width.
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayError> {
        config.region().validate(config.element_width)?;
        let mut fb = Self {
            base: config.base,
            capacity: config.capacity,
            element_width: config.element_width,
            bounds: config.bounds,
            width: DisplayConfig::DEFAULT_WIDTH,
        };
        fb.configure(config.width)?;
        Ok(fb)
    }

    /// Set the row width used by every later pixel operation.
    ///
    /// Zero is rejected. A checked display also rejects widths larger than
    /// its capacity, since no full row would fit.
    pub fn configure(&mut self, width: u32) -> Result<(), DisplayError> {
        if width == 0 {
            return Err(DisplayError::InvalidWidth);
        }
        if self.bounds.is_checked() && width > self.capacity {
            return Err(DisplayError::WidthExceedsCapacity {
                width,
                capacity: self.capacity,
            });
        }
        tracing::debug!(width, height = self.capacity / width, "display configured");
        self.width = width;
        Ok(())
    }

    /// Current row width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of complete rows that fit in the region at the current width.
    pub fn height(&self) -> u32 {
        self.capacity / self.width
    }

    /// Address of pixel `(0, 0)`.
    pub fn base(&self) -> Address {
        self.base
    }

    /// Region size in elements.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Bounds mode.
    pub fn bounds(&self) -> BoundsMode {
        self.bounds
    }

    /// Linear element offset of `(x, y)`: `x + y * width`.
    ///
    /// Computed in 64 bits, so it is exact for every `i32` pair.
    pub fn pixel_offset(&self, x: i32, y: i32) -> i64 {
        x as i64 + y as i64 * self.width as i64
    }

    /// Translate a pixel coordinate into a byte address.
    ///
    /// Checked displays reject negative coordinates, `x >= width`, and any
    /// pixel whose offset falls outside the region. A partial last row is
    /// therefore addressable even though [`height`](Self::height) only
    /// counts complete rows.
    ///
    /// Unchecked displays accept any coordinate whose address still lies in
    /// the 32-bit address space, including negative ones and ones that run
    /// past the region into neighbouring memory.
    pub fn pixel_address(&self, x: i32, y: i32) -> Result<Address, DisplayError> {
        if self.bounds.is_checked() {
            if x < 0
                || y < 0
                || x as u32 >= self.width
                || self.pixel_offset(x, y) >= self.capacity as i64
            {
                return Err(DisplayError::PixelOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height(),
                });
            }
        }
        self.base
            .offset_elements(self.pixel_offset(x, y), self.element_width)
            .ok_or(DisplayError::AddressOverflow { x, y })
    }

    /// Store `color` at pixel `(x, y)`, replacing whatever was there.
    pub fn draw_pixel<M>(
        &self,
        memory: &mut M,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), DisplayError>
    where
        M: MemoryBus + ?Sized,
    {
        let address = self.pixel_address(x, y)?;
        tracing::trace!(x, y, %address, %color, "draw pixel");
        memory.store_word(address, color.get())?;
        Ok(())
    }

    /// Load the color currently stored at pixel `(x, y)`.
    pub fn read_pixel<M>(&self, memory: &M, x: i32, y: i32) -> Result<Color, DisplayError>
    where
        M: MemoryBus + ?Sized,
    {
        let address = self.pixel_address(x, y)?;
        Ok(Color(memory.load_word(address)?))
    }

    /// Paint every pixel of the complete rows with `color`, row by row.
    pub fn fill<M>(&self, memory: &mut M, color: Color) -> Result<(), DisplayError>
    where
        M: MemoryBus + ?Sized,
    {
        for offset in 0..self.width as i64 * self.height() as i64 {
            let address = self
                .base
                .offset_elements(offset, self.element_width)
                .ok_or(DisplayError::AddressOverflow {
                    x: (offset % self.width as i64) as i32,
                    y: (offset / self.width as i64) as i32,
                })?;
            memory.store_word(address, color.get())?;
        }
        Ok(())
    }
}

impl Default for Framebuffer {
    /// The default display: 64 pixels wide at the default base.
    fn default() -> Self {
        let config = DisplayConfig::default();
        Self {
            base: config.base,
            capacity: config.capacity,
            element_width: config.element_width,
            bounds: config.bounds,
            width: config.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marsmem_test_utils::RecordingBus;

    fn fb(bounds: BoundsMode) -> Framebuffer {
        Framebuffer::new(DisplayConfig::new(Address(0x1000), 64 * 4).with_bounds(bounds)).unwrap()
    }

    // ── Addressing ──────────────────────────────────────────────

    #[test]
    fn origin_maps_to_base() {
        let f = fb(BoundsMode::Checked);
        assert_eq!(f.pixel_address(0, 0), Ok(Address(0x1000)));
    }

    #[test]
    fn row_major_offset_with_default_width() {
        let f = fb(BoundsMode::Checked);
        assert_eq!(f.width(), 64);
        assert_eq!(f.pixel_offset(3, 2), 131);
        assert_eq!(f.pixel_address(3, 2), Ok(Address(0x1000 + 131 * 4)));
    }

    #[test]
    fn configure_changes_later_addresses() {
        let mut f = fb(BoundsMode::Checked);
        f.configure(10).unwrap();
        assert_eq!(f.pixel_offset(2, 1), 12);
        assert_eq!(f.height(), 25);
    }

    #[test]
    fn zero_width_rejected() {
        let mut f = fb(BoundsMode::Unchecked);
        assert_eq!(f.configure(0), Err(DisplayError::InvalidWidth));
        assert_eq!(f.width(), 64);
    }

    #[test]
    fn checked_width_larger_than_region_rejected() {
        let mut f = fb(BoundsMode::Checked);
        assert!(matches!(
            f.configure(1000),
            Err(DisplayError::WidthExceedsCapacity { .. })
        ));
        let mut u = fb(BoundsMode::Unchecked);
        assert!(u.configure(1000).is_ok());
        assert_eq!(u.height(), 0);
    }

    // ── Bounds ──────────────────────────────────────────────────

    #[test]
    fn checked_rejects_out_of_range_pixels() {
        let f = fb(BoundsMode::Checked);
        for (x, y) in [(-1, 0), (0, -1), (64, 0), (0, 4)] {
            assert_eq!(
                f.pixel_address(x, y),
                Err(DisplayError::PixelOutOfBounds {
                    x,
                    y,
                    width: 64,
                    height: 4
                })
            );
        }
        assert!(f.pixel_address(63, 3).is_ok());
    }

    #[test]
    fn checked_partial_last_row_is_addressable() {
        let mut f = fb(BoundsMode::Checked);
        f.configure(100).unwrap();
        assert_eq!(f.height(), 2);
        // Offset 210 is past the two full rows but inside the 256-pixel region.
        assert_eq!(f.pixel_address(10, 2), Ok(Address(0x1000 + 210 * 4)));
        assert_eq!(f.pixel_address(55, 2), Ok(Address(0x1000 + 255 * 4)));
        assert_eq!(
            f.pixel_address(56, 2),
            Err(DisplayError::PixelOutOfBounds {
                x: 56,
                y: 2,
                width: 100,
                height: 2
            })
        );
    }

    #[test]
    fn unchecked_translates_any_coordinate() {
        let f = fb(BoundsMode::Unchecked);
        assert_eq!(f.pixel_address(64, 0), Ok(Address(0x1000 + 64 * 4)));
        assert_eq!(f.pixel_address(0, 4), Ok(Address(0x1000 + 256 * 4)));
        assert_eq!(f.pixel_address(-1, 0), Ok(Address(0x1000 - 4)));
    }

    #[test]
    fn unchecked_address_overflow_reported() {
        let f = fb(BoundsMode::Unchecked);
        assert_eq!(
            f.pixel_address(0, -100),
            Err(DisplayError::AddressOverflow { x: 0, y: -100 })
        );
        assert_eq!(
            f.pixel_address(i32::MAX, i32::MAX),
            Err(DisplayError::AddressOverflow {
                x: i32::MAX,
                y: i32::MAX
            })
        );
    }

    // ── Writes ──────────────────────────────────────────────────

    #[test]
    fn draw_pixel_stores_color_once() {
        let f = fb(BoundsMode::Checked);
        let mut bus = RecordingBus::new();
        f.draw_pixel(&mut bus, 0, 0, Color::RED).unwrap();
        assert_eq!(bus.stores(), &[(Address(0x1000), 0x00ff_0000)]);
    }

    #[test]
    fn last_write_wins() {
        let f = fb(BoundsMode::Checked);
        let mut bus = RecordingBus::new();
        f.draw_pixel(&mut bus, 5, 1, Color::RED).unwrap();
        f.draw_pixel(&mut bus, 5, 1, Color::BLUE).unwrap();
        assert_eq!(f.read_pixel(&bus, 5, 1), Ok(Color::BLUE));
    }

    #[test]
    fn rejected_pixel_performs_no_store() {
        let f = fb(BoundsMode::Checked);
        let mut bus = RecordingBus::new();
        assert!(f.draw_pixel(&mut bus, 64, 0, Color::WHITE).is_err());
        assert!(bus.stores().is_empty());
    }

    #[test]
    fn fill_covers_visible_area_only() {
        let mut f = fb(BoundsMode::Checked);
        f.configure(100).unwrap();
        let mut bus = RecordingBus::new();
        f.fill(&mut bus, Color::YELLOW).unwrap();
        // 256 / 100 = 2 full rows.
        assert_eq!(bus.stores().len(), 200);
        assert_eq!(bus.last_store(), Some((Address(0x1000 + 199 * 4), 0x00ff_ff00)));
    }

    #[test]
    fn draw_after_fill_replaces_one_pixel() {
        let f = fb(BoundsMode::Checked);
        let mut bus = RecordingBus::new();
        f.fill(&mut bus, Color::BLACK).unwrap();
        bus.clear_log();
        f.draw_pixel(&mut bus, 2, 3, Color::GREEN).unwrap();
        assert_eq!(bus.stores(), &[(Address(0x1000 + 194 * 4), 0x0000_ff00)]);
        assert_eq!(f.read_pixel(&bus, 2, 3), Ok(Color::GREEN));
        assert_eq!(f.read_pixel(&bus, 3, 3), Ok(Color::BLACK));
    }
}
