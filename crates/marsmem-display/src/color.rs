//! Packed `0x00RRGGBB` colors and the named palette.

use std::fmt;

/// A 32-bit packed color. The low 24 bits are `0xRRGGBB`; the top byte is
/// unused and stored unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// `0x00000000`
    pub const BLACK: Color = Color(0x0000_0000);
    /// `0x00ffffff`
    pub const WHITE: Color = Color(0x00ff_ffff);
    /// `0x00ff0000`
    pub const RED: Color = Color(0x00ff_0000);
    /// `0x0000ff00`
    pub const GREEN: Color = Color(0x0000_ff00);
    /// `0x000000ff`
    pub const BLUE: Color = Color(0x0000_00ff);
    /// `0x00ffff00`
    pub const YELLOW: Color = Color(0x00ff_ff00);
    /// `0x00ff00ff`
    pub const MAGENTA: Color = Color(0x00ff_00ff);

    /// The recognised palette, in declaration order.
    pub const PALETTE: [Color; 7] = [
        Self::BLACK,
        Self::WHITE,
        Self::RED,
        Self::GREEN,
        Self::BLUE,
        Self::YELLOW,
        Self::MAGENTA,
    ];

    /// Pack three channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The raw packed value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}
