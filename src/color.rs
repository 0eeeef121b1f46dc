/// An RGBA color value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(0xff, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 0xff, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 0xff);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0);
    pub const GRAY: Self = Self::rgb(0x80, 0x80, 0x80);

    /// Packs into the ARGB8888 layout the frame buffer stores.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

impl From<u32> for Color {
    /// Treats the value as `0xRRGGBB`, fully opaque.
    fn from(rgb: u32) -> Self {
        Self::from_argb(rgb | 0xff_00_00_00)
    }
}
