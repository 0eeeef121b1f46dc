use std::ffi::c_int;

/// An SDL keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub c_int);

const SCANCODE_MASK: c_int = 1 << 30;

impl Key {
    pub const RETURN: Self = Self(b'\r' as c_int);
    pub const ESCAPE: Self = Self(0x1b);
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self(b'\t' as c_int);
    pub const SPACE: Self = Self(b' ' as c_int);

    pub const RIGHT: Self = Self(79 | SCANCODE_MASK);
    pub const LEFT: Self = Self(80 | SCANCODE_MASK);
    pub const DOWN: Self = Self(81 | SCANCODE_MASK);
    pub const UP: Self = Self(82 | SCANCODE_MASK);

    /// Keycode of a printable ASCII key. SDL reports letters in lower case.
    pub const fn from_ascii(ch: u8) -> Self {
        Self(ch.to_ascii_lowercase() as c_int)
    }
}
