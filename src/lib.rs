#![allow(clippy::missing_const_for_fn, clippy::must_use_candidate)]

//! Software 2D drawing into a pixel [`FrameBuffer`]: vectors, rectangles and
//! circles with solid or outlined styles, text labels and hover-aware buttons.
//!
//! Each frame the host polls input, calls [`Button::update`] on interactive
//! elements, draws everything into the frame buffer and presents it. With the
//! `window` feature an SDL2 host is included.

mod button;
mod circle;
mod color;
mod error;
mod framebuffer;
mod input;
mod rect;
mod shape;
mod style;
mod text;
mod vec;

#[cfg(feature = "window")]
pub mod key;
#[cfg(feature = "window")]
mod window;

pub use button::{Behaviour, Button, Callback};
pub use circle::Circle;
pub use color::Color;
pub use error::{Error, Result};
pub use framebuffer::FrameBuffer;
pub use input::{InputSnapshot, MouseInput, MouseState};
pub use rect::Rect;
pub use shape::{Hoverable, Shape, ShapeBase};
pub use style::{ShapeOptions, Style, DEFAULT_DIRECTION, DEFAULT_STYLE};
pub use text::{Alignment, BitmapFont, Text, TextRenderer};
pub use vec::Vec2;

#[cfg(feature = "window")]
pub use key::Key;
#[cfg(feature = "window")]
pub use window::{Event, MainLoop, Window, WindowConfig};
