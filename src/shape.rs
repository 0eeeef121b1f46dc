use crate::framebuffer::FrameBuffer;
use crate::style::{ShapeOptions, Style, DEFAULT_DIRECTION, DEFAULT_STYLE};
use crate::vec::Vec2;

/// Attributes every shape carries. Concrete shapes embed one of these and add
/// their own rasterization and containment rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeBase {
    pub pos: Vec2,
    pub direction: Vec2,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) style: Style,
}

impl ShapeBase {
    pub fn new(width: f64, height: f64, pos: Vec2, opts: ShapeOptions) -> Self {
        Self {
            pos,
            direction: opts.direction.unwrap_or(DEFAULT_DIRECTION),
            width,
            height,
            style: opts.style.unwrap_or(DEFAULT_STYLE),
        }
    }
}

/// Anything that can be positioned and drawn into a [`FrameBuffer`].
pub trait Shape {
    fn base(&self) -> &ShapeBase;
    fn base_mut(&mut self) -> &mut ShapeBase;

    fn draw(&self, buf: &mut FrameBuffer);

    /// Geometric centre, where labels attached to the shape are anchored.
    fn centre(&self) -> Vec2 {
        self.pos()
    }

    fn pos(&self) -> Vec2 {
        self.base().pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.base_mut().pos = pos;
    }

    fn move_by(&mut self, mov: Vec2) {
        let base = self.base_mut();
        base.pos = base.pos + mov;
    }

    fn width(&self) -> f64 {
        self.base().width
    }

    fn height(&self) -> f64 {
        self.base().height
    }

    fn direction(&self) -> Vec2 {
        self.base().direction
    }

    fn set_direction(&mut self, direction: Vec2) {
        self.base_mut().direction = direction;
    }

    fn style(&self) -> Style {
        self.base().style
    }

    fn set_style(&mut self, style: Style) {
        self.base_mut().style = style;
    }
}

/// Shapes that can tell whether a point lies inside them.
pub trait Hoverable: Shape {
    fn is_within(&self, point: Vec2) -> bool;
}
