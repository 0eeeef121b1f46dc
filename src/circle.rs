use std::ops::RangeInclusive;

use crate::error::{Error, Result};
use crate::framebuffer::FrameBuffer;
use crate::shape::{Hoverable, Shape, ShapeBase};
use crate::style::{ShapeOptions, Style};
use crate::vec::Vec2;

/// Circle anchored at its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    base: ShapeBase,
}

impl Circle {
    pub fn new(diameter: f64, pos: Vec2) -> Self {
        Self::with_options(diameter, pos, ShapeOptions::default())
    }

    pub fn with_options(diameter: f64, pos: Vec2, opts: ShapeOptions) -> Self {
        Self {
            base: ShapeBase::new(diameter, diameter, pos, opts),
        }
    }

    /// Builds a circle from a separate width and height, which must be equal.
    pub fn from_size(width: f64, height: f64, pos: Vec2, opts: ShapeOptions) -> Result<Self> {
        if width != height {
            return Err(Error::UnequalCircleSize { width, height });
        }

        Ok(Self::with_options(width, pos, opts))
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.base.style = style;
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.base.direction = direction;
        self
    }

    pub fn diameter(&self) -> f64 {
        self.base.width
    }

    pub fn radius(&self) -> f64 {
        self.base.width / 2.
    }

    pub fn set_diameter(&mut self, diameter: f64) {
        self.base.width = diameter;
        self.base.height = diameter;
    }

    /// Point on the perimeter `theta` radians away from the circle's facing
    /// direction, turning the same way as [`Vec2::rotate`].
    pub fn edge_point(&self, theta: f64) -> Vec2 {
        self.base.pos + self.base.direction.set_mag(self.radius()).rotate(theta)
    }
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    /// # Panics
    ///
    /// If the width and height have diverged.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn draw(&self, buf: &mut FrameBuffer) {
        let ShapeBase {
            pos, width, height, ..
        } = self.base;

        assert!(
            width == height,
            "circle width and height must match (w: {width}, h: {height})"
        );

        let radius = width / 2.;
        let inner = radius - self.base.style.thickness;
        let solid = self.base.style.is_solid();
        let color = self.base.style.color;
        let corner = pos - Vec2::new(radius, radius);

        let cols = visible_steps(corner.x, width, buf.width());
        let rows = visible_steps(corner.y, height, buf.height());

        // Samples stay on the grid `corner + k` whatever part is visible.
        for k in cols {
            let i = corner.x + k as f64;

            for l in rows.clone() {
                let j = corner.y + l as f64;
                let dist = pos.dist(Vec2::new(i, j));
                let hit = dist <= radius && (solid || dist >= inner);

                if hit {
                    buf.set_pixel(j.round() as i64, i.round() as i64, color);
                }
            }
        }
    }
}

/// Unit steps `k` from `start` whose sample `start + k` can round into
/// `0..limit`, capped at `extent`. One step of slack on each side.
#[allow(clippy::cast_possible_truncation)]
fn visible_steps(start: f64, extent: f64, limit: u32) -> RangeInclusive<i64> {
    let first = (-start).floor() as i64 - 1;
    let last = (f64::from(limit) - start).ceil() as i64 + 1;

    first.max(0)..=last.min(extent.floor() as i64)
}

impl Hoverable for Circle {
    fn is_within(&self, point: Vec2) -> bool {
        self.base.pos.dist(point) <= self.radius()
    }
}
