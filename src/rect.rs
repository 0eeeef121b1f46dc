use crate::framebuffer::FrameBuffer;
use crate::shape::{Hoverable, Shape, ShapeBase};
use crate::style::{ShapeOptions, Style};
use crate::vec::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    base: ShapeBase,
}

impl Rect {
    pub fn new(width: f64, height: f64, pos: Vec2) -> Self {
        Self::with_options(width, height, pos, ShapeOptions::default())
    }

    pub fn with_options(width: f64, height: f64, pos: Vec2, opts: ShapeOptions) -> Self {
        Self {
            base: ShapeBase::new(width, height, pos, opts),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.base.style = style;
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.base.direction = direction;
        self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill(&self, buf: &mut FrameBuffer) {
        let x = self.base.pos.x.round() as i64;
        let y = self.base.pos.y.round() as i64;
        let w = self.base.width.round() as i64;
        let h = self.base.height.round() as i64;
        let color = self.base.style.color;

        // Both far edges are inclusive: a 2x2 rect covers 3x3 pixels.
        let cols = (-x).max(0)..=w.min(i64::from(buf.width()) - 1 - x);
        let rows = (-y).max(0)..=h.min(i64::from(buf.height()) - 1 - y);

        for i in cols {
            for j in rows.clone() {
                buf.set_pixel(y + j, x + i, color);
            }
        }
    }

    fn outline(&self, buf: &mut FrameBuffer) {
        let Vec2 { x, y } = self.base.pos;
        let (w, h) = (self.base.width, self.base.height);
        let t = self.base.style.thickness;
        let band = ShapeOptions::with_style(Style::solid(self.base.style.color));

        let edges = [
            Self::with_options(w, t, Vec2::new(x, y), band),
            Self::with_options(w, t, Vec2::new(x, y + h - t), band),
            Self::with_options(t, h, Vec2::new(x, y), band),
            Self::with_options(t, h, Vec2::new(x + w - t, y), band),
        ];

        for edge in &edges {
            edge.fill(buf);
        }
    }
}

impl Shape for Rect {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw(&self, buf: &mut FrameBuffer) {
        if self.base.style.is_solid() {
            self.fill(buf);
        } else {
            self.outline(buf);
        }
    }

    fn centre(&self) -> Vec2 {
        self.base.pos + Vec2::new(self.base.width / 2., self.base.height / 2.)
    }
}

impl Hoverable for Rect {
    fn is_within(&self, point: Vec2) -> bool {
        let Vec2 { x, y } = self.base.pos;

        point.x >= x
            && point.x <= x + self.base.width
            && point.y >= y
            && point.y <= y + self.base.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::DEFAULT_STYLE;

    #[test]
    fn solid_fill_is_inclusive() {
        let mut buf = FrameBuffer::new(10, 10);
        let rect = Rect::new(2., 2., Vec2::ZERO);

        rect.draw(&mut buf);

        let lit: Vec<_> = buf.pixels_with(Color::WHITE).collect();
        let expected: Vec<_> = (0..=2).flat_map(|r| (0..=2).map(move |c| (r, c))).collect();

        assert_eq!(lit, expected);
    }

    #[test]
    fn fill_rounds_position() {
        let mut buf = FrameBuffer::new(10, 10);

        Rect::new(0., 0., Vec2::new(3.6, 1.2)).draw(&mut buf);

        assert_eq!(buf.pixels_with(Color::WHITE).collect::<Vec<_>>(), [(1, 4)]);
    }

    #[test]
    fn outline_leaves_interior_empty() {
        let mut buf = FrameBuffer::new(20, 20);
        let rect = Rect::new(10., 8., Vec2::new(2., 3.)).with_style(Style::outline(Color::RED, 1.));

        rect.draw(&mut buf);

        // Corners and edges
        for (row, col) in [(3, 2), (3, 12), (11, 2), (11, 12), (3, 7), (11, 7), (7, 2), (7, 12)] {
            assert_eq!(buf.pixel(row, col), Some(Color::RED), "({row}, {col})");
        }

        // Each band is thickness + 1 pixels deep, the rest stays untouched.
        assert_eq!(buf.pixel(4, 7), Some(Color::RED));
        assert_eq!(buf.pixel(5, 7), Some(Color::BLACK));
        assert_eq!(buf.pixel(7, 6), Some(Color::BLACK));
        assert_eq!(buf.pixels_with(Color::WHITE).count(), 0);
    }

    #[test]
    fn draws_partially_offscreen() {
        let mut buf = FrameBuffer::new(4, 4);

        Rect::new(4., 4., Vec2::new(-2., -2.)).draw(&mut buf);

        assert_eq!(buf.pixels_with(Color::WHITE).count(), 9);
    }

    #[test]
    fn huge_rect_on_small_buffer() {
        let mut buf = FrameBuffer::new(10, 10);

        Rect::new(20_000., 20_000., Vec2::new(-10_000., -10_000.)).draw(&mut buf);
        assert_eq!(buf.pixels_with(Color::WHITE).count(), 100);

        buf.clear();
        Rect::new(20_000., 20_000., Vec2::new(-19_995., -19_995.)).draw(&mut buf);

        let lit: Vec<_> = buf.pixels_with(Color::WHITE).collect();
        let expected: Vec<_> = (0..=5).flat_map(|r| (0..=5).map(move |c| (r, c))).collect();
        assert_eq!(lit, expected);

        buf.clear();
        Rect::new(20_000., 20_000., Vec2::new(10., 0.)).draw(&mut buf);
        assert_eq!(buf.pixels_with(Color::WHITE).count(), 0);
    }

    #[test]
    fn negative_thickness_draws_nothing() {
        let mut buf = FrameBuffer::new(20, 20);
        let mut rect = Rect::new(10., 8., Vec2::new(2., 3.));

        rect.set_style(Style {
            color: Color::RED,
            thickness: -1.,
        });
        rect.draw(&mut buf);

        assert_eq!(buf.pixels_with(Color::RED).count(), 0);
    }

    #[test]
    fn containment_is_inclusive() {
        let rect = Rect::new(10., 5., Vec2::new(10., 10.));

        assert!(rect.is_within(Vec2::new(10., 10.)));
        assert!(rect.is_within(Vec2::new(20., 15.)));
        assert!(rect.is_within(Vec2::new(15., 12.)));
        assert!(!rect.is_within(Vec2::new(20.1, 12.)));
        assert!(!rect.is_within(Vec2::new(15., 9.9)));
    }

    #[test]
    fn centre_and_movement() {
        let mut rect = Rect::new(10., 4., Vec2::new(1., 1.));

        assert_eq!(rect.centre(), Vec2::new(6., 3.));

        rect.move_by(Vec2::new(2., -1.));
        assert_eq!(rect.pos(), Vec2::new(3., 0.));

        rect.set_pos(Vec2::ZERO);
        assert_eq!(rect.centre(), Vec2::new(5., 2.));
    }

    #[test]
    fn options_override_defaults() {
        let style = Style::outline(Color::BLUE, 2.);
        let rect = Rect::with_options(
            1.,
            1.,
            Vec2::ZERO,
            ShapeOptions::default().style(style).direction(Vec2::new(1., 0.)),
        );

        assert_eq!(rect.style(), style);
        assert_eq!(rect.direction(), Vec2::new(1., 0.));
        assert_eq!(Rect::new(1., 1., Vec2::ZERO).direction(), Vec2::UP);

        let turned = Rect::new(1., 1., Vec2::ZERO).with_direction(Vec2::new(-1., 0.));
        assert_eq!(turned.direction(), Vec2::new(-1., 0.));
        assert_eq!(turned.style(), DEFAULT_STYLE);
    }
}
