use crate::color::Color;
use crate::vec::Vec2;

/// Color and outline thickness of a shape.
///
/// A thickness of 0 means a solid fill; anything above draws an outline that
/// many pixels wide in `color`. A negative thickness draws nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub thickness: f64,
}

impl Style {
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            thickness: 0.,
        }
    }

    /// # Panics
    ///
    /// In debug builds, if `thickness` is negative.
    pub fn outline(color: Color, thickness: f64) -> Self {
        debug_assert!(thickness >= 0., "negative outline thickness {thickness}");
        Self { color, thickness }
    }

    pub fn is_solid(&self) -> bool {
        self.thickness == 0.
    }
}

impl Default for Style {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

pub const DEFAULT_STYLE: Style = Style::solid(Color::WHITE);
pub const DEFAULT_DIRECTION: Vec2 = Vec2::UP;

/// Overrides applied once when a shape is constructed. Unset fields fall back
/// to [`DEFAULT_STYLE`] and [`DEFAULT_DIRECTION`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeOptions {
    pub style: Option<Style>,
    pub direction: Option<Vec2>,
}

impl ShapeOptions {
    pub fn with_style(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn direction(mut self, direction: Vec2) -> Self {
        self.direction = Some(direction);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_keeps_thickness() {
        let style = Style::outline(Color::RED, 2.5);

        assert_eq!(style.thickness, 2.5);
        assert!(!style.is_solid());
        assert!(Style::outline(Color::RED, 0.).is_solid());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative outline thickness")]
    fn negative_outline_is_rejected() {
        let _ = Style::outline(Color::RED, -1.);
    }

    #[test]
    fn options_fall_back_to_defaults() {
        let opts = ShapeOptions::default();

        assert_eq!(opts.style.unwrap_or_default(), DEFAULT_STYLE);
        assert_eq!(ShapeOptions::with_style(Style::solid(Color::RED)).direction, None);
    }
}
