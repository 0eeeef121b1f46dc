use std::path::{Path, PathBuf};

use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight};

use crate::color::Color;
use crate::framebuffer::FrameBuffer;
use crate::vec::Vec2;

/// Where a label's text block sits relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Centre,
    TopLeft,
    TopCentre,
    /// Top-left corner at position + offset.
    Custom,
}

/// A text label. Glyph output is done by a [`TextRenderer`]; the label itself
/// only carries text, geometry and font settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: String,
    pos: Vec2,
    offset: Vec2,
    alignment: Alignment,
    color: Color,
    font: PathBuf,
    dpi: f64,
    size: f64,
    spacing: f64,
    mask_size: (u32, u32),
}

impl Text {
    pub fn new(text: impl Into<String>, pos: Vec2, font: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            pos,
            offset: Vec2::ZERO,
            alignment: Alignment::default(),
            color: Color::WHITE,
            font: font.into(),
            dpi: 72.,
            size: 16.,
            spacing: 1.,
            mask_size: (1000, 1000),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn font(&self) -> &Path {
        &self.font
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn mask_size(&self) -> (u32, u32) {
        self.mask_size
    }

    /// Font size converted to pixels at the label's DPI.
    pub fn pixel_size(&self) -> f64 {
        self.size * self.dpi / 72.
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn move_by(&mut self, mov: Vec2) {
        self.pos = self.pos + mov;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_font(&mut self, font: impl Into<PathBuf>) {
        self.font = font.into();
    }

    pub fn set_dpi(&mut self, dpi: f64) {
        self.dpi = dpi;
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    pub fn set_mask_size(&mut self, width: u32, height: u32) {
        self.mask_size = (width, height);
    }

    /// Top-left corner of a text block of the given extent.
    pub fn origin(&self, extent: Vec2) -> Vec2 {
        match self.alignment {
            Alignment::Centre => self.pos - extent * 0.5,
            Alignment::TopLeft => self.pos,
            Alignment::TopCentre => self.pos - Vec2::new(extent.x / 2., 0.),
            Alignment::Custom => self.pos + self.offset,
        }
    }

    pub fn draw(&self, buf: &mut FrameBuffer) {
        self.draw_with(buf, &BitmapFont);
    }

    pub fn draw_with(&self, buf: &mut FrameBuffer, renderer: &dyn TextRenderer) {
        if self.text.is_empty() {
            return;
        }

        renderer.render(buf, self);
    }
}

/// Turns a [`Text`] into pixels.
pub trait TextRenderer {
    /// Width and height of the rendered block.
    fn measure(&self, text: &Text) -> Vec2;

    fn render(&self, buf: &mut FrameBuffer, text: &Text);
}

/// Monospace bitmap renderer built into the crate.
///
/// Uses a single embedded face, so the label's font path is not consulted.
/// The pixel size snaps to the nearest available raster height and glyph
/// coverage is thresholded rather than blended.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

const WEIGHT: FontWeight = FontWeight::Regular;
const COVERAGE_THRESHOLD: u8 = 0x80;

impl BitmapFont {
    fn raster_height(text: &Text) -> RasterHeight {
        const HEIGHTS: [RasterHeight; 4] = [
            RasterHeight::Size16,
            RasterHeight::Size20,
            RasterHeight::Size24,
            RasterHeight::Size32,
        ];

        let px = text.pixel_size();

        HEIGHTS
            .into_iter()
            .min_by(|a, b| {
                let da = (a.val() as f64 - px).abs();
                let db = (b.val() as f64 - px).abs();
                da.total_cmp(&db)
            })
            .unwrap_or(RasterHeight::Size16)
    }

    #[allow(clippy::cast_precision_loss)]
    fn line_height(text: &Text, height: RasterHeight) -> f64 {
        (height.val() as f64 * text.spacing()).round()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_char(
        buf: &mut FrameBuffer,
        text: &Text,
        height: RasterHeight,
        origin: (i64, i64),
        at: (i64, i64),
        ch: char,
    ) {
        let Some(glyph) = get_raster(ch, WEIGHT, height).or_else(|| get_raster('?', WEIGHT, height))
        else {
            return;
        };

        let (mask_w, mask_h) = text.mask_size();

        for (y, row) in glyph.raster().iter().enumerate() {
            for (x, &coverage) in row.iter().enumerate() {
                if coverage < COVERAGE_THRESHOLD {
                    continue;
                }

                let rel_x = at.0 + x as i64;
                let rel_y = at.1 + y as i64;

                if rel_x >= i64::from(mask_w) || rel_y >= i64::from(mask_h) {
                    continue;
                }

                buf.set_pixel(origin.1 + rel_y, origin.0 + rel_x, text.color());
            }
        }
    }
}

impl TextRenderer for BitmapFont {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &Text) -> Vec2 {
        let height = Self::raster_height(text);
        let char_width = get_raster_width(WEIGHT, height) as f64;
        let lines = text.text().lines().count().max(1);
        let longest = text.text().lines().map(|l| l.chars().count()).max().unwrap_or(0);

        Vec2::new(
            longest as f64 * char_width,
            lines as f64 * Self::line_height(text, height),
        )
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&self, buf: &mut FrameBuffer, text: &Text) {
        let height = Self::raster_height(text);
        let char_width = get_raster_width(WEIGHT, height) as i64;
        let line_height = Self::line_height(text, height) as i64;
        let origin = text.origin(self.measure(text));
        let origin = (origin.x.round() as i64, origin.y.round() as i64);

        for (line_no, line) in text.text().lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let at = (col as i64 * char_width, line_no as i64 * line_height);
                let ch = if ch.is_ascii() { ch } else { '?' };

                Self::render_char(buf, text, height, origin, at, ch);
            }
        }
    }
}
