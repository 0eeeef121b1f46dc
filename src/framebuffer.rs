use crate::color::Color;

/// A fixed-size grid of ARGB8888 pixels, addressed by (row, column).
///
/// Writes outside the grid are dropped, so shapes may be drawn partly or
/// entirely off-screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_argb(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn widthf(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn heightf(&self) -> f64 {
        f64::from(self.height)
    }

    #[allow(clippy::cast_sign_loss)]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= i64::from(self.height) || col >= i64::from(self.width) {
            return None;
        }

        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn set_pixel(&mut self, row: i64, col: i64, color: Color) {
        if let Some(idx) = self.index(row, col) {
            self.pixels[idx] = color.to_argb();
        }
    }

    pub fn pixel(&self, row: i64, col: i64) -> Option<Color> {
        self.index(row, col).map(|idx| Color::from_argb(self.pixels[idx]))
    }

    pub fn clear(&mut self) {
        self.fill(Color::BLACK);
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// Coordinates of every pixel currently holding `color`, in row-major order.
    #[allow(clippy::cast_possible_wrap)]
    pub fn pixels_with(&self, color: Color) -> impl Iterator<Item = (i64, i64)> + '_ {
        let argb = color.to_argb();
        let width = self.width as usize;

        self.pixels
            .iter()
            .enumerate()
            .filter(move |&(_, px)| *px == argb)
            .map(move |(idx, _)| ((idx / width) as i64, (idx % width) as i64))
    }
}
