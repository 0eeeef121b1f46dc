use std::ops::{Add, Mul, Neg, Sub};

/// Cartesian coordinates on a pixel grid, with Y growing downwards.
///
/// Used both as an absolute position and as a direction or displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0., 0.);
    pub const UP: Self = Self::new(0., -1.);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn mag(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector has no direction: its components come back as NaN and
    /// keep propagating through whatever uses them. Use
    /// [`Vec2::checked_normalise`] when the input may be zero.
    pub fn normalise(self) -> Self {
        let mag = self.mag();

        Self::new(self.x / mag, self.y / mag)
    }

    pub fn checked_normalise(self) -> Option<Self> {
        let mag = self.mag();

        if mag == 0. || !mag.is_finite() {
            return None;
        }

        Some(Self::new(self.x / mag, self.y / mag))
    }

    /// Rescales the vector to `new_mag`, keeping its direction. Same NaN caveat
    /// as [`Vec2::normalise`].
    pub fn set_mag(self, new_mag: f64) -> Self {
        let unit = self.normalise();

        Self::new(unit.x * new_mag, unit.y * new_mag)
    }

    /// Rotates by `theta` radians, positive angles turning x towards -y:
    /// `x' = x·cosθ + y·sinθ`, `y' = -x·sinθ + y·cosθ`.
    pub fn rotate(self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();

        Self::new(self.x * cos + self.y * sin, -self.x * sin + self.y * cos)
    }

    pub fn dist(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Signed difference between the polar angles of `self` and `other`.
    ///
    /// Not wrapped into (-π, π], so the result lies anywhere in (-2π, 2π).
    pub fn theta(self, other: Self) -> f64 {
        self.y.atan2(self.x) - other.y.atan2(other.x)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
