use derive_more::derive::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{PhysicsError, Result};

/// Single precision 2d vector.
///
/// Rotations are in radians and positive angles turn anticlockwise,
/// so rotating [`Vector2::X`] by `PI / 2` yields [`Vector2::Y`]. The same
/// convention is used for torques and for placing a body's vertices in the world.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Basic constructor for when struct constructors are too inconvenient
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Set `x` and `y` to the same value
    pub const fn splat(arg: f32) -> Self {
        Self::new(arg, arg)
    }

    pub fn scale(self, factor: f32) -> Self {
        self * factor
    }

    pub fn mul_components(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    /// Divide by a scalar, refusing to produce infinities.
    pub fn checked_div(self, divisor: f32) -> Result<Self> {
        if divisor == 0.0 {
            return Err(PhysicsError::DivideByZero);
        }
        Ok(Self::new(self.x / divisor, self.y / divisor))
    }

    /// Component-wise division. Fails if either component of `rhs` is zero.
    pub fn checked_div_components(self, rhs: Self) -> Result<Self> {
        if rhs.x == 0.0 || rhs.y == 0.0 {
            return Err(PhysicsError::DivideByZero);
        }
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y))
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// The z component of the 3d cross product, equivalent to `self.perp().dot(rhs)`.
    pub fn perp_dot(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotated by a quarter turn anticlockwise.
    pub const fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Rotate around the origin by `theta` radians.
    pub fn rotate(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}
