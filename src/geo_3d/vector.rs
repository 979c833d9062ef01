use std::ops::{
    Add,
    Sub,
    Mul,
    Div,
    Neg,
};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{EPSILON3D, GeoError, GeoResult, parse_triple};
use crate::hooks::RenderHook;

/// A vector in 3D space.
/// A displacement or direction, never a location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Vector3d {
    dx: f64,
    dy: f64,
    dz: f64,
}
impl Vector3d {
    /// Unit vector along x.
    pub const X: Vector3d = Vector3d{dx: 1.0, dy: 0.0, dz: 0.0};
    /// Unit vector along y.
    pub const Y: Vector3d = Vector3d{dx: 0.0, dy: 1.0, dz: 0.0};
    /// Unit vector along z.
    pub const Z: Vector3d = Vector3d{dx: 0.0, dy: 0.0, dz: 1.0};

    /// Create a new vector.
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Vector3d{dx, dy, dz}
    }

    /// Create a vector from the first three elements of a slice.
    /// Extra elements are ignored.
    pub fn with_components(cs: &[f64]) -> GeoResult<Self> {
        match cs {
            [dx, dy, dz, ..] => Ok(Vector3d{dx: *dx, dy: *dy, dz: *dz}),
            _ => Err(GeoError::TooFewComponents{found: cs.len()}),
        }
    }

    /// Random direction, uniform over the unit sphere.
    /// Draws from the thread-local generator.
    pub fn random_unit() -> Self {
        Self::random_unit_with(&mut rand::thread_rng())
    }

    /// Random direction, uniform over the unit sphere, drawn from `rng`.
    /// The polar angle goes through `acos` so samples don't bunch at the poles.
    /// See http://mathworld.wolfram.com/SpherePointPicking.html
    pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let phi = rng.gen::<f64>() * PI * 2.0;
        let theta = (2.0 * rng.gen::<f64>() - 1.0).acos();
        Vector3d{
            dx: theta.sin() * phi.cos(),
            dy: theta.sin() * phi.sin(),
            dz: theta.cos(),
        }
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Get the components as `[dx, dy, dz]`.
    pub fn components(&self) -> [f64; 3] {
        [self.dx, self.dy, self.dz]
    }

    /// Send this vector's components to a rendering hook as a normal.
    pub fn emit_normal<H: RenderHook + ?Sized>(&self, hook: &mut H) {
        hook.emit_normal(self.dx, self.dy, self.dz);
    }

    pub fn plus(&self, other: &Vector3d) -> Vector3d {
        Vector3d{
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
            dz: self.dz + other.dz,
        }
    }

    pub fn minus(&self, other: &Vector3d) -> Vector3d {
        self.plus(&other.neg())
    }

    /// Same direction, scaled by `scalar`.
    pub fn times(&self, scalar: f64) -> Vector3d {
        Vector3d{
            dx: scalar * self.dx,
            dy: scalar * self.dy,
            dz: scalar * self.dz,
        }
    }

    /// Additive inverse.
    pub fn neg(&self) -> Vector3d {
        self.times(-1.0)
    }

    /// `self * (1 / scalar)`.
    /// A zero scalar gives infinite or NaN components.
    pub fn div(&self, scalar: f64) -> Vector3d {
        self.times(1.0 / scalar)
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &Vector3d) -> f64 {
        self.dx * other.dx + self.dy * other.dy + self.dz * other.dz
    }

    /// Get the right-handed cross product of two vectors.
    pub fn cross(&self, other: &Vector3d) -> Vector3d {
        Vector3d{
            dx: self.dy * other.dz - self.dz * other.dy,
            dy: self.dz * other.dx - self.dx * other.dz,
            dz: self.dx * other.dy - self.dy * other.dx,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm2(&self) -> f64 {
        self.dot(self)
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// Unit vector in the same direction.
    /// Vectors shorter than `EPSILON3D` have no usable direction and give `X` instead.
    pub fn unit(&self) -> Vector3d {
        let n = self.norm();
        if n < EPSILON3D {
            Vector3d::X
        } else {
            self.times(1.0 / n)
        }
    }
}
impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.dx, precision, self.dy, precision, self.dz)
    }
}
impl FromStr for Vector3d {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        let [dx, dy, dz] = parse_triple(s)?;
        Ok(Vector3d{dx, dy, dz})
    }
}
impl From<[f64; 3]> for Vector3d {
    fn from(cs: [f64; 3]) -> Self {
        Vector3d{dx: cs[0], dy: cs[1], dz: cs[2]}
    }
}
impl Add for Vector3d {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(&other)
    }
}
impl Sub for Vector3d {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.minus(&other)
    }
}
impl Mul<Vector3d> for f64 {
    type Output = Vector3d;

    fn mul(self, other: Vector3d) -> Vector3d {
        other.times(self)
    }
}
impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    fn mul(self, other: f64) -> Vector3d {
        self.times(other)
    }
}
impl Div<f64> for Vector3d {
    type Output = Vector3d;

    fn div(self, other: f64) -> Vector3d {
        Vector3d::div(&self, other)
    }
}
impl Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d::neg(&self)
    }
}
