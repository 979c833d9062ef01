use std::ops::{
    Add,
    Sub,
};
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{GeoError, GeoResult, Vector3d, parse_triple};
use crate::hooks::RenderHook;

/// A point in 3D space.
/// A location, not a displacement: points combine with vectors,
/// and the difference of two points is a `Vector3d`.
/// Immutable; every operation returns a new point.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point3d {
    x: f64,
    y: f64,
    z: f64,
}
impl Point3d {
    /// The origin.
    pub const ORIGIN: Point3d = Point3d{x: 0.0, y: 0.0, z: 0.0};

    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3d{x, y, z}
    }

    /// Create a point from the first three elements of a slice.
    /// Extra elements are ignored.
    pub fn with_components(cs: &[f64]) -> GeoResult<Self> {
        match cs {
            [x, y, z, ..] => Ok(Point3d{x: *x, y: *y, z: *z}),
            _ => Err(GeoError::TooFewComponents{found: cs.len()}),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Get the coordinates as `[x, y, z]`.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Send this point's coordinates to a rendering hook as a vertex.
    pub fn emit_vertex<H: RenderHook + ?Sized>(&self, hook: &mut H) {
        hook.emit_vertex(self.x, self.y, self.z);
    }

    /// Point-vector sum, yielding a point.
    pub fn plus(&self, offset: &Vector3d) -> Point3d {
        Point3d{
            x: self.x + offset.dx(),
            y: self.y + offset.dy(),
            z: self.z + offset.dz(),
        }
    }

    /// Point-point difference, yielding the vector from `other` to `self`.
    pub fn minus_point(&self, other: &Point3d) -> Vector3d {
        Vector3d::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }

    /// Point-vector difference, yielding a point.
    pub fn minus_vector(&self, offset: &Vector3d) -> Point3d {
        Point3d{
            x: self.x - offset.dx(),
            y: self.y - offset.dy(),
            z: self.z - offset.dz(),
        }
    }

    /// Get the squared distance between two points.
    pub fn dist2(&self, other: &Point3d) -> f64 {
        self.minus_point(other).norm2()
    }

    /// Get the distance between two points.
    pub fn dist(&self, other: &Point3d) -> f64 {
        self.dist2(other).sqrt()
    }

    /// Affine combination `(1-scalar)*self + scalar*other`.
    /// Not clamped: scalars outside [0, 1] extrapolate along the line.
    pub fn combo(&self, scalar: f64, other: &Point3d) -> Point3d {
        self.plus(&other.minus_point(self).times(scalar))
    }

    /// Iterated affine combination.
    /// Starting from `self`, each step moves the running point toward `others[i]`
    /// by the fraction `scalars[i]` of the remaining displacement.
    /// Only the first `min(scalars.len(), others.len())` terms are used.
    pub fn combos(&self, scalars: &[f64], others: &[Point3d]) -> Point3d {
        scalars.iter()
            .zip(others)
            .fold(*self, |p, (&scalar, other)| p.combo(scalar, other))
    }

    /// Sum of scaled offsets, all measured from `self`:
    /// `self + sum(scalars[i] * (others[i] - self))`.
    /// Only the first `min(scalars.len(), others.len())` terms are used.
    pub fn combo_sum(&self, scalars: &[f64], others: &[Point3d]) -> Point3d {
        scalars.iter()
            .zip(others)
            .fold(*self, |p, (&scalar, other)| p.plus(&other.minus_point(self).times(scalar)))
    }

    /// Componentwise maximum of two points' coordinates.
    /// A NaN coordinate on either side stays NaN.
    pub fn max(&self, other: &Point3d) -> Point3d {
        Point3d{
            x: nan_max(self.x, other.x),
            y: nan_max(self.y, other.y),
            z: nan_max(self.z, other.z),
        }
    }

    /// Componentwise minimum of two points' coordinates.
    /// A NaN coordinate on either side stays NaN.
    pub fn min(&self, other: &Point3d) -> Point3d {
        Point3d{
            x: nan_min(self.x, other.x),
            y: nan_min(self.y, other.y),
            z: nan_min(self.z, other.z),
        }
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

impl fmt::Display for Point3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl FromStr for Point3d {
    type Err = GeoError;

    /// Parse `x,y,z`.
    fn from_str(s: &str) -> GeoResult<Self> {
        let [x, y, z] = parse_triple(s)?;
        Ok(Point3d{x, y, z})
    }
}
impl From<[f64; 3]> for Point3d {
    fn from(cs: [f64; 3]) -> Self {
        Point3d{x: cs[0], y: cs[1], z: cs[2]}
    }
}
impl Add<Vector3d> for Point3d {
    type Output = Point3d;

    fn add(self, rhs: Vector3d) -> Point3d {
        self.plus(&rhs)
    }
}
impl Sub<Vector3d> for Point3d {
    type Output = Point3d;

    fn sub(self, rhs: Vector3d) -> Point3d {
        self.minus_vector(&rhs)
    }
}
impl Sub<Point3d> for Point3d {
    type Output = Vector3d;

    fn sub(self, rhs: Point3d) -> Vector3d {
        self.minus_point(&rhs)
    }
}
