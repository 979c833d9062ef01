//! Affine geometry in 3-space.
//! Points are locations, vectors are displacements between them.
//! The two are kept apart: a point minus a point is a vector,
//! a point plus a vector is a point, and nothing converts one into the other.

mod point;
mod vector;
mod proc_errors;

pub use point::Point3d;
pub use vector::Vector3d;
pub use proc_errors::{
    GeoError,
    GeoResult,
    err_str,
};

/// Lengths below this are treated as zero by `Vector3d::unit`.
pub const EPSILON3D: f64 = 1e-8;

/// The origin, (0, 0, 0).
pub fn origin_3d() -> Point3d {
    Point3d::ORIGIN
}

/// Unit vector along x.
pub fn x_vector_3d() -> Vector3d {
    Vector3d::X
}

/// Unit vector along y.
pub fn y_vector_3d() -> Vector3d {
    Vector3d::Y
}

/// Unit vector along z.
pub fn z_vector_3d() -> Vector3d {
    Vector3d::Z
}

/// Axis-aligned bounding box of a set of points, as its `(min, max)` corners.
pub fn bounding_box(points: &[Point3d]) -> GeoResult<(Point3d, Point3d)> {
    let (first, rest) = match points.split_first() {
        Some(split) => split,
        None => return err_str("Cannot bound an empty set of points"),
    };
    Ok(rest.iter().fold((*first, *first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}

/// Parse a comma-separated triple such as `1,-2.5,3`.
fn parse_triple(s: &str) -> GeoResult<[f64; 3]> {
    let mut values = Vec::with_capacity(3);
    for field in s.split(',') {
        match field.trim().parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => return err_str(&format!("Invalid coordinate \"{}\" in \"{}\"", field.trim(), s)),
        }
    }
    match values.len() {
        3 => Ok([values[0], values[1], values[2]]),
        found if found < 3 => Err(GeoError::TooFewComponents{found}),
        found => err_str(&format!("Expected 3 components, found {} in \"{}\"", found, s)),
    }
}
