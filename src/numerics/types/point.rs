// src/numerics/types/point.rs
// Point3 is a 3-D Float32 `Vector` used for positions in space.

use super::kind::ElementKind;
use super::vector::Vector;
use crate::numerics::error::{NumericsError, Result};

/// Point3 is an alias to Vector to represent points in space.
///
/// Scene code expects three `Float32` cells; `check_point3` enforces that.
pub type Point3 = Vector;

/// A Float32 point from its coordinates.
pub fn point3(x: f32, y: f32, z: f32) -> Point3 {
    Vector::from_xyz(x, y, z)
}

/// Fails unless `v` is a three-cell Float32 vector.
pub fn check_point3(v: &Vector) -> Result<()> {
    if v.kind() != ElementKind::Float32 {
        return Err(NumericsError::KindMismatch {
            expected: ElementKind::Float32,
            found: v.kind(),
        });
    }
    if v.dimension() != 3 {
        return Err(NumericsError::DimensionMismatch {
            expected: 3,
            found: v.dimension(),
        });
    }
    Ok(())
}

/// Coordinates of a checked point.
pub fn coordinates(v: &Vector) -> Result<[f32; 3]> {
    check_point3(v)?;
    let cells = v.as_slice::<f32>()?;
    Ok([cells[0], cells[1], cells[2]])
}

/// Right-handed cross product of two checked points.
pub fn cross(a: &Vector, b: &Vector) -> Result<Point3> {
    let [ax, ay, az] = coordinates(a)?;
    let [bx, by, bz] = coordinates(b)?;
    Ok(point3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx))
}
