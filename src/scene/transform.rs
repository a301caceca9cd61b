// src/scene/transform.rs
// 3x3 Float32 transform builders for placing parts.
//
// Rotations are right-handed and take radians unless the name says otherwise.

use crate::numerics::error::Result;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::point::{point3, Point3};

/// Rotation about the x axis.
pub fn rotation_x(radians: f32) -> Result<Matrix> {
    let (s, c) = radians.sin_cos();
    Matrix::from_rows(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, c, -s],
        vec![0.0, s, c],
    ])
}

/// Rotation about the y axis.
pub fn rotation_y(radians: f32) -> Result<Matrix> {
    let (s, c) = radians.sin_cos();
    Matrix::from_rows(vec![
        vec![c, 0.0, s],
        vec![0.0, 1.0, 0.0],
        vec![-s, 0.0, c],
    ])
}

/// Rotation about the z axis.
pub fn rotation_z(radians: f32) -> Result<Matrix> {
    let (s, c) = radians.sin_cos();
    Matrix::from_rows(vec![
        vec![c, -s, 0.0],
        vec![s, c, 0.0],
        vec![0.0, 0.0, 1.0],
    ])
}

/// Combined rotation `Rz · Ry · Rx`: x is applied first, z last.
pub fn rotation(x: f32, y: f32, z: f32) -> Result<Matrix> {
    rotation_z(z)?
        .multiply_matrix(&rotation_y(y)?)?
        .multiply_matrix(&rotation_x(x)?)
}

pub fn rotation_degrees(x: f32, y: f32, z: f32) -> Result<Matrix> {
    rotation(x.to_radians(), y.to_radians(), z.to_radians())
}

/// Axis-aligned scaling.
pub fn scaling(x: f32, y: f32, z: f32) -> Result<Matrix> {
    Matrix::from_rows(vec![
        vec![x, 0.0, 0.0],
        vec![0.0, y, 0.0],
        vec![0.0, 0.0, z],
    ])
}

/// Offsets are plain points; they are added after the linear part.
pub fn translation(x: f32, y: f32, z: f32) -> Point3 {
    point3(x, y, z)
}
