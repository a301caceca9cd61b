// src/scene/part.rs
// A rigid object: meshes in local coordinates plus the transform that places them.

use serde::{Deserialize, Serialize};

use super::mesh::Mesh;
use super::transform;
use super::SceneError;
use crate::numerics::error::NumericsError;
use crate::numerics::types::kind::ElementKind;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::point::{check_point3, Point3};
use crate::numerics::types::vector::Vector;

/// Meshes are stored untransformed. World coordinates are
/// `position + rotation · scaling · vertex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartData", into = "PartData")]
pub struct Part {
    position: Point3,
    rotation: Matrix,
    scaling: Matrix,
    meshes: Vec<Mesh>,
}

impl Part {
    /// Part at the origin with no rotation and unit scale.
    pub fn new(meshes: Vec<Mesh>) -> Result<Self, SceneError> {
        Ok(Self {
            position: Vector::zero(3, ElementKind::Float32)?,
            rotation: Matrix::identity(3, 3, ElementKind::Float32)?,
            scaling: Matrix::identity(3, 3, ElementKind::Float32)?,
            meshes,
        })
    }

    pub fn position(&self) -> &Point3 {
        &self.position
    }

    pub fn rotation(&self) -> &Matrix {
        &self.rotation
    }

    pub fn scaling(&self) -> &Matrix {
        &self.scaling
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Moves the part within its parent's coordinate system.
    pub fn set_position(&mut self, position: Point3) -> Result<&mut Self, SceneError> {
        check_point3(&position)?;
        self.position = position;
        Ok(self)
    }

    /// Replaces the rotation; must be a 3x3 Float32 matrix.
    pub fn set_rotation(&mut self, rotation: Matrix) -> Result<&mut Self, SceneError> {
        check_linear(&rotation)?;
        self.rotation = rotation;
        Ok(self)
    }

    /// Rotation from angles in degrees about x, y and z.
    pub fn set_rotation_degrees(&mut self, x: f32, y: f32, z: f32) -> Result<&mut Self, SceneError> {
        self.rotation = transform::rotation_degrees(x, y, z)?;
        Ok(self)
    }

    pub fn set_scaling(&mut self, scaling: Matrix) -> Result<&mut Self, SceneError> {
        check_linear(&scaling)?;
        self.scaling = scaling;
        Ok(self)
    }

    /// Mesh `index` in local coordinates.
    pub fn local_mesh(&self, index: usize) -> Result<&Mesh, SceneError> {
        self.meshes.get(index).ok_or(SceneError::MeshIndexOutOfRange {
            index,
            count: self.meshes.len(),
        })
    }

    /// Mesh `index` scaled, rotated and then moved to the part's position.
    pub fn mesh(&self, index: usize) -> Result<Mesh, SceneError> {
        let linear = self.linear()?;
        self.local_mesh(index)?.transformed(&linear, &self.position)
    }

    pub fn world_meshes(&self) -> Result<Vec<Mesh>, SceneError> {
        let linear = self.linear()?;
        self.meshes
            .iter()
            .map(|mesh| mesh.transformed(&linear, &self.position))
            .collect()
    }

    fn linear(&self) -> Result<Matrix, NumericsError> {
        self.rotation.multiply_matrix(&self.scaling)
    }
}

/// Wire form of a `Part`, checked on the way back in.
#[derive(Serialize, Deserialize)]
struct PartData {
    position: Vector,
    rotation: Matrix,
    scaling: Matrix,
    meshes: Vec<Mesh>,
}

impl TryFrom<PartData> for Part {
    type Error = SceneError;

    fn try_from(data: PartData) -> Result<Self, SceneError> {
        check_point3(&data.position)?;
        check_linear(&data.rotation)?;
        check_linear(&data.scaling)?;
        Ok(Self {
            position: data.position,
            rotation: data.rotation,
            scaling: data.scaling,
            meshes: data.meshes,
        })
    }
}

impl From<Part> for PartData {
    fn from(part: Part) -> Self {
        Self {
            position: part.position,
            rotation: part.rotation,
            scaling: part.scaling,
            meshes: part.meshes,
        }
    }
}

fn check_linear(m: &Matrix) -> Result<(), NumericsError> {
    if m.kind() != ElementKind::Float32 {
        return Err(NumericsError::KindMismatch {
            expected: ElementKind::Float32,
            found: m.kind(),
        });
    }
    if m.shape() != (3, 3) {
        return Err(NumericsError::ShapeMismatch {
            expected: (3, 3),
            found: m.shape(),
        });
    }
    Ok(())
}
