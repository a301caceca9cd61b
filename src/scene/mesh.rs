// src/scene/mesh.rs
// A single triangle of three 3-D Float32 vertices.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::SceneError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::point::{check_point3, Point3};
use crate::numerics::types::vector::Vector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[Vector; 3]", into = "[Vector; 3]")]
pub struct Mesh {
    vertices: [Point3; 3],
}

impl Mesh {
    /// Triangle from three points; each must be a 3-D Float32 vector.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self, SceneError> {
        let vertices = [a, b, c];
        for (vertex, point) in vertices.iter().enumerate() {
            check_point3(point).map_err(|reason| SceneError::NotAPoint { vertex, reason })?;
        }
        Ok(Self { vertices })
    }

    pub fn vertex(&self, index: usize) -> Result<&Point3, SceneError> {
        self.vertices.get(index).ok_or(SceneError::MeshIndexOutOfRange {
            index,
            count: self.vertices.len(),
        })
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Applies `matrix` to every vertex, then adds `offset`.
    pub fn transformed(&self, matrix: &Matrix, offset: &Vector) -> Result<Mesh, SceneError> {
        let [a, b, c] = &self.vertices;
        let place = |v: &Vector| -> Result<Vector, SceneError> {
            Ok(matrix.multiply_vector(v)?.add(offset)?)
        };
        Mesh::new(place(a)?, place(b)?, place(c)?)
    }

    /// The three edges in drawing order: a-b, b-c, c-a.
    pub fn edges(&self) -> [(&Point3, &Point3); 3] {
        let [a, b, c] = &self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

impl TryFrom<[Vector; 3]> for Mesh {
    type Error = SceneError;

    fn try_from([a, b, c]: [Vector; 3]) -> Result<Self, SceneError> {
        Mesh::new(a, b, c)
    }
}

impl From<Mesh> for [Vector; 3] {
    fn from(mesh: Mesh) -> Self {
        mesh.vertices
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.vertices;
        write!(f, "[{a} {b} {c}]")
    }
}
