//! tabula::scene - wireframe parts placed in 3-D space
//!
//! Public submodules:
//! - mesh (Mesh)
//! - part (Part)
//! - shape (Cuboid)
//! - transform (rotation, scaling and translation builders)

pub mod mesh;
pub mod part;
pub mod shape;
pub mod transform;

use serde::{Deserialize, Serialize};

use crate::numerics::error::NumericsError;

pub use mesh::Mesh;
pub use part::Part;
pub use shape::Cuboid;

/// Errors raised while building or transforming scene content.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("Numerics error: {0}")]
    Numerics(#[from] NumericsError),

    #[error("Non-positive size: {dimension} is {value}, sizes must be above zero")]
    NonPositiveSize { dimension: &'static str, value: f32 },

    #[error("Mesh index out of range: {index} is not below {count}")]
    MeshIndexOutOfRange { index: usize, count: usize },

    #[error("Not a point: vertex {vertex} is not a 3-D float32 vector ({reason})")]
    NotAPoint { vertex: usize, reason: NumericsError },
}

/// A named collection of parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    parts: Vec<Part>,
}

impl Scene {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parts: Vec::new(),
        }
    }

    /// Adds a part and returns its index.
    pub fn add_part(&mut self, part: Part) -> usize {
        self.parts.push(part);
        self.parts.len() - 1
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    pub fn mesh_count(&self) -> usize {
        self.parts.iter().map(Part::mesh_count).sum()
    }

    /// Every mesh of every part, placed in world coordinates.
    pub fn world_meshes(&self) -> Result<Vec<Mesh>, SceneError> {
        let mut meshes = Vec::with_capacity(self.mesh_count());
        for part in &self.parts {
            meshes.extend(part.world_meshes()?);
        }
        tracing::debug!(scene = %self.name, meshes = meshes.len(), "placed scene meshes");
        Ok(meshes)
    }
}
