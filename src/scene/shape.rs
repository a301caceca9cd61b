// src/scene/shape.rs
// Ready-made parts.

use serde::{Deserialize, Serialize};

use super::mesh::Mesh;
use super::part::Part;
use super::SceneError;
use crate::numerics::types::point::point3;

/// Box standing on the xz plane, centred on the y axis, `height` tall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CuboidData", into = "CuboidData")]
pub struct Cuboid {
    width: f32,
    depth: f32,
    height: f32,
    part: Part,
}

impl Cuboid {
    /// Twelve triangles, two per face. Sizes must be positive.
    pub fn new(width: f32, depth: f32, height: f32) -> Result<Self, SceneError> {
        check_sizes(width, depth, height)?;

        let (w, d) = (width / 2.0, depth / 2.0);
        // front/back along z, bottom/top along y, left/right along x
        let fbl = point3(-w, 0.0, -d);
        let bbl = point3(-w, 0.0, d);
        let bbr = point3(w, 0.0, d);
        let fbr = point3(w, 0.0, -d);
        let ftl = point3(-w, height, -d);
        let btl = point3(-w, height, d);
        let btr = point3(w, height, d);
        let ftr = point3(w, height, -d);

        let faces = [
            // bottom
            [&fbl, &bbl, &fbr],
            [&bbl, &bbr, &fbr],
            // top
            [&ftl, &btl, &ftr],
            [&btl, &btr, &ftr],
            // left
            [&fbl, &bbl, &btl],
            [&fbl, &ftl, &btl],
            // right
            [&fbr, &bbr, &btr],
            [&fbr, &ftr, &btr],
            // front
            [&fbl, &ftl, &ftr],
            [&fbl, &fbr, &ftr],
            // back
            [&bbl, &btl, &btr],
            [&bbl, &bbr, &btr],
        ];
        let meshes = faces
            .into_iter()
            .map(|[a, b, c]| Mesh::new(a.clone(), b.clone(), c.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(width, depth, height, "cuboid");
        Ok(Self {
            width,
            depth,
            height,
            part: Part::new(meshes)?,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn part(&self) -> &Part {
        &self.part
    }

    pub fn part_mut(&mut self) -> &mut Part {
        &mut self.part
    }

    pub fn into_part(self) -> Part {
        self.part
    }
}

fn check_sizes(width: f32, depth: f32, height: f32) -> Result<(), SceneError> {
    for (dimension, value) in [("width", width), ("depth", depth), ("height", height)] {
        if value.is_nan() || value <= 0.0 {
            return Err(SceneError::NonPositiveSize { dimension, value });
        }
    }
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct CuboidData {
    width: f32,
    depth: f32,
    height: f32,
    part: Part,
}

impl TryFrom<CuboidData> for Cuboid {
    type Error = SceneError;

    fn try_from(data: CuboidData) -> Result<Self, SceneError> {
        check_sizes(data.width, data.depth, data.height)?;
        Ok(Self {
            width: data.width,
            depth: data.depth,
            height: data.height,
            part: data.part,
        })
    }
}

impl From<Cuboid> for CuboidData {
    fn from(cuboid: Cuboid) -> Self {
        Self {
            width: cuboid.width,
            depth: cuboid.depth,
            height: cuboid.height,
            part: cuboid.part,
        }
    }
}
