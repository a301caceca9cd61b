// src/renderer_cpu_ref/projection.rs
// Projections from world space (x right, y depth, z up) onto the screen plane.

use serde::{Deserialize, Serialize};

use crate::numerics::error::NumericsError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::point::{check_point3, cross, point3, Point3};
use crate::numerics::types::vector::Vector;

const COS_30: f32 = 0.866_025_4;
const SIN_30: f32 = 0.5;

/// Points closer to the camera plane than this, in world units, are not projected.
pub const NEAR_PLANE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("Numerics error: {0}")]
    Numerics(#[from] NumericsError),

    #[error("Camera position coincides with its look-at point")]
    CoincidentLookAt,

    #[error("Invalid focal length: {0} is not a positive finite number")]
    InvalidFocalLength(f32),

    #[error("No linear matrix: {0:?} projection divides by depth")]
    NotLinear(ProjectionMode),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Cabinet-style view: depth is drawn at 30 degrees, up and to the right.
    #[default]
    Oblique,
    /// Front view; depth is discarded.
    Orthographic,
    /// Pinhole view through the configured `Camera`.
    Perspective,
}

impl ProjectionMode {
    /// Float32 matrix mapping a 3-D point to screen `(x, y)`. Only the
    /// parallel projections have one.
    pub fn matrix(self) -> Result<Matrix, ProjectionError> {
        let rows = match self {
            ProjectionMode::Oblique => vec![vec![1.0, COS_30, 0.0], vec![0.0, SIN_30, 1.0]],
            ProjectionMode::Orthographic => vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]],
            ProjectionMode::Perspective => return Err(ProjectionError::NotLinear(self)),
        };
        Ok(Matrix::from_rows::<f32>(rows)?)
    }

    /// Projector for this mode. `camera` is only consulted in perspective.
    pub fn projector(self, camera: &Camera) -> Result<Projector, ProjectionError> {
        match self {
            ProjectionMode::Perspective => Ok(Projector::Perspective(camera.basis()?)),
            _ => Ok(Projector::Linear(self.matrix()?)),
        }
    }
}

/// Pinhole camera. The image plane sits `focal_length` in front of
/// `position`, so a point at that depth keeps its world size on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CameraData", into = "CameraData")]
pub struct Camera {
    position: Point3,
    look_at: Point3,
    focal_length: f32,
}

impl Camera {
    pub fn new(position: Point3, look_at: Point3, focal_length: f32) -> Result<Self, ProjectionError> {
        check_point3(&position)?;
        check_point3(&look_at)?;
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(ProjectionError::InvalidFocalLength(focal_length));
        }
        if look_at.sub(&position)?.magnitude() == 0.0 {
            return Err(ProjectionError::CoincidentLookAt);
        }
        Ok(Self {
            position,
            look_at,
            focal_length,
        })
    }

    pub fn position(&self) -> &Point3 {
        &self.position
    }

    pub fn look_at(&self) -> &Point3 {
        &self.look_at
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Orthonormal frame looking from `position` towards `look_at`, with
    /// screen up as close to world +z as the view direction allows.
    pub fn basis(&self) -> Result<ViewBasis, ProjectionError> {
        let forward = self.look_at.sub(&self.position)?.unit()?;
        let mut side = cross(&forward, &point3(0.0, 0.0, 1.0))?;
        if side.magnitude() < 1e-6 {
            // looking straight up or down
            side = cross(&forward, &point3(0.0, 1.0, 0.0))?;
        }
        let right = side.unit()?;
        let up = cross(&right, &forward)?;
        Ok(ViewBasis {
            origin: self.position.clone(),
            forward,
            right,
            up,
            focal_length: self.focal_length,
        })
    }
}

impl Default for Camera {
    /// In front of the origin on the -y axis, so the y = 0 plane is drawn
    /// at its world size.
    fn default() -> Self {
        Self {
            position: point3(0.0, -1000.0, 0.0),
            look_at: point3(0.0, 0.0, 0.0),
            focal_length: 1000.0,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CameraData {
    position: Vector,
    look_at: Vector,
    focal_length: f32,
}

impl TryFrom<CameraData> for Camera {
    type Error = ProjectionError;

    fn try_from(data: CameraData) -> Result<Self, ProjectionError> {
        Camera::new(data.position, data.look_at, data.focal_length)
    }
}

impl From<Camera> for CameraData {
    fn from(camera: Camera) -> Self {
        Self {
            position: camera.position,
            look_at: camera.look_at,
            focal_length: camera.focal_length,
        }
    }
}

/// Camera frame resolved for projecting many points.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBasis {
    origin: Point3,
    forward: Vector,
    right: Vector,
    up: Vector,
    focal_length: f32,
}

impl ViewBasis {
    /// Distance of `p` in front of the camera along the view direction.
    pub fn depth(&self, p: &Point3) -> Result<f64, NumericsError> {
        Ok(p.sub(&self.origin)?.dot(&self.forward)?.to_f64())
    }

    /// Screen `(x, y)` of `p`, or `None` when `p` is not in front of the camera.
    pub fn project(&self, p: &Point3) -> Result<Option<Vector>, NumericsError> {
        let offset = p.sub(&self.origin)?;
        let depth = offset.dot(&self.forward)?.to_f64();
        if !(depth > NEAR_PLANE) {
            return Ok(None);
        }
        let on_plane = offset.multiply_by_scalar((f64::from(self.focal_length) / depth) as f32)?;
        let x = on_plane.dot(&self.right)?.to_f64() as f32;
        let y = on_plane.dot(&self.up)?.to_f64() as f32;
        Ok(Some(Vector::from_cells(vec![x, y])?))
    }
}

/// Maps world points to the screen plane for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Projector {
    Linear(Matrix),
    Perspective(ViewBasis),
}

impl Projector {
    pub fn project(&self, p: &Point3) -> Result<Option<Vector>, NumericsError> {
        match self {
            Projector::Linear(m) => m.multiply_vector(p).map(Some),
            Projector::Perspective(basis) => basis.project(p),
        }
    }

    /// Projects both ends of a world segment. In perspective the part behind
    /// the near plane is cut away first; `None` when nothing is left.
    pub fn project_segment(&self, a: &Point3, b: &Point3) -> Result<Option<(Vector, Vector)>, NumericsError> {
        let basis = match self {
            Projector::Linear(m) => return Ok(Some((m.multiply_vector(a)?, m.multiply_vector(b)?))),
            Projector::Perspective(basis) => basis,
        };

        let (da, db) = (basis.depth(a)?, basis.depth(b)?);
        let near = NEAR_PLANE * 2.0;
        if !(da.max(db) > near) {
            return Ok(None);
        }
        let cut = |inside: &Point3, outside: &Point3, d_in: f64, d_out: f64| -> Result<Point3, NumericsError> {
            let t = ((d_in - near) / (d_in - d_out)) as f32;
            outside.sub(inside)?.multiply_by_scalar(t)?.add(inside)
        };
        let (a, b) = match (da > near, db > near) {
            (true, true) => (a.clone(), b.clone()),
            (true, false) => (a.clone(), cut(a, b, da, db)?),
            _ => (cut(b, a, db, da)?, b.clone()),
        };
        match (basis.project(&a)?, basis.project(&b)?) {
            (Some(from), Some(to)) => Ok(Some((from, to))),
            _ => Ok(None),
        }
    }
}
