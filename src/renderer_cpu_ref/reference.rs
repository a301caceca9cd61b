use std::path::Path;

use super::canvas::{Canvas, Color};
use super::projection::{ProjectionError, Projector};
use crate::config::{ConfigError, RenderConfig};
use crate::numerics::error::NumericsError;
use crate::numerics::types::kind::ElementKind;
use crate::numerics::types::point::point3;
use crate::numerics::types::vector::Vector;
use crate::scene::mesh::Mesh;
use crate::scene::{Scene, SceneError};

/// Half-length of each drawn coordinate axis, in world units.
pub const AXIS_LENGTH: f32 = 500.0;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Numerics error: {0}")]
    Numerics(#[from] NumericsError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Maps projected screen-plane points to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub center_origin: bool,
}

impl Viewport {
    pub fn of(canvas: &Canvas, center_origin: bool) -> Self {
        Self {
            width: canvas.width(),
            height: canvas.height(),
            center_origin,
        }
    }

    /// Continuous pixel coordinates of the 2-D Float32 point `p`; pixel
    /// `(x, y)` covers `[x, x + 1) x [y, y + 1)`.
    pub fn to_pixel_space(&self, p: &Vector) -> Result<[f64; 2], NumericsError> {
        let [x, y] = screen_xy(p)?;
        let (x, y) = (f64::from(x), f64::from(y));
        if self.center_origin {
            Ok([x + f64::from(self.width) / 2.0, f64::from(self.height) / 2.0 - y])
        } else {
            Ok([x, y])
        }
    }

    /// Pixel holding the 2-D Float32 point `p`.
    pub fn pixel(&self, p: &Vector) -> Result<(i64, i64), NumericsError> {
        let [x, y] = self.to_pixel_space(p)?;
        Ok((x.floor() as i64, y.floor() as i64))
    }
}

/// Draws a straight line between two projected points by walking unit
/// steps from `from` towards `to`. Both endpoints are painted. The segment
/// is clipped to the canvas first, so the walk never leaves it. Returns the
/// number of pixel writes that landed on the canvas.
pub fn draw_line(
    canvas: &mut Canvas,
    viewport: Viewport,
    from: &Vector,
    to: &Vector,
    color: Color,
) -> Result<usize, NumericsError> {
    let start = viewport.to_pixel_space(from)?;
    let end = viewport.to_pixel_space(to)?;
    if !start.iter().chain(&end).all(|c| c.is_finite()) {
        tracing::warn!(%from, %to, "skipping line with non-finite endpoints");
        return Ok(0);
    }
    if start == end {
        tracing::warn!(%from, "zero-length line");
    }
    let Some((start, end)) = clip_to_canvas(start, end, f64::from(viewport.width), f64::from(viewport.height)) else {
        return Ok(0);
    };

    let from = Vector::from_cells(vec![start[0] as f32, start[1] as f32])?;
    let to = Vector::from_cells(vec![end[0] as f32, end[1] as f32])?;
    let mut painted = 0;
    let mut plot = |canvas: &mut Canvas, p: &Vector| -> Result<(), NumericsError> {
        let [x, y] = screen_xy(p)?;
        if canvas.set(x.floor() as i64, y.floor() as i64, color) {
            painted += 1;
        }
        Ok(())
    };

    let delta = to.sub(&from)?;
    let length = delta.magnitude();
    if length >= 1.0 {
        let step = delta.unit()?;
        let mut p = from;
        for _ in 0..length.floor() as usize {
            plot(canvas, &p)?;
            p = p.add(&step)?;
        }
    }
    plot(canvas, &to)?;
    Ok(painted)
}

/// Liang-Barsky clip of a pixel-space segment to `[0, width] x [0, height]`.
fn clip_to_canvas(start: [f64; 2], end: [f64; 2], width: f64, height: f64) -> Option<([f64; 2], [f64; 2])> {
    let (dx, dy) = (end[0] - start[0], end[1] - start[1]);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, start[0]),
        (dx, width - start[0]),
        (-dy, start[1]),
        (dy, height - start[1]),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| [(start[0] + t * dx).clamp(0.0, width), (start[1] + t * dy).clamp(0.0, height)];
    Some((at(t0), at(t1)))
}

/// Outline of one triangle. Edges the projector cannot place are skipped.
pub fn draw_mesh(
    canvas: &mut Canvas,
    viewport: Viewport,
    projector: &Projector,
    mesh: &Mesh,
    color: Color,
) -> Result<usize, NumericsError> {
    let mut painted = 0;
    for (a, b) in mesh.edges() {
        if let Some((from, to)) = projector.project_segment(a, b)? {
            painted += draw_line(canvas, viewport, &from, &to, color)?;
        }
    }
    Ok(painted)
}

/// The three world axes out to `AXIS_LENGTH`: positive x, y and z in red,
/// green and blue, negative halves in grey.
pub fn draw_axes(canvas: &mut Canvas, viewport: Viewport, projector: &Projector) -> Result<usize, NumericsError> {
    let origin = Vector::zero(3, ElementKind::Float32)?;
    let l = AXIS_LENGTH;
    let axes = [
        (point3(l, 0.0, 0.0), Color::RED),
        (point3(-l, 0.0, 0.0), Color::GREY),
        (point3(0.0, l, 0.0), Color::GREEN),
        (point3(0.0, -l, 0.0), Color::GREY),
        (point3(0.0, 0.0, l), Color::BLUE),
        (point3(0.0, 0.0, -l), Color::GREY),
    ];

    let mut painted = 0;
    for (end, color) in axes {
        if let Some((from, to)) = projector.project_segment(&origin, &end)? {
            painted += draw_line(canvas, viewport, &from, &to, color)?;
        }
    }
    Ok(painted)
}

/// Renders the scene's wireframe into a fresh canvas.
pub fn render_frame(scene: &Scene, config: &RenderConfig) -> Result<Canvas, RenderError> {
    config.validate()?;

    let mut canvas = Canvas::new(config.width, config.height);
    canvas.clear(config.background);
    let viewport = Viewport::of(&canvas, config.center_origin);
    let projector = config.projection.projector(&config.camera)?;

    let mut painted = 0;
    if config.draw_axes {
        painted += draw_axes(&mut canvas, viewport, &projector)?;
    }
    let meshes = scene.world_meshes()?;
    for mesh in &meshes {
        painted += draw_mesh(&mut canvas, viewport, &projector, mesh, config.line_color)?;
    }

    tracing::debug!(
        scene = %scene.name,
        meshes = meshes.len(),
        painted,
        width = config.width,
        height = config.height,
        "rendered frame"
    );
    Ok(canvas)
}

/// Reference CPU renderer: draws the scene and writes it as a PNG.
pub fn render_frame_to_png(scene: &Scene, config: &RenderConfig, path: &Path) -> Result<(), RenderError> {
    let canvas = render_frame(scene, config)?;
    canvas.save_png(path)?;
    tracing::debug!(path = %path.display(), "saved frame");
    Ok(())
}

fn screen_xy(p: &Vector) -> Result<[f32; 2], NumericsError> {
    match p.as_slice::<f32>()? {
        [x, y] => Ok([*x, *y]),
        other => Err(NumericsError::DimensionMismatch {
            expected: 2,
            found: other.len(),
        }),
    }
}
