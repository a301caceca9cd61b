// src/config.rs
// Settings for the reference renderer.

use serde::{Deserialize, Serialize};

use crate::renderer_cpu_ref::canvas::Color;
use crate::renderer_cpu_ref::projection::{Camera, ProjectionMode};

/// Largest canvas side accepted by `RenderConfig::validate`.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Empty canvas: {width}x{height} has no pixels")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Canvas too large: {width}x{height} exceeds {max} pixels per side")]
    CanvasTooLarge { width: u32, height: u32, max: u32 },
}

/// Configuration for a rendered frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Colour of mesh edges
    pub line_color: Color,
    /// Colour the canvas is cleared to
    pub background: Color,
    pub projection: ProjectionMode,
    /// Viewpoint for `ProjectionMode::Perspective`
    pub camera: Camera,
    /// Put the world origin at the canvas centre with y pointing up.
    /// Otherwise projected coordinates are used as pixel positions directly.
    pub center_origin: bool,
    /// Draw the coordinate axes beneath the scene
    pub draw_axes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            line_color: Color::WHITE,
            background: Color::BLACK,
            projection: ProjectionMode::Oblique,
            camera: Camera::default(),
            center_origin: false,
            draw_axes: false,
        }
    }
}

impl RenderConfig {
    /// Small centred preview with axes, for quick inspection and tests
    pub fn thumbnail() -> Self {
        Self {
            width: 160,
            height: 120,
            center_origin: true,
            draw_axes: true,
            ..Self::default()
        }
    }

    /// Full HD frame
    pub fn high_resolution() -> Self {
        Self {
            width: 1920,
            height: 1080,
            center_origin: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(ConfigError::CanvasTooLarge {
                width,
                height,
                max: MAX_CANVAS_SIDE,
            });
        }
        Ok(())
    }
}
