//! Surface materials.

use beam_math::Vec4;

/// RGBA color in linear float space.
pub type Color = Vec4;

/// Kind of surface response. Only flat diffuse surfaces exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialKind {
    #[default]
    Diffuse,
}

/// Material attached to every shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    /// Self-illumination intensity. Carried for shading, unused by intersection.
    pub emission: f32,
}

impl Material {
    pub fn new(kind: MaterialKind, color: Color, emission: f32) -> Self {
        Self {
            kind,
            color,
            emission,
        }
    }

    /// Create a diffuse material.
    pub fn diffuse(color: Color, emission: f32) -> Self {
        Self::new(MaterialKind::Diffuse, color, emission)
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission > 0.0
    }
}

impl Default for Material {
    /// Opaque white diffuse, no emission.
    fn default() -> Self {
        Self::diffuse(Color::ONE, 0.0)
    }
}
