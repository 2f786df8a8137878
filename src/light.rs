use serde::{Deserialize, Serialize};

use crate::math::{radians, Vec3};
use crate::types::LightUniform;

/// Light source flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
}

/// Light component: Phong color triple, distance attenuation and spot shape.
///
/// Cutoff angles are stored in degrees and exported as cosines, which is what
/// the fragment path compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub kind: LightKind,

    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub intensity: f32,

    // point/spot attenuation
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,

    // spot cone, degrees
    pub cut_off: f32,
    pub outer_cut_off: f32,

    // directional/spot direction
    pub direction: Vec3,
}

impl Light {
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            ambient: Vec3::new(0.05, 0.05, 0.05),
            diffuse: Vec3::new(0.3, 0.3, 0.3),
            specular: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            cut_off: 12.5,
            outer_cut_off: 15.0,
            direction: Vec3::new(-0.2, -1.0, -0.3),
        }
    }

    /// Packs the light for uniform upload. `position` comes from the owning
    /// entity's transform; directional lights ignore it on the shader side.
    pub fn to_uniform(&self, position: Vec3) -> LightUniform {
        LightUniform {
            position: position.to_array(),
            kind: match self.kind {
                LightKind::Directional => 0.0,
                LightKind::Point => 1.0,
                LightKind::Spot => 2.0,
            },
            direction: self.direction.to_array(),
            constant: self.constant,
            ambient: self.ambient.to_array(),
            linear: self.linear,
            diffuse: (self.diffuse * self.intensity).to_array(),
            quadratic: self.quadratic,
            specular: self.specular.to_array(),
            cut_off: radians(self.cut_off).cos(),
            outer_cut_off: radians(self.outer_cut_off).cos(),
            _pad: [0.0; 3],
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(LightKind::Point)
    }
}
