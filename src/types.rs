//! GPU-facing uniform payloads. Plain `#[repr(C)]` Pod structs holding the
//! flat column-major floats the rendering backend uploads as-is.

use crate::math::Mat4;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View matrix, column-major.
    pub view: [f32; 16],
    pub position: [f32; 3],
    /// Field of view in degrees; the projection setup converts to radians.
    pub fov: f32,
}

/// Per-object model matrix for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    /// Model matrix, column-major.
    pub model: [f32; 16],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array(),
        }
    }
}

/// Light block for GPU, std140-style 16-byte rows
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    /// 0 = directional, 1 = point, 2 = spot.
    pub kind: f32,
    pub direction: [f32; 3],
    pub constant: f32,
    pub ambient: [f32; 3],
    pub linear: f32,
    /// Diffuse color premultiplied by intensity.
    pub diffuse: [f32; 3],
    pub quadratic: f32,
    pub specular: [f32; 3],
    /// Cosine of the inner spot cutoff angle.
    pub cut_off: f32,
    /// Cosine of the outer spot cutoff angle.
    pub outer_cut_off: f32,
    pub _pad: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_model_uniform_is_column_major() {
        let uniform = ModelUniform::new(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        // Translation lands in the last column: indices 12..15.
        assert_eq!(&uniform.model[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_uniform_sizes_are_upload_friendly() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightUniform>() % 16, 0);
    }

    #[test]
    fn test_uniforms_cast_to_bytes() {
        let uniform = ModelUniform::new(Mat4::IDENTITY);
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 64);
    }
}
