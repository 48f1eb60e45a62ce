//! The textured rectangle moved to the bottom-right corner and spinning
//! around its own center.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::{
    config::Config,
    input::FrameContext,
    lessons::{Lesson, textures::TexturedQuad},
};

/// Translation to the bottom-right quadrant after a rotation of `seconds`
/// radians around the Z axis.
pub fn transform(seconds: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0)) * Mat4::from_rotation_z(seconds)
}

pub struct Transformations {
    quad: TexturedQuad,
    transform: Mat4,
}

impl Transformations {
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        Ok(Self {
            quad: TexturedQuad::new(gl, config, "transformations")?,
            transform: transform(0.0),
        })
    }
}

impl Lesson for Transformations {
    fn update(&mut self, ctx: &FrameContext) {
        self.quad.mix.update(ctx);
        self.transform = transform(ctx.elapsed);
    }

    fn render(&mut self, _gl: &glow::Context) {
        if let Some(program) = self.quad.prepare() {
            program.set_uniform("u_transform", self.transform);
            self.quad.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_at_rest() {
        let origin = transform(0.0).transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.5, -0.5, 0.0), 1e-6));
        let corner = transform(0.0).transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert!(corner.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_transform_rotates_before_translating() {
        let point = transform(std::f32::consts::FRAC_PI_2).transform_point3(Vec3::X);
        assert!(point.abs_diff_eq(Vec3::new(0.5, 0.5, 0.0), 1e-6));
    }

    #[test]
    fn test_transform_keeps_depth() {
        let point = transform(1.234).transform_point3(Vec3::new(0.3, -0.2, 0.0));
        assert!(point.z.abs() < 1e-6);
    }
}
