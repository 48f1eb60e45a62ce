//! A triangle with a color per vertex, interpolated across its face and
//! pulsing over time through a uniform.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram},
    config::Config,
    input::FrameContext,
    lessons::{Lesson, load_program},
    vertex::{COLORED_TRIANGLE, TRIANGLE_INDICES},
};

/// Brightness in `[0, 1]` following a sine wave over `seconds`.
pub fn pulse(seconds: f32) -> f32 {
    seconds.sin() / 2.0 + 0.5
}

pub struct Shaders {
    program: Option<ShaderProgram>,
    mesh: Mesh,
    pulse: f32,
}

impl Shaders {
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        let program = load_program(gl, config, "shaders");
        let mesh = Mesh::new(gl, &COLORED_TRIANGLE, &TRIANGLE_INDICES, glow::TRIANGLES)?;

        Ok(Self {
            program,
            mesh,
            pulse: pulse(0.0),
        })
    }
}

impl Lesson for Shaders {
    fn update(&mut self, ctx: &FrameContext) {
        self.pulse = pulse(ctx.elapsed);
    }

    fn render(&mut self, _gl: &glow::Context) {
        if let Some(program) = &self.program {
            program.use_program();
            program.set_uniform("u_pulse", self.pulse);
            self.mesh.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_range() {
        assert_eq!(pulse(0.0), 0.5);
        assert!((pulse(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!(pulse(3.0 * std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        for i in 0..100 {
            let value = pulse(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
