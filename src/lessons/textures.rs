//! A rectangle sampling two textures, blended by a factor the user controls
//! with the arrow keys.

use std::sync::Arc;

use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    config::Config,
    input::FrameContext,
    lessons::{Lesson, load_program, load_texture},
    vertex::{RECTANGLE_INDICES, TEXTURED_RECTANGLE},
};

/// Blend factor between the two textures, kept within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixFactor(f32);

impl MixFactor {
    /// Change per frame while an arrow key is held.
    pub const STEP: f32 = 0.01;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Moves the factor by `delta`, saturating at the bounds.
    pub fn adjust(&mut self, delta: f32) {
        self.0 = (self.0 + delta).clamp(0.0, 1.0);
    }

    /// Raises the factor while Up is held and lowers it while Down is held.
    pub fn update(&mut self, ctx: &FrameContext) {
        if ctx.keyboard.is_down(Keycode::Up) {
            self.adjust(Self::STEP);
        }
        if ctx.keyboard.is_down(Keycode::Down) {
            self.adjust(-Self::STEP);
        }
    }
}

impl Default for MixFactor {
    fn default() -> Self {
        Self(0.2)
    }
}

/// The GPU objects shared by every lesson drawing the textured rectangle.
pub struct TexturedQuad {
    pub program: Option<ShaderProgram>,
    pub mesh: Mesh,
    pub container: Texture,
    pub face: Texture,
    pub mix: MixFactor,
}

impl TexturedQuad {
    pub fn new(gl: &Arc<glow::Context>, config: &Config, lesson: &str) -> Result<Self, String> {
        let program = load_program(gl, config, lesson);
        let mesh = Mesh::new(gl, &TEXTURED_RECTANGLE, &RECTANGLE_INDICES, glow::TRIANGLES)?;
        let container = load_texture(gl, &config.texture_path("container.jpg"))?;
        let face = load_texture(gl, &config.texture_path("awesomeface.png"))?;

        if let Some(program) = &program {
            program.use_program();
            program.set_uniform("u_texture1", 0);
            program.set_uniform("u_texture2", 1);
        }

        Ok(Self {
            program,
            mesh,
            container,
            face,
            mix: MixFactor::default(),
        })
    }

    /// Binds the program and textures and sets the mix uniform. Returns the
    /// program so callers can set more uniforms before [`TexturedQuad::draw`].
    pub fn prepare(&self) -> Option<&ShaderProgram> {
        let program = self.program.as_ref()?;
        program.use_program();
        program.set_uniform("u_mix", self.mix.value());
        self.container.bind(0);
        self.face.bind(1);
        Some(program)
    }

    pub fn draw(&self) {
        self.mesh.draw();
    }
}

pub struct Textures {
    quad: TexturedQuad,
}

impl Textures {
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        Ok(Self {
            quad: TexturedQuad::new(gl, config, "textures")?,
        })
    }
}

impl Lesson for Textures {
    fn update(&mut self, ctx: &FrameContext) {
        self.quad.mix.update(ctx);
    }

    fn render(&mut self, _gl: &glow::Context) {
        if self.quad.prepare().is_some() {
            self.quad.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyboardState;

    #[test]
    fn test_mix_factor_clamps() {
        let mut mix = MixFactor::new(0.995);
        mix.adjust(MixFactor::STEP);
        assert_eq!(mix.value(), 1.0);
        mix.adjust(-5.0);
        assert_eq!(mix.value(), 0.0);
        assert_eq!(MixFactor::new(-1.0).value(), 0.0);
        assert_eq!(MixFactor::new(2.0).value(), 1.0);
    }

    #[test]
    fn test_mix_factor_follows_arrow_keys() {
        let mut keyboard = KeyboardState::default();
        let mut mix = MixFactor::new(0.5);

        keyboard.press(Keycode::Up);
        for _ in 0..10 {
            mix.update(&FrameContext::new(&keyboard, 0.016, 0.0));
        }
        assert!((mix.value() - 0.6).abs() < 1e-5);

        keyboard.release(Keycode::Up);
        keyboard.press(Keycode::Down);
        for _ in 0..200 {
            mix.update(&FrameContext::new(&keyboard, 0.016, 0.0));
        }
        assert_eq!(mix.value(), 0.0);
    }
}
