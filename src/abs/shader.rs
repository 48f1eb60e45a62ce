//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs.

use std::{path::Path, sync::Arc};

use glam::{Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;

/// Returns a readable name for a shader stage constant.
pub fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        glow::GEOMETRY_SHADER => "geometry",
        _ => "unknown",
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
    shader_type: u32,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(format!(
                    "Failed to compile {} shader: {}",
                    stage_name(shader_type),
                    log.trim_end()
                ));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
                shader_type,
            })
        }
    }

    /// Reads GLSL source from `path` and compiles it.
    pub fn from_file(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        path: impl AsRef<Path>,
    ) -> Result<Self, String> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        log::debug!(
            "Compiling {} shader from {}",
            stage_name(shader_type),
            path.display()
        );
        Self::new(gl, shader_type, &source)
    }

    /// Returns the stage of this shader, e.g. [`glow::VERTEX_SHADER`].
    pub fn shader_type(&self) -> u32 {
        self.shader_type
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Sets the value of the uniform variable in the given shader program.
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str);
}

macro_rules! impl_uniform {
    ($ty:ty, |$gl:ident, $loc:ident, $value:ident| $body:expr) => {
        impl Uniform for $ty {
            fn set_uniform(&self, $gl: &glow::Context, program: glow::Program, name: &str) {
                unsafe {
                    let location = $gl.get_uniform_location(program, name);
                    if let Some($loc) = location {
                        let $value = self;
                        $body;
                    }
                }
            }
        }
    };
}

impl_uniform!(bool, |gl, loc, v| gl.uniform_1_i32(Some(&loc), *v as i32));
impl_uniform!(i32, |gl, loc, v| gl.uniform_1_i32(Some(&loc), *v));
impl_uniform!(f32, |gl, loc, v| gl.uniform_1_f32(Some(&loc), *v));
impl_uniform!(Vec2, |gl, loc, v| gl.uniform_2_f32(Some(&loc), v.x, v.y));
impl_uniform!(Vec3, |gl, loc, v| gl.uniform_3_f32(Some(&loc), v.x, v.y, v.z));
impl_uniform!(Vec4, |gl, loc, v| gl.uniform_4_f32(Some(&loc), v.x, v.y, v.z, v.w));
impl_uniform!(Mat4, |gl, loc, v| gl.uniform_matrix_4_f32_slice(Some(&loc), false, v.as_ref()));

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        (*self).set_uniform(gl, program, name);
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program()?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(format!("Failed to link shader program: {}", log.trim_end()));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles a vertex and fragment shader from source and links them.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, String> {
        let vert = Shader::new(gl, glow::VERTEX_SHADER, vertex_source)?;
        let frag = Shader::new(gl, glow::FRAGMENT_SHADER, fragment_source)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Compiles a vertex and fragment shader read from disk and links them.
    pub fn from_files(
        gl: &Arc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, String> {
        let vert = Shader::from_file(gl, glow::VERTEX_SHADER, vertex_path)?;
        let frag = Shader::from_file(gl, glow::FRAGMENT_SHADER, fragment_path)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program. The program must be in use.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        value.set_uniform(&self.gl, self.id, name);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(0), "unknown");
    }
}
