//! An orange rectangle made of two indexed triangles, with the shaders
//! compiled from inline source.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram},
    lessons::Lesson,
    vertex::{RECTANGLE, RECTANGLE_INDICES},
};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 a_position;

void main() {
    gl_Position = vec4(a_position, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

pub struct HelloTriangle {
    program: Option<ShaderProgram>,
    mesh: Mesh,
}

impl HelloTriangle {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let program = match ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER) {
            Ok(program) => Some(program),
            Err(e) => {
                log::error!("{e}");
                None
            }
        };
        let mesh = Mesh::new(gl, &RECTANGLE, &RECTANGLE_INDICES, glow::TRIANGLES)?;

        Ok(Self { program, mesh })
    }
}

impl Lesson for HelloTriangle {
    fn render(&mut self, _gl: &glow::Context) {
        if let Some(program) = &self.program {
            program.use_program();
            self.mesh.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_sources() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core\n"));
        assert!(VERTEX_SHADER.contains("layout (location = 0) in vec3 a_position;"));
        assert!(FRAGMENT_SHADER.contains("vec4(1.0, 0.5, 0.2, 1.0)"));
    }
}
