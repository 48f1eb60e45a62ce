//! Module providing the [`Lesson`] trait, the shared render loop and all
//! lesson implementations.

use std::{path::Path, sync::Arc, time::Instant};

use glow::HasContext;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

use crate::{
    abs::{App, ShaderProgram, Texture, checkerboard},
    config::Config,
    input::{FrameContext, KeyboardState},
};

pub mod hello_triangle;
pub mod shaders;
pub mod textures;
pub mod transformations;

/// A single tutorial program: owns its GPU objects and draws one frame at a time.
pub trait Lesson {
    /// Updates the lesson state from input and time.
    fn update(&mut self, _ctx: &FrameContext) {}

    /// Draws the lesson. The framebuffer has already been cleared.
    fn render(&mut self, gl: &glow::Context);
}

/// The available lessons, in tutorial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonKind {
    HelloTriangle,
    Shaders,
    Textures,
    Transformations,
}

impl LessonKind {
    pub const ALL: [LessonKind; 4] = [
        LessonKind::HelloTriangle,
        LessonKind::Shaders,
        LessonKind::Textures,
        LessonKind::Transformations,
    ];

    /// The lesson's name, also used as its shader directory.
    pub fn name(self) -> &'static str {
        match self {
            LessonKind::HelloTriangle => "hello_triangle",
            LessonKind::Shaders => "shaders",
            LessonKind::Textures => "textures",
            LessonKind::Transformations => "transformations",
        }
    }

    /// Creates the lesson's GPU resources.
    pub fn build(self, gl: &Arc<glow::Context>, config: &Config) -> Result<Box<dyn Lesson>, String> {
        Ok(match self {
            LessonKind::HelloTriangle => Box::new(hello_triangle::HelloTriangle::new(gl)?),
            LessonKind::Shaders => Box::new(shaders::Shaders::new(gl, config)?),
            LessonKind::Textures => Box::new(textures::Textures::new(gl, config)?),
            LessonKind::Transformations => {
                Box::new(transformations::Transformations::new(gl, config)?)
            }
        })
    }
}

impl std::str::FromStr for LessonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|kind| kind.name()).collect();
                format!("Unknown lesson '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Runs the render loop until the window is closed or Escape is pressed.
pub fn run(app: &mut App, lesson: &mut dyn Lesson, config: &Config) {
    let [r, g, b, a] = config.clear_color;
    let mut keyboard = KeyboardState::default();
    let mut wireframe = false;

    let start = Instant::now();
    let mut last_frame_time = start;

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        keyboard.begin_frame();
        for event in app.event_pump.poll_iter() {
            keyboard.handle_event(&event);
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    log::debug!("Framebuffer resized to {width}x{height}");
                    unsafe {
                        app.gl.viewport(0, 0, width as i32, height as i32);
                    }
                }
                _ => {}
            }
        }

        if keyboard.close_requested() {
            break 'running;
        }

        if keyboard.was_pressed(Keycode::Tab) {
            wireframe = !wireframe;
            unsafe {
                app.gl.polygon_mode(
                    glow::FRONT_AND_BACK,
                    if wireframe { glow::LINE } else { glow::FILL },
                );
            }
        }

        let ctx = FrameContext::new(
            &keyboard,
            delta_time,
            now.duration_since(start).as_secs_f32(),
        );
        lesson.update(&ctx);

        unsafe {
            app.gl.clear_color(r, g, b, a);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        lesson.render(&app.gl);

        app.window.gl_swap_window();
    }

    log::info!("Render loop finished after {:.1}s", start.elapsed().as_secs_f32());
}

/// Copies of the shader files, used when the files on disk are missing or broken.
pub fn builtin_shaders(lesson: &str) -> Option<(&'static str, &'static str)> {
    match lesson {
        "shaders" => Some((
            include_str!("../../shaders/shaders/vert.glsl"),
            include_str!("../../shaders/shaders/frag.glsl"),
        )),
        "textures" => Some((
            include_str!("../../shaders/textures/vert.glsl"),
            include_str!("../../shaders/textures/frag.glsl"),
        )),
        "transformations" => Some((
            include_str!("../../shaders/transformations/vert.glsl"),
            include_str!("../../shaders/transformations/frag.glsl"),
        )),
        _ => None,
    }
}

/// Builds a lesson's shader program from its files on disk, then from the
/// built-in copies. Returns `None` when neither works; the lesson then only
/// clears the screen.
pub fn load_program(gl: &Arc<glow::Context>, config: &Config, lesson: &str) -> Option<ShaderProgram> {
    let vert_path = config.shader_path(lesson, "vert");
    let frag_path = config.shader_path(lesson, "frag");
    match ShaderProgram::from_files(gl, &vert_path, &frag_path) {
        Ok(program) => return Some(program),
        Err(e) => log::error!("{e}"),
    }

    let (vert, frag) = builtin_shaders(lesson)?;
    log::warn!("Using built-in shaders for {lesson}");
    match ShaderProgram::from_sources(gl, vert, frag) {
        Ok(program) => Some(program),
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}

/// Loads a texture from disk, substituting a checkerboard when it can't be read.
pub fn load_texture(gl: &Arc<glow::Context>, path: &Path) -> Result<Texture, String> {
    match Texture::from_path(gl, path, true) {
        Ok(texture) => Ok(texture),
        Err(e) => {
            log::error!("{e}");
            log::warn!("Using a placeholder for {}", path.display());
            Texture::new(
                gl,
                &checkerboard(256, 8, [255, 0, 255, 255], [24, 24, 24, 255]),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_lookup() {
        assert_eq!("hello_triangle".parse::<LessonKind>(), Ok(LessonKind::HelloTriangle));
        assert_eq!("Shaders".parse::<LessonKind>(), Ok(LessonKind::Shaders));
        assert_eq!("transformations".parse::<LessonKind>(), Ok(LessonKind::Transformations));
        assert_eq!("hello-triangle".parse::<LessonKind>(), Ok(LessonKind::HelloTriangle));
        let err = "lighting".parse::<LessonKind>().unwrap_err();
        assert!(err.contains("lighting"));
        assert!(err.contains("textures"));
    }

    #[test]
    fn test_names_round_trip() {
        for kind in LessonKind::ALL {
            assert_eq!(kind.name().parse::<LessonKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_builtin_shaders() {
        assert!(builtin_shaders("hello_triangle").is_none());
        for lesson in ["shaders", "textures", "transformations"] {
            let (vert, frag) = builtin_shaders(lesson).unwrap();
            assert!(vert.starts_with("#version 330 core"));
            assert!(frag.starts_with("#version 330 core"));
            assert!(vert.contains("layout (location = 0) in vec3 a_position;"));
            assert!(frag.contains("out vec4 frag_color;"));
        }

        let (_, frag) = builtin_shaders("shaders").unwrap();
        assert!(frag.contains("uniform float u_pulse;"));

        let (_, frag) = builtin_shaders("textures").unwrap();
        assert!(frag.contains("uniform sampler2D u_texture1;"));
        assert!(frag.contains("uniform sampler2D u_texture2;"));
        assert!(frag.contains("uniform float u_mix;"));

        let (vert, _) = builtin_shaders("transformations").unwrap();
        assert!(vert.contains("uniform mat4 u_transform;"));
    }
}
