//! Incremental OpenGL tutorial programs.
//!
//! Each lesson opens a window, uploads a few hard-coded vertices, compiles a
//! pair of small shaders and draws until Escape is pressed. The [`abs`] module
//! holds the thin wrappers around OpenGL objects the lessons share.

use std::process::ExitCode;

pub mod abs;
pub mod config;
pub mod input;
pub mod lessons;
pub mod logging;
pub mod vertex;

use crate::{
    abs::App,
    config::{CONFIG_FILE, Config},
    lessons::LessonKind,
};

/// Loads the config, sets up logging and runs `kind` until its window closes.
pub fn launch(kind: LessonKind) -> ExitCode {
    let config = load_config();
    launch_with(kind, &config)
}

/// Loads [`CONFIG_FILE`] and installs the logger at its level.
pub fn load_config() -> Config {
    let (config, message) = Config::load(CONFIG_FILE);
    logging::init(&config.log_level);
    if let Some((level, message)) = message {
        log::log!(level, "{message}");
    }
    config
}

/// Runs `kind` with an already loaded config.
pub fn launch_with(kind: LessonKind, config: &Config) -> ExitCode {
    log::info!("Starting lesson {}", kind.name());

    let mut app = match App::new(&config.window) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut lesson = match kind.build(&app.gl, config) {
        Ok(lesson) => lesson,
        Err(e) => {
            log::error!("Failed to set up {}: {e}", kind.name());
            return ExitCode::FAILURE;
        }
    };

    lessons::run(&mut app, lesson.as_mut(), config);

    // GL objects must be released while the context is still alive.
    drop(lesson);
    drop(app);
    ExitCode::SUCCESS
}
