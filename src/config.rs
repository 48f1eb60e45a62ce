//! Runtime configuration read from `learngl.json`.
//!
//! Every field is optional in the file; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The default config file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "learngl.json";

/// Window and context settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
    /// Requests a forward compatible context, which macOS requires.
    pub forward_compat: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            vsync: true,
            forward_compat: cfg!(target_os = "macos"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub clear_color: [f32; 4],
    pub log_level: String,
    pub shader_dir: PathBuf,
    pub texture_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            log_level: "info".to_string(),
            shader_dir: PathBuf::from("shaders"),
            texture_dir: PathBuf::from("resources/textures"),
        }
    }
}

impl Config {
    /// Parses a config from JSON text.
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Loads the config at `path`, falling back to the defaults when the file
    /// is missing or malformed.
    ///
    /// Called before logging is set up, so problems are returned as messages
    /// for the caller to log once the logger exists.
    pub fn load(path: impl AsRef<Path>) -> (Self, Option<(log::Level, String)>) {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return (
                    Self::default(),
                    Some((
                        log::Level::Info,
                        format!("No {} found, using defaults", path.display()),
                    )),
                );
            }
            Err(e) => {
                return (
                    Self::default(),
                    Some((
                        log::Level::Warn,
                        format!("Failed to read {}: {e}, using defaults", path.display()),
                    )),
                );
            }
        };

        match Self::from_json(&text) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some((
                    log::Level::Warn,
                    format!("Malformed {}: {e}, using defaults", path.display()),
                )),
            ),
        }
    }

    /// Path of a lesson's shader stage, e.g. `shaders/textures/frag.glsl`.
    pub fn shader_path(&self, lesson: &str, stage: &str) -> PathBuf {
        self.shader_dir.join(lesson).join(format!("{stage}.glsl"))
    }

    /// Path of a texture image inside the texture directory.
    pub fn texture_path(&self, name: &str) -> PathBuf {
        self.texture_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window.title, "LearnOpenGL");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "window": { "width": 1024 }, "log_level": "debug" }"#)
            .unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "LearnOpenGL");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(Config::from_json("{ \"window\": ").is_err());
        assert!(Config::from_json(r#"{ "clear_color": [1.0, 0.0] }"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let (config, message) = Config::load("definitely/not/here/learngl.json");
        assert_eq!(config, Config::default());
        assert_eq!(message.map(|(level, _)| level), Some(log::Level::Info));
    }

    #[test]
    fn test_load_malformed_file() {
        let path = std::env::temp_dir().join(format!("learngl-test-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let (config, message) = Config::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(message.map(|(level, _)| level), Some(log::Level::Warn));
    }

    #[test]
    fn test_asset_paths() {
        let config = Config::default();
        assert_eq!(
            config.shader_path("textures", "frag"),
            PathBuf::from("shaders/textures/frag.glsl")
        );
        assert_eq!(
            config.texture_path("container.jpg"),
            PathBuf::from("resources/textures/container.jpg")
        );
    }
}
