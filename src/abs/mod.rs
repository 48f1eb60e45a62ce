//! This module contains the thin wrappers around OpenGL objects used by the
//! lessons: application setup, shader management, meshes and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
