//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Creates a new texture from the given [`image::DynamicImage`].
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        let data = image.to_rgba8().into_raw();
        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Loads an image from disk and uploads it.
    ///
    /// Image rows are stored top to bottom while OpenGL samples from the
    /// bottom-left corner, so most images should be loaded with
    /// `flip_vertically` set.
    pub fn from_path(
        gl: &Arc<glow::Context>,
        path: impl AsRef<Path>,
        flip_vertically: bool,
    ) -> Result<Self, String> {
        let path = path.as_ref();
        let image =
            image::open(path).map_err(|e| format!("Failed to load {}: {e}", path.display()))?;
        let image = if flip_vertically { image.flipv() } else { image };
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Self::new(gl, &image)
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

/// Builds a `size`x`size` checkerboard of `cells`x`cells` squares alternating
/// between `a` and `b`, starting with `a` in the top-left corner.
pub fn checkerboard(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> DynamicImage {
    let cell = (size / cells.max(1)).max(1);
    let image = RgbaImage::from_fn(size, size, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba(a)
        } else {
            Rgba(b)
        }
    });
    DynamicImage::ImageRgba8(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard() {
        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        let image = checkerboard(64, 8, white, black);
        assert_eq!(image.dimensions(), (64, 64));
        assert_eq!(image.get_pixel(0, 0).0, white);
        assert_eq!(image.get_pixel(7, 7).0, white);
        assert_eq!(image.get_pixel(8, 0).0, black);
        assert_eq!(image.get_pixel(8, 8).0, white);
        assert_eq!(image.get_pixel(63, 0).0, black);
    }

    #[test]
    fn test_checkerboard_more_cells_than_pixels() {
        let image = checkerboard(4, 16, [1, 2, 3, 4], [5, 6, 7, 8]);
        assert_eq!(image.get_pixel(0, 0).0, [1, 2, 3, 4]);
        assert_eq!(image.get_pixel(1, 0).0, [5, 6, 7, 8]);
    }
}
