//! Decoded images for environment maps.
//!
//! Texels stay display-referred (byte / 255), the same space material
//! colors are authored in, so nothing is linearised on load.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::material::Color;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Texture not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Texture of {width}x{height} cannot hold {texels} texels")]
    Size { width: u32, height: u32, texels: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Decode(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// RGB image, row-major with the top row first.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<Color>,
}

impl Texture {
    /// Wrap `texels`, which must hold exactly `width * height` colors,
    /// with both dimensions non-zero.
    pub fn new(width: u32, height: u32, texels: Vec<Color>) -> TextureResult<Self> {
        if width == 0 || height == 0 || texels.len() != width as usize * height as usize {
            return Err(TextureError::Size {
                width,
                height,
                texels: texels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn texel(&self, x: u32, y: u32) -> Color {
        self.texels
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(Color::ZERO)
    }

    /// Bilinear lookup. `u` wraps around, `v` is clamped; v = 0 is the
    /// bottom row and v = 1 the top row.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let px = u.rem_euclid(1.0) * (self.width - 1) as f32;
        let py = (1.0 - v.clamp(0.0, 1.0)) * (self.height - 1) as f32;

        let (left, top) = (px.floor() as u32, py.floor() as u32);
        let right = (left + 1).min(self.width - 1);
        let bottom = (top + 1).min(self.height - 1);
        let (tx, ty) = (px - left as f32, py - top as f32);

        let upper = self.texel(left, top).lerp(self.texel(right, top), tx);
        let lower = self.texel(left, bottom).lerp(self.texel(right, bottom), tx);
        upper.lerp(lower, ty)
    }
}

/// Decode the image at `path`. Alpha is dropped.
pub fn load_texture(path: impl AsRef<Path>) -> TextureResult<Texture> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TextureError::NotFound(path.to_path_buf()));
    }

    let rgb = image::open(path)?.to_rgb8();
    let texels = rgb
        .pixels()
        .map(|p| crate::material::rgb8(p[0], p[1], p[2]))
        .collect();
    let texture = Texture::new(rgb.width(), rgb.height(), texels)?;

    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        texture.width,
        texture.height
    );
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_over_blue() -> Texture {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        Texture::new(2, 2, vec![red, red, blue, blue]).unwrap()
    }

    #[test]
    fn test_single_texel_is_constant() {
        let tex = Texture::new(1, 1, vec![Color::new(1.0, 0.5, 0.0)]).unwrap();

        for (u, v) in [(0.0, 0.0), (0.5, 0.5), (0.99, 0.25), (-3.2, 7.5)] {
            assert!((tex.sample(u, v) - Color::new(1.0, 0.5, 0.0)).length() < 1e-6);
        }
    }

    #[test]
    fn test_v_points_up() {
        let tex = red_over_blue();

        let top = tex.sample(0.0, 1.0);
        assert!(top.x > 0.99 && top.z < 0.01);

        let above = tex.sample(0.0, 1.5);
        assert_eq!(above, top);

        let bottom = tex.sample(0.0, 0.0);
        assert!(bottom.z > 0.99 && bottom.x < 0.01);
    }

    #[test]
    fn test_bilinear_midpoint() {
        let mid = red_over_blue().sample(0.0, 0.5);

        assert!((mid.x - 0.5).abs() < 0.001);
        assert!((mid.z - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(matches!(
            Texture::new(0, 0, vec![]),
            Err(TextureError::Size { width: 0, height: 0, texels: 0 })
        ));
        assert!(matches!(
            Texture::new(0, 3, vec![]),
            Err(TextureError::Size { .. })
        ));
        assert!(matches!(
            Texture::new(2, 2, vec![Color::ONE]),
            Err(TextureError::Size { texels: 1, .. })
        ));
    }

    #[test]
    fn test_load_missing_texture() {
        let result = load_texture("does/not/exist.png");
        assert!(matches!(result, Err(TextureError::NotFound(_))));
    }
}
