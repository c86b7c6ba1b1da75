//! Frame driver.
//!
//! One primary ray per pixel, no anti-aliasing. Every pixel is a pure
//! function of the scene, the camera and its own coordinates, so the
//! parallel driver produces the same image as the row-major one.

use std::path::Path;

use crate::scene::SceneContext;
use crate::shading::cast_ray;
use dio_core::{color_to_rgba, Color};
use dio_math::{Camera, ViewBasis};
use rayon::prelude::*;

/// Rendered frame, row-major, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to packed `0RGB` words, the layout window buffers expect.
    pub fn to_argb_u32(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|color| {
                let [r, g, b, _] = color_to_rgba(*color);
                (r as u32) << 16 | (g as u32) << 8 | b as u32
            })
            .collect()
    }

    /// Write the frame as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Color of a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &SceneContext,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Color {
    shade_pixel(&camera.basis(), camera, scene, x, y, width, height)
}

#[inline]
fn shade_pixel(
    basis: &ViewBasis,
    camera: &Camera,
    scene: &SceneContext,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Color {
    let direction = basis.primary_direction(x, y, width, height);
    cast_ray(camera.position, direction, scene, 0)
}

/// Render the entire frame, one pixel at a time in row-major order.
pub fn render(camera: &Camera, scene: &SceneContext, width: u32, height: u32) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    let basis = camera.basis();

    for y in 0..height {
        for x in 0..width {
            let color = shade_pixel(&basis, camera, scene, x, y, width, height);
            image.set(x, y, color);
        }
    }

    image
}

/// Render the entire frame with rows spread across the rayon pool.
///
/// Workers only read the scene and each writes its own rows.
pub fn render_parallel(
    camera: &Camera,
    scene: &SceneContext,
    width: u32,
    height: u32,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    if width == 0 {
        return image;
    }
    let basis = camera.basis();

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = shade_pixel(&basis, camera, scene, x as u32, y as u32, width, height);
            }
        });

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cube, Sphere};
    use dio_core::{rgb8, Environment, Light, Material, SkyGradient};
    use dio_math::Vec3;

    fn small_scene() -> SceneContext {
        let ground = Material::new(rgb8(150, 75, 0), 1.0, 0.3, 10.0).with_reflectivity(0.1);
        let water = Material::new(rgb8(28, 107, 160), 0.5, 0.8, 50.0)
            .with_reflectivity(0.5)
            .with_transparency(0.8, 1.33);
        let sun = Material::new(rgb8(255, 215, 0), 1.0, 0.0, 0.0);

        SceneContext::new(
            Light::new(Vec3::new(0.0, 12.0, -60.0), 2.7, Color::ONE),
            Box::new(SkyGradient),
        )
        .with(Cube::new(Vec3::new(-4.0, -2.0, -4.0), Vec3::new(0.0, 0.0, 0.0), ground))
        .with(Cube::new(Vec3::new(0.0, -2.0, -4.0), Vec3::new(4.0, 0.0, 0.0), water))
        .with(Sphere::new(Vec3::new(0.0, 4.0, 2.0), 1.5, sun))
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(-6.0, 6.0, -10.0), Vec3::new(1.0, 0.0, -1.0), 2.0)
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(3, 2, Color::new(1.0, 0.5, 0.0));

        assert_eq!(image.get(3, 2), Color::new(1.0, 0.5, 0.0));
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.pixels.len(), 12);
    }

    #[test]
    fn test_pixel_conversions() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 2.0, 1.0));

        assert_eq!(image.to_rgba(), vec![255, 0, 0, 255, 0, 255, 255, 255]);
        assert_eq!(image.to_argb_u32(), vec![0x00ff0000, 0x0000ffff]);
    }

    #[test]
    fn test_empty_scene_renders_environment() {
        let scene = SceneContext::new(Light::default(), Box::new(SkyGradient));
        let camera = camera();
        let image = render(&camera, &scene, 8, 6);

        for y in 0..6 {
            for x in 0..8 {
                let direction = camera.primary_direction(x, y, 8, 6);
                assert_eq!(image.get(x, y), SkyGradient.color(direction));
            }
        }
    }

    #[test]
    fn test_render_pixel_matches_frame() {
        let scene = small_scene();
        let camera = camera();
        let image = render(&camera, &scene, 24, 16);

        assert_eq!(image.get(12, 8), render_pixel(&camera, &scene, 12, 8, 24, 16));
        assert_eq!(image.get(3, 14), render_pixel(&camera, &scene, 3, 14, 24, 16));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = small_scene();
        let camera = camera();

        let sequential = render(&camera, &scene, 36, 24);
        let parallel = render_parallel(&camera, &scene, 36, 24);

        assert_eq!(sequential.pixels, parallel.pixels);
    }

    #[test]
    fn test_scene_is_visible() {
        let scene = small_scene();
        let camera = camera();
        let image = render(&camera, &scene, 36, 24);

        // The center pixel looks at the camera target on the water
        let center = image.get(18, 12);
        let background = SkyGradient.color(camera.primary_direction(18, 12, 36, 24));
        assert_ne!(center, background);
    }
}
