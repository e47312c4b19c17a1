//! Pixel canvas for flashcards: decoded card images, paint circles, stamps.

use crate::core::palette::Rgb;
use image::imageops::{self, FilterType};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("could not load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A fixed-size grid of RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Decode an image file and scale it to `width` x `height`.
    pub fn load(path: &Path, width: u32, height: u32) -> Result<Self, AssetError> {
        let decoded = image::open(path).map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let resized = imageops::resize(&decoded.to_rgb8(), width, height, FilterType::Triangle);
        let pixels = resized.pixels().map(|p| Rgb(p[0], p[1], p[2])).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Set one pixel; coordinates outside the canvas are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = color;
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgb) {
        for dy in 0..height as i64 {
            for dx in 0..width as i64 {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    /// Filled disc, clipped to the canvas.
    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Rgb) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.set(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Copy `other` with its top-left corner at `(x, y)`, clipped.
    pub fn blit(&mut self, other: &Canvas, x: i64, y: i64) {
        for oy in 0..other.height {
            for ox in 0..other.width {
                let color = other.pixels[(oy * other.width + ox) as usize];
                self.set(x + ox as i64, y + oy as i64, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette;

    #[test]
    fn test_set_clips_out_of_bounds() {
        let mut c = Canvas::new(4, 3, palette::WHITE);
        c.set(-1, 0, palette::RED);
        c.set(4, 0, palette::RED);
        c.set(0, 3, palette::RED);
        assert!(c.pixels.iter().all(|p| *p == palette::WHITE));
        c.set(3, 2, palette::RED);
        assert_eq!(c.get(3, 2), Some(palette::RED));
        assert_eq!(c.get(4, 2), None);
    }

    #[test]
    fn test_fill_circle_covers_disc() {
        let mut c = Canvas::new(20, 20, palette::WHITE);
        c.fill_circle(10, 10, 3, palette::BLUE);
        assert_eq!(c.get(10, 10), Some(palette::BLUE));
        assert_eq!(c.get(13, 10), Some(palette::BLUE));
        assert_eq!(c.get(10, 7), Some(palette::BLUE));
        // Corner of the bounding box is outside the disc
        assert_eq!(c.get(13, 13), Some(palette::WHITE));
        assert_eq!(c.get(14, 10), Some(palette::WHITE));
    }

    #[test]
    fn test_circle_at_edge_is_clipped() {
        let mut c = Canvas::new(10, 10, palette::WHITE);
        c.fill_circle(0, 0, 4, palette::RED);
        assert_eq!(c.get(0, 0), Some(palette::RED));
        assert_eq!(c.get(9, 9), Some(palette::WHITE));
    }

    #[test]
    fn test_blit_places_top_left() {
        let mut c = Canvas::new(10, 10, palette::WHITE);
        let stamp = Canvas::new(2, 3, palette::BLACK);
        c.blit(&stamp, 8, 8);
        assert_eq!(c.get(8, 8), Some(palette::BLACK));
        assert_eq!(c.get(9, 9), Some(palette::BLACK));
        assert_eq!(c.get(7, 8), Some(palette::WHITE));
    }

    #[test]
    fn test_load_and_resize_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        image::RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();

        let c = Canvas::load(&path, 4, 2).unwrap();
        assert_eq!((c.width(), c.height()), (4, 2));
        assert_eq!(c.get(3, 1), Some(palette::RED));
    }

    #[test]
    fn test_load_garbage_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();
        assert!(matches!(
            Canvas::load(&path, 4, 4),
            Err(AssetError::Image { .. })
        ));
    }
}
