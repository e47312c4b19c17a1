//! Sprite sheets and frame-timed animations.
//!
//! Frames are small glyph grids. Scenes stretch a frame over the terminal
//! cells covered by the sprite's world rectangle.

use super::palette::Rgb;
use std::fs;
use std::path::{Path, PathBuf};

/// Shades used when a sheet has no frames to load.
const FALLBACK_SHADES: [Rgb; 4] = [
    Rgb(255, 0, 0),
    Rgb(200, 0, 0),
    Rgb(150, 0, 0),
    Rgb(100, 0, 0),
];

/// A single animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rows: Vec<String>,
    pub color: Rgb,
}

impl Frame {
    pub fn from_art(art: &str, color: Rgb) -> Self {
        Self {
            rows: art.lines().map(str::to_string).collect(),
            color,
        }
    }

    /// Solid block frame, used wherever art is missing.
    pub fn solid(color: Rgb) -> Self {
        Self {
            rows: vec!["██".to_string(), "██".to_string()],
            color,
        }
    }

    /// Width of the widest row, in glyphs.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Glyph at a normalized position (0.0..1.0 on both axes), nearest-neighbor.
    ///
    /// Returns `None` for transparent (space) cells.
    pub fn sample(&self, u: f64, v: f64) -> Option<char> {
        let w = self.width();
        let h = self.height();
        if w == 0 || h == 0 {
            return None;
        }
        let col = ((u.clamp(0.0, 0.999_999)) * w as f64) as usize;
        let row = ((v.clamp(0.0, 0.999_999)) * h as f64) as usize;
        self.rows[row].chars().nth(col).filter(|c| *c != ' ')
    }
}

/// Ordered frames for one animation, sized in world units.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: Vec<Frame>,
}

impl SpriteSheet {
    pub fn from_frames(frame_width: u32, frame_height: u32, frames: Vec<Frame>) -> Self {
        Self {
            frame_width,
            frame_height,
            frames,
        }
    }

    /// Load text-art frames from disk.
    ///
    /// A frame that cannot be read becomes a red block. With no paths at all
    /// the sheet gets the four fallback shades.
    pub fn load(frame_width: u32, frame_height: u32, paths: &[PathBuf], color: Rgb) -> Self {
        let frames = if paths.is_empty() {
            FALLBACK_SHADES.iter().map(|&c| Frame::solid(c)).collect()
        } else {
            paths
                .iter()
                .map(|path| match load_frame(path, color) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Could not load sprite");
                        Frame::solid(super::palette::RED)
                    }
                })
                .collect()
        };
        Self::from_frames(frame_width, frame_height, frames)
    }

    /// Frame at `index`, wrapping around the sheet.
    pub fn get_frame(&self, index: usize) -> Frame {
        if self.frames.is_empty() {
            return Frame::solid(super::palette::RED);
        }
        self.frames[index % self.frames.len()].clone()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn load_frame(path: &Path, color: Rgb) -> std::io::Result<Frame> {
    let art = fs::read_to_string(path)?;
    if art.trim().is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "empty sprite file",
        ));
    }
    Ok(Frame::from_art(&art, color))
}

/// Frame-timed playback over a sprite sheet.
#[derive(Debug, Clone)]
pub struct Animation {
    pub sprite_sheet: SpriteSheet,
    /// Milliseconds each frame stays on screen.
    pub frame_duration_ms: u64,
    pub current_frame: usize,
    pub last_update_ms: u64,
}

impl Animation {
    pub fn new(sprite_sheet: SpriteSheet, frame_duration_ms: u64) -> Self {
        Self {
            sprite_sheet,
            frame_duration_ms,
            current_frame: 0,
            last_update_ms: 0,
        }
    }

    /// Advance at most one frame if the frame duration has elapsed, then
    /// return the frame to show.
    pub fn update(&mut self, now_ms: u64) -> Frame {
        if now_ms.saturating_sub(self.last_update_ms) > self.frame_duration_ms {
            self.current_frame += 1;
            self.last_update_ms = now_ms;
        }
        self.sprite_sheet.get_frame(self.current_frame)
    }

    /// The frame that would be shown right now, without advancing.
    pub fn current(&self) -> Frame {
        self.sprite_sheet.get_frame(self.current_frame)
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
    }
}
