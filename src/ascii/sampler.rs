//! Pixel sampling: decoded frame to grayscale or RGB cell grid.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// Resampling filter used for both the grayscale and the color branch.
/// Bilinear is deterministic for a given input, which is the only property
/// the pipeline needs from it.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Row-major grid of grayscale intensities, one byte per character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<u8>,
}

impl GrayGrid {
    /// Iterate over the grid one row at a time.
    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.cells.chunks(self.width as usize)
    }
}

/// Row-major grid of RGB triples, one per character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<(u8, u8, u8)>,
}

impl RgbGrid {
    /// Iterate over the grid one row at a time.
    pub fn rows(&self) -> std::slice::Chunks<'_, (u8, u8, u8)> {
        self.cells.chunks(self.width as usize)
    }
}

/// Resize a decoded frame to the target cell grid and extract luminance.
///
/// The weighted R/G/B averaging is the image crate's luma conversion; the
/// resize uses the same filter as [`sample_rgb`] so both branches see the
/// same geometry.
pub fn sample_grayscale(frame: &RgbaImage, width: u32, height: u32) -> GrayGrid {
    let resized = imageops::resize(frame, width, height, RESIZE_FILTER);
    let luma = DynamicImage::ImageRgba8(resized).into_luma8();
    GrayGrid {
        width,
        height,
        cells: luma.into_raw(),
    }
}

/// Resize a decoded frame to the target cell grid and extract RGB triples.
/// Alpha is discarded; color rendering works on opaque cells.
pub fn sample_rgb(frame: &RgbaImage, width: u32, height: u32) -> RgbGrid {
    let resized = imageops::resize(frame, width, height, RESIZE_FILTER);
    let cells = resized
        .pixels()
        .map(|pixel| (pixel.0[0], pixel.0[1], pixel.0[2]))
        .collect();
    RgbGrid {
        width,
        height,
        cells,
    }
}
