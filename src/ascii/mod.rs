//! Ascii rendering module: decoded frame in, terminal text out.
//!
//! The pipeline for one frame:
//!
//! 1. **Size resolution** - pick the output grid in character cells
//! 2. **Sampling** - resize and extract grayscale bytes or RGB triples
//! 3. **Mapping** - glyph lookup per cell, or coalesced color escapes
//!
//! All three stages are pure functions over immutable inputs; the terminal
//! size is the only environmental value and is passed in by the caller.

mod charset;
mod color;
mod dimensions;
mod mapping;
mod sampler;

pub use charset::{Charset, BLOCKS_RAMP, LONG_RAMP, SHORT_RAMP};
pub use color::{render as render_color, RESET};
pub use dimensions::{resolve as resolve_dimensions, SizeMode, CELL_ASPECT};
pub use mapping::map_to_glyphs;
pub use sampler::{sample_grayscale, sample_rgb, GrayGrid, RgbGrid};

use std::time::Duration;

use image::RgbaImage;

use crate::error::Result;

/// Immutable description of the desired output, built once from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// How the output grid size is derived.
    pub mode: SizeMode,
    /// Glyph palette for the grayscale branch.
    pub charset: Charset,
    /// Reverse the palette (dense glyphs for dark pixels).
    pub reversed: bool,
    /// Render 24-bit background colors instead of glyphs.
    pub color: bool,
    /// Pause between frames during looped playback.
    pub delay: Duration,
}

/// Convert one decoded frame to its terminal text.
///
/// # Errors
/// Returns [`Error::DegenerateSize`](crate::error::Error::DegenerateSize)
/// when the resolved output grid has a zero dimension; this happens before
/// any pixel is sampled.
pub fn render_frame(
    frame: &RgbaImage,
    config: &RenderConfig,
    terminal: (u32, u32),
) -> Result<String> {
    let (img_w, img_h) = frame.dimensions();
    let (width, height) = dimensions::resolve(config.mode, (img_w, img_h), terminal)?;
    log::debug!("rendering {img_w}x{img_h} px frame as {width}x{height} cells");

    if config.color {
        Ok(color::render(&sampler::sample_rgb(frame, width, height)))
    } else {
        let palette = config.charset.resolve(config.reversed);
        let grid = sampler::sample_grayscale(frame, width, height);
        Ok(mapping::map_to_glyphs(&grid, &palette))
    }
}
