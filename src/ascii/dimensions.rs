//! Output-size resolution for aspect-ratio-correct terminal rendering.

use crate::error::{Error, Result};

/// Terminal character cells are roughly twice as tall as they are wide, so
/// horizontal pixel counts are doubled relative to vertical ones when mapping
/// pixels to cells.
pub const CELL_ASPECT: u32 = 2;

/// How the output grid size is derived from the image and the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeMode {
    /// Shrink both axes by a single divisor; the width is doubled afterwards
    /// to compensate for the cell aspect ratio.
    Scale(f32),
    /// Independent divisors per axis, no implicit doubling. The conventional
    /// default is `x = 1, y = 2`, which folds the cell-aspect correction into
    /// the vertical divisor.
    Axes { x: f32, y: f32 },
    /// Largest size that fits the terminal while preserving the image aspect
    /// ratio.
    AutoFit,
    /// Exactly the terminal size, aspect ratio ignored.
    Stretch,
}

/// Resolve the output grid size in character cells.
///
/// Pure function: the terminal size is passed in rather than queried, so the
/// caller decides where it comes from (a live query or a test fixture).
///
/// Auto-fit picks the limiting axis with the cross-multiplied ratio test
/// `term_w * img_h < CELL_ASPECT * term_h * img_w`: when it holds, the width
/// is the limiting axis and the height is derived from the image aspect
/// (divided by `CELL_ASPECT`); otherwise the height limits and the width is
/// derived (multiplied by `CELL_ASPECT`). Integer floor division throughout,
/// so the limiting axis is never exceeded.
///
/// # Errors
/// Returns [`Error::DegenerateSize`] when either computed dimension is zero.
/// This surfaces before any pixel is sampled; a zero-sized grid is a
/// configuration error, never silently clamped.
pub fn resolve(mode: SizeMode, image: (u32, u32), terminal: (u32, u32)) -> Result<(u32, u32)> {
    let (img_w, img_h) = image;
    let (term_w, term_h) = terminal;

    if img_w == 0 || img_h == 0 {
        return Err(Error::DegenerateSize {
            width: img_w,
            height: img_h,
        });
    }

    let (width, height) = match mode {
        SizeMode::Scale(scale) => (
            (img_w as f32 / scale * CELL_ASPECT as f32) as u32,
            (img_h as f32 / scale) as u32,
        ),
        SizeMode::Axes { x, y } => ((img_w as f32 / x) as u32, (img_h as f32 / y) as u32),
        SizeMode::AutoFit => {
            let (tw, th) = (term_w as u64, term_h as u64);
            let (iw, ih) = (img_w as u64, img_h as u64);
            let aspect = CELL_ASPECT as u64;
            if tw * ih < aspect * th * iw {
                (term_w, (tw * ih / iw / aspect) as u32)
            } else {
                ((th * iw * aspect / ih) as u32, term_h)
            }
        }
        SizeMode::Stretch => (term_w, term_h),
    };

    if width == 0 || height == 0 {
        return Err(Error::DegenerateSize { width, height });
    }
    Ok((width, height))
}
