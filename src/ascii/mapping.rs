//! Intensity to glyph mapping.

use super::sampler::GrayGrid;

/// Map a grayscale grid to glyph rows.
///
/// The grid is scanned once for its darkest and brightest cell, and the
/// palette is spread linearly between those observed extremes rather than the
/// full 0-255 domain, so low-contrast images still use the whole ramp. Each
/// cell then indexes the palette at
/// `floor((cell - min) / ((max - min) / (len - 1)))`, clamped defensively to
/// the palette bounds.
///
/// A flat image (min == max) would make the scaler zero; it is forced to one
/// instead, and every cell maps to `palette[0]` since `cell == min`
/// throughout.
///
/// Rows are joined by `\n` with no separator after the final row. The caller
/// supplies the palette already reversed when dense-for-dark output is
/// wanted; see [`Charset::resolve`](super::Charset::resolve).
pub fn map_to_glyphs(grid: &GrayGrid, palette: &[char]) -> String {
    if grid.cells.is_empty() {
        return String::new();
    }
    // Charset guarantees two or more glyphs; degrade to a flat fill rather
    // than divide by zero if a caller hands over less.
    if palette.len() < 2 {
        let fill = palette.first().copied().unwrap_or(' ');
        let row: String = std::iter::repeat(fill).take(grid.width as usize).collect();
        return vec![row; grid.height as usize].join("\n");
    }

    let (min, max) = grid
        .cells
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &cell| {
            (lo.min(cell), hi.max(cell))
        });

    let mut scaler = f64::from(max - min) / (palette.len() - 1) as f64;
    if scaler == 0.0 {
        scaler = 1.0;
    }
    let last = palette.len() - 1;

    // Cells plus one newline per row boundary.
    let mut out = String::with_capacity(grid.cells.len() + grid.height as usize);
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for &cell in row {
            let index = (f64::from(cell - min) / scaler) as usize;
            out.push(palette[index.min(last)]);
        }
    }
    out
}
