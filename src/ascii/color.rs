//! Truecolor rendering: RGB grid to background-color escape runs.

use std::fmt::Write as _;

use super::sampler::RgbGrid;

/// Clears all active formatting, background color included.
pub const RESET: &str = "\x1b[0m";

/// 24-bit background color escape for one cell run.
fn push_color(out: &mut String, (r, g, b): (u8, u8, u8)) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[48;2;{r};{g};{b}m");
}

/// Render an RGB grid as rows of background-colored spaces.
///
/// Within a row, adjacent cells with the exact same RGB value share one
/// escape sequence: the last emitted color is carried in an accumulator local
/// to the row, and a new `ESC[48;2;R;G;Bm` is appended only when the cell
/// differs from it. Worst case (every neighbor differs) this still emits one
/// escape per cell; it is a size reduction, not a compression guarantee.
///
/// Every row is terminated by a formatting reset so the colored run never
/// bleeds past the frame. Rows are joined by `\n` with no separator after the
/// final row, matching the glyph mapper's frame shape. No quantization
/// happens here: cells keep full 24-bit fidelity.
pub fn render(grid: &RgbGrid) -> String {
    // Rough guess: one escape per short run plus one space per cell.
    let mut out = String::with_capacity(grid.cells.len() * 4);
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut last: Option<(u8, u8, u8)> = None;
        for &cell in row {
            if last != Some(cell) {
                push_color(&mut out, cell);
                last = Some(cell);
            }
            out.push(' ');
        }
        out.push_str(RESET);
    }
    out
}
