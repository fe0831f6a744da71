//! Unit tests for the ascii rendering module.
//!
//! These tests verify the core conversion algorithms:
//! - Glyph palettes and reversal
//! - Output-size resolution for every mode
//! - Intensity-to-glyph mapping and its flat-image guard
//! - Truecolor run coalescing

use img2ascii::ascii::{
    map_to_glyphs, render_color, resolve_dimensions, Charset, GrayGrid, RgbGrid, SizeMode, RESET,
};
use img2ascii::error::Error;

fn make_gray(cells: Vec<u8>, width: u32, height: u32) -> GrayGrid {
    assert_eq!(cells.len(), (width * height) as usize);
    GrayGrid {
        width,
        height,
        cells,
    }
}

fn make_rgb(cells: Vec<(u8, u8, u8)>, width: u32, height: u32) -> RgbGrid {
    assert_eq!(cells.len(), (width * height) as usize);
    RgbGrid {
        width,
        height,
        cells,
    }
}

/// Terminal fixture used by the auto-fit and stretch tests.
const TERM: (u32, u32) = (80, 24);

// ==================== Glyph Palette Tests ====================

#[test]
fn test_every_charset_has_at_least_two_glyphs() {
    // The mapper divides by len - 1, so a 1-glyph palette would be fatal.
    for charset in [Charset::Long, Charset::Short, Charset::Blocks] {
        assert!(
            charset.resolve(false).len() >= 2,
            "{} palette is too short",
            charset.name()
        );
    }
}

#[test]
fn test_charset_reverse_round_trip() {
    for charset in [Charset::Long, Charset::Short, Charset::Blocks] {
        let forward = charset.resolve(false);
        let mut back = charset.resolve(true);
        back.reverse();
        assert_eq!(forward, back, "{} does not round-trip", charset.name());
    }
}

#[test]
fn test_charset_reversal_swaps_ends() {
    let forward = Charset::Short.resolve(false);
    let reversed = Charset::Short.resolve(true);
    assert_eq!(forward.first(), reversed.last());
    assert_eq!(forward.last(), reversed.first());
}

#[test]
fn test_charsets_start_sparse() {
    // All ramps run sparse to dense; the sparsest glyph is a space.
    for charset in [Charset::Long, Charset::Short, Charset::Blocks] {
        assert_eq!(charset.resolve(false)[0], ' ', "{}", charset.name());
    }
}

// ==================== Size Resolution Tests ====================

#[test]
fn test_scale_one_doubles_width_keeps_height() {
    // No shrinkage at scale 1: the width doubles for the cell aspect ratio.
    let (w, h) = resolve_dimensions(SizeMode::Scale(1.0), (10, 7), TERM).unwrap();
    assert_eq!((w, h), (20, 7));
}

#[test]
fn test_scale_shrinks_both_axes() {
    let (w, h) = resolve_dimensions(SizeMode::Scale(2.0), (10, 8), TERM).unwrap();
    assert_eq!((w, h), (10, 4));
}

#[test]
fn test_axes_have_no_implicit_doubling() {
    // The caller supplies the doubling through the vertical divisor.
    let (w, h) = resolve_dimensions(SizeMode::Axes { x: 1.0, y: 2.0 }, (10, 8), TERM).unwrap();
    assert_eq!((w, h), (10, 4));

    let (w, h) = resolve_dimensions(SizeMode::Axes { x: 1.0, y: 1.0 }, (10, 8), TERM).unwrap();
    assert_eq!((w, h), (10, 8));
}

#[test]
fn test_autofit_width_limited_image() {
    // 200x100 against an 80x24 terminal: the width limits.
    let (w, h) = resolve_dimensions(SizeMode::AutoFit, (200, 100), TERM).unwrap();
    assert_eq!(w, 80, "limiting axis should be filled exactly");
    assert!(h <= 24, "derived height {} exceeds terminal", h);
    assert_eq!((w, h), (80, 20));
}

#[test]
fn test_autofit_height_limited_image() {
    // 50x200 against an 80x24 terminal: the height limits.
    let (w, h) = resolve_dimensions(SizeMode::AutoFit, (50, 200), TERM).unwrap();
    assert_eq!(h, 24, "limiting axis should be filled exactly");
    assert!(w <= 80, "derived width {} exceeds terminal", w);
    assert_eq!((w, h), (12, 24));
}

#[test]
fn test_stretch_is_exactly_the_terminal() {
    let (w, h) = resolve_dimensions(SizeMode::Stretch, (123, 456), TERM).unwrap();
    assert_eq!((w, h), TERM);
}

#[test]
fn test_oversized_scale_is_a_degenerate_error() {
    // Surfaced as a configuration error, never silently clamped.
    let result = resolve_dimensions(SizeMode::Scale(1000.0), (10, 10), TERM);
    assert!(matches!(result, Err(Error::DegenerateSize { .. })));
}

#[test]
fn test_zero_sized_image_is_a_degenerate_error() {
    let result = resolve_dimensions(SizeMode::Scale(1.0), (0, 10), TERM);
    assert!(matches!(result, Err(Error::DegenerateSize { .. })));
}

// ==================== Glyph Mapping Tests ====================

#[test]
fn test_flat_grid_maps_to_first_glyph() {
    // min == max would make the scaler zero; the guard pins it to one and
    // every cell lands on palette[0].
    let palette = Charset::Long.resolve(false);
    let grid = make_gray(vec![77; 12], 4, 3);
    let text = map_to_glyphs(&grid, &palette);

    let expected_row: String = std::iter::repeat(palette[0]).take(4).collect();
    for line in text.lines() {
        assert_eq!(line, expected_row);
    }
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_flat_grid_respects_reversal() {
    // Reversed palette: the flat image now renders with the densest glyph.
    let palette = Charset::Short.resolve(true);
    let grid = make_gray(vec![200; 4], 2, 2);
    let text = map_to_glyphs(&grid, &palette);
    assert!(text.chars().filter(|c| *c != '\n').all(|c| c == '@'));
}

#[test]
fn test_mapped_glyphs_always_come_from_the_palette() {
    // Every mapped index stays inside [0, len): no cell may escape the ramp.
    let palette = Charset::Short.resolve(false);
    let cells: Vec<u8> = (0..=255).collect();
    let grid = make_gray(cells, 16, 16);
    let text = map_to_glyphs(&grid, &palette);

    for c in text.chars().filter(|c| *c != '\n') {
        assert!(palette.contains(&c), "glyph {:?} not in palette", c);
    }
}

#[test]
fn test_extremes_use_both_palette_ends() {
    let palette = Charset::Short.resolve(false);
    let grid = make_gray(vec![0, 255], 2, 1);
    let text = map_to_glyphs(&grid, &palette);
    assert_eq!(text.chars().next(), palette.first().copied());
    assert_eq!(text.chars().last(), palette.last().copied());
}

#[test]
fn test_low_contrast_grid_spans_the_whole_ramp() {
    // Normalization runs between the observed extremes, not 0-255, so a
    // narrow band still reaches the dense end of the ramp.
    let palette = vec!['a', 'b'];
    let grid = make_gray(vec![100, 110], 2, 1);
    assert_eq!(map_to_glyphs(&grid, &palette), "ab");
}

#[test]
fn test_rows_joined_by_newline_without_trailing_one() {
    let palette = Charset::Short.resolve(false);
    let grid = make_gray(vec![0, 0, 255, 255], 2, 2);
    let text = map_to_glyphs(&grid, &palette);

    assert_eq!(text.matches('\n').count(), 1);
    assert!(!text.ends_with('\n'));
}

// ==================== Color Rendering Tests ====================

#[test]
fn test_color_coalesces_adjacent_equal_cells() {
    // Two identical cells then a different one: exactly two escapes and
    // three spaces.
    let grid = make_rgb(vec![(1, 1, 1), (1, 1, 1), (2, 2, 2)], 3, 1);
    let text = render_color(&grid);

    assert_eq!(text.matches("\x1b[48;2;").count(), 2);
    assert_eq!(text.matches(' ').count(), 3);
    assert!(text.contains("\x1b[48;2;1;1;1m"));
    assert!(text.contains("\x1b[48;2;2;2;2m"));
}

#[test]
fn test_color_worst_case_emits_one_escape_per_cell() {
    let grid = make_rgb(vec![(1, 0, 0), (0, 1, 0), (0, 0, 1)], 3, 1);
    let text = render_color(&grid);
    assert_eq!(text.matches("\x1b[48;2;").count(), 3);
}

#[test]
fn test_color_accumulator_is_local_to_each_row() {
    // Same color everywhere, two rows: the run does not carry across the
    // row boundary, so each row emits its own escape.
    let grid = make_rgb(vec![(9, 9, 9); 4], 2, 2);
    let text = render_color(&grid);
    assert_eq!(text.matches("\x1b[48;2;9;9;9m").count(), 2);
}

#[test]
fn test_color_rows_end_with_reset() {
    let grid = make_rgb(vec![(5, 5, 5); 6], 3, 2);
    let text = render_color(&grid);

    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.ends_with(RESET), "row {:?} lacks the reset", line);
    }
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_color_keeps_full_24bit_fidelity() {
    // No quantization: the exact component values appear in the escape.
    let grid = make_rgb(vec![(17, 203, 91)], 1, 1);
    let text = render_color(&grid);
    assert!(text.contains("\x1b[48;2;17;203;91m"));
}
