//! Glyph palette definitions for ascii rendering.

/// Long ascii ramp (70 levels).
/// Characters ordered from sparsest (space) to densest ($).
/// The default: smoothest gradients on photographic input.
pub const LONG_RAMP: &str = r##" .'`^",:;Il!i><~+_-?][}{1)(|\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$"##;

/// Short ascii ramp (10 levels).
/// A coarser look that survives small output sizes and odd fonts.
pub const SHORT_RAMP: &str = " .:-=+*#%@";

/// Block-character ramp (5 levels).
/// Uses Unicode shade blocks for a chunky, high-contrast look.
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// Glyph palette for grayscale-to-character mapping.
///
/// A palette is an ordered character sequence from visually sparse to dense;
/// every variant resolves to a ramp of at least two characters, which the
/// mapper relies on when it divides by `len - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// 70-level ramp, the default
    #[default]
    Long,
    /// 10-level ramp (`--basic`)
    Short,
    /// 5-level Unicode block ramp (`--extended`)
    Blocks,
}

impl Charset {
    /// Get the raw sparse-to-dense ramp for this palette.
    pub fn ramp(&self) -> &'static str {
        match self {
            Charset::Long => LONG_RAMP,
            Charset::Short => SHORT_RAMP,
            Charset::Blocks => BLOCKS_RAMP,
        }
    }

    /// Resolve the working palette, reversed when requested.
    ///
    /// Reversal happens here, before any mapping: dense glyphs then represent
    /// dark pixels. The normalization logic downstream is unaffected.
    pub fn resolve(&self, reversed: bool) -> Vec<char> {
        let mut glyphs: Vec<char> = self.ramp().chars().collect();
        if reversed {
            glyphs.reverse();
        }
        glyphs
    }

    /// Get a human-readable name for the palette.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Long => "long",
            Charset::Short => "short",
            Charset::Blocks => "blocks",
        }
    }
}
