//! Error types for image loading, geometry, and playback.

/// Errors that can occur while turning an input into terminal output.
///
/// Interruption during looped playback is deliberately not represented here:
/// Ctrl-C ends the loop through normal control flow after the cursor has been
/// restored.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input bytes could not be interpreted as an image.
    #[error("could not decode \"{origin}\" as an image: {source}")]
    Decode {
        origin: String,
        source: image::ImageError,
    },

    /// The input file could not be read.
    #[error("could not read \"{path}\": {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// A remote fetch failed at the transport level.
    #[error("could not fetch \"{url}\": {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    /// A remote fetch completed but the server answered with a non-success
    /// status. The body is never fed to the decoder in this case.
    #[error("could not fetch \"{url}\": server answered {status}")]
    Retrieval {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The geometry resolver produced a zero-sized output grid.
    #[error(
        "output size would be {width}x{height} cells; \
         lower --scale (or use --auto) so both dimensions stay above zero"
    )]
    DegenerateSize { width: u32, height: u32 },

    /// The clipboard could not be opened or read.
    #[error("could not read the clipboard: {0}")]
    Clipboard(#[from] arboard::Error),

    /// `--clipboard` was set but the clipboard holds no usable text.
    #[error("clipboard is empty; copy an image path or URL first")]
    EmptyClipboard,

    /// No filename was given and `--clipboard` was not set.
    #[error("no input given; pass a filename or use --clipboard")]
    MissingInput,

    /// The Ctrl-C handler could not be registered.
    #[error("could not register the Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// Output-sink I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
