//! Input acquisition: local files, remote URLs, clipboard-provided locations,
//! and decoding into still or animated frame sequences.

use std::fs;
use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// A decoded input: one frame, or an ordered frame sequence.
///
/// Frame order is display order. Every frame is held as RGBA; the sampler
/// derives grayscale or RGB views from it per render.
pub enum ImageInput {
    Still(RgbaImage),
    Animation(Vec<RgbaImage>),
}

impl ImageInput {
    /// Whether this input carries more than one frame.
    pub fn is_animated(&self) -> bool {
        matches!(self, ImageInput::Animation(_))
    }

    /// Number of frames (1 for a still image).
    pub fn frame_count(&self) -> usize {
        match self {
            ImageInput::Still(_) => 1,
            ImageInput::Animation(frames) => frames.len(),
        }
    }

    /// Frames in display order. `one_frame` truncates an animation to its
    /// first frame, forcing static rendering downstream.
    pub fn into_frames(self, one_frame: bool) -> Vec<RgbaImage> {
        match self {
            ImageInput::Still(frame) => vec![frame],
            ImageInput::Animation(mut frames) => {
                if one_frame {
                    frames.truncate(1);
                }
                frames
            }
        }
    }
}

/// Work out where the input comes from.
///
/// With `use_clipboard` set, the clipboard *text* is the location - the
/// clipboard supplies a path or URL, not pixels.
///
/// # Errors
/// [`Error::EmptyClipboard`] when the clipboard holds no text,
/// [`Error::MissingInput`] when neither source is available.
pub fn resolve_location(filename: Option<&str>, use_clipboard: bool) -> Result<String> {
    if use_clipboard {
        let text = arboard::Clipboard::new()?.get_text()?;
        if text.is_empty() {
            return Err(Error::EmptyClipboard);
        }
        log::debug!("using clipboard text as input location: {text:?}");
        return Ok(text);
    }
    filename.map(str::to_owned).ok_or(Error::MissingInput)
}

/// Whether a location is a remote URL rather than a local path.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load and decode an input location (file path or URL).
pub fn load(location: &str) -> Result<ImageInput> {
    let bytes = if is_url(location) {
        fetch_remote(location)?
    } else {
        fs::read(location).map_err(|source| Error::Read {
            path: location.to_string(),
            source,
        })?
    };
    decode(&bytes, location)
}

/// Fetch a remote image synchronously.
///
/// A non-success status is surfaced with the offending URL and status and the
/// body is discarded; it is never handed to the decoder. No retries.
fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    log::info!("fetching {url}");
    let response = reqwest::blocking::get(url).map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Retrieval {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;
    Ok(body.to_vec())
}

/// Decode raw bytes into a still image or a gif frame sequence.
///
/// `origin` only labels errors; decoding is format-sniffed from the bytes.
/// A gif that turns out to hold a single frame is treated as a still image.
pub fn decode(bytes: &[u8], origin: &str) -> Result<ImageInput> {
    let decode_error = |source| Error::Decode {
        origin: origin.to_string(),
        source,
    };

    let format = image::guess_format(bytes).map_err(decode_error)?;
    if format == ImageFormat::Gif {
        let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(decode_error)?;
        let frames = decoder.into_frames().collect_frames().map_err(decode_error)?;
        let mut buffers: Vec<RgbaImage> =
            frames.into_iter().map(image::Frame::into_buffer).collect();
        log::info!("decoded {} gif frame(s) from {origin}", buffers.len());

        return match buffers.len() {
            0 => Err(Error::Decode {
                origin: origin.to_string(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "gif contains no frames",
                )),
            }),
            1 => Ok(ImageInput::Still(buffers.remove(0))),
            _ => Ok(ImageInput::Animation(buffers)),
        };
    }

    let still = image::load_from_memory(bytes).map_err(decode_error)?;
    Ok(ImageInput::Still(still.to_rgba8()))
}
