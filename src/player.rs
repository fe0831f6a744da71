//! Frame playback: single-shot emission and looping terminal animation.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::terminal::CursorGuard;

/// Moves the cursor to the home position before a frame is redrawn in place.
const CURSOR_HOME: &str = "\x1b[1;1H";

/// Global flag for handling Ctrl+C across the application
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Check if Ctrl+C has been received.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// This should be called once, before looped playback starts. The handler
/// only flips the flag; the playback loop notices it at the next iteration
/// boundary and unwinds through the cursor guard, so the terminal is never
/// left with a hidden cursor.
pub fn setup_ctrlc_handler() -> std::result::Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    })
}

/// Emit a single rendered frame: one write to the file path, or stdout.
pub fn write_static(frame: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, frame)?;
            log::info!("wrote rendering to {}", path.display());
        }
        None => println!("{frame}"),
    }
    Ok(())
}

/// Emit an animation.
///
/// With a file sink, all frames are concatenated with blank-line separators
/// and written once. With the terminal, frames are redrawn in place in a
/// loop that only ends on interruption.
pub fn play(frames: &[String], output: Option<&Path>, delay: Duration) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, frames.join("\n\n"))?;
            log::info!("wrote {} frames to {}", frames.len(), path.display());
            Ok(())
        }
        None => play_looping(frames, delay),
    }
}

/// Redraw frames in order, wrapping after the last, until Ctrl+C.
///
/// All frames were rendered before this is called, so the loop only moves
/// the cursor home, writes, and sleeps. The hidden cursor is scoped to this
/// function: the guard restores it on interruption, on write errors, and on
/// panic alike.
fn play_looping(frames: &[String], delay: Duration) -> Result<()> {
    if frames.is_empty() {
        return Ok(());
    }

    let mut guard = CursorGuard::hide()?;
    log::info!(
        "looping {} frames at {:.0?} per frame, Ctrl+C stops",
        frames.len(),
        delay
    );

    let mut stdout = io::stdout().lock();
    'playback: loop {
        for frame in frames {
            if interrupted() {
                break 'playback;
            }
            write!(stdout, "{CURSOR_HOME}{frame}")?;
            stdout.flush()?;
            thread::sleep(delay);
        }
    }

    guard.show()?;
    Ok(())
}
