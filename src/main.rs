use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use img2ascii::ascii::{self, Charset, RenderConfig, SizeMode};
use img2ascii::{player, source, terminal};

/// Parse and validate a scale divisor (> 0)
fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if scale.is_nan() || scale <= 0.0 {
        return Err(format!("Scale must be greater than 0, got {}", scale));
    }
    Ok(scale)
}

/// Parse and validate the frame delay in seconds (>= 0)
fn parse_delay(s: &str) -> Result<f32, String> {
    let delay: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if delay.is_nan() || delay < 0.0 {
        return Err(format!("Delay must be 0 or more seconds, got {}", delay));
    }
    Ok(delay)
}

/// img2ascii: Converts an image or gif into ascii text
#[derive(Parser)]
#[command(name = "img2ascii")]
#[command(version, about = "Converts an image or gif into ascii text")]
#[command(long_about = "Converts an image into a character grid for the terminal, \
    optionally with 24-bit background colors. Animated gifs are replayed \
    in place as a looping animation until Ctrl+C.")]
#[command(after_help = "EXAMPLES:
    # Render a photo, auto-fitted to the terminal
    img2ascii photo.jpg --auto

    # Dense block characters with 24-bit color, stretched to the terminal
    img2ascii photo.png -S -e -c

    # Loop a gif at 20 frames per second
    img2ascii anim.gif -a -d 0.05

    # Fetch a remote image and save the rendering to a file
    img2ascii https://example.com/cat.png -o cat.txt

    # Use the path or URL currently on the clipboard
    img2ascii --clipboard")]
struct Cli {
    /// The name of the input file (or URL); optional with --clipboard
    #[arg(required_unless_present = "clipboard")]
    filename: Option<String>,

    /// The name of the output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scale x and y of image (output shrinks as the scale grows)
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_scale)]
    scale: f32,

    /// Divide the horizontal axis by this factor (pairs with --scale-y, default 1)
    #[arg(long, value_parser = parse_scale)]
    scale_x: Option<f32>,

    /// Divide the vertical axis by this factor (pairs with --scale-x, default 2)
    #[arg(long, value_parser = parse_scale)]
    scale_y: Option<f32>,

    /// Use more basic ascii scale
    #[arg(short, long, conflicts_with = "extended")]
    basic: bool,

    /// Use the extended ascii scale
    #[arg(short, long)]
    extended: bool,

    /// Reverse ascii scale (dense glyphs represent dark pixels)
    #[arg(short, long)]
    reverse: bool,

    /// Use colors
    #[arg(short, long)]
    color: bool,

    /// Delay for displaying gifs in seconds
    #[arg(short, long, default_value_t = 0.1, value_parser = parse_delay)]
    delay: f32,

    /// Automatically resize image to what fits the terminal; preserves aspect ratio
    #[arg(short, long, conflicts_with_all = ["stretch", "scale_x", "scale_y"])]
    auto: bool,

    /// Automatically resize image to what fits the terminal; doesn't preserve aspect ratio
    #[arg(short = 'S', long, conflicts_with_all = ["scale_x", "scale_y"])]
    stretch: bool,

    /// Use the clipboard instead of input provided; filename is optional if this is passed
    #[arg(short = 'C', long)]
    clipboard: bool,

    /// Override gif and make it only show the first frame of the gif
    #[arg(short = 'f', long)]
    one_frame: bool,
}

impl Cli {
    fn size_mode(&self) -> SizeMode {
        if self.auto {
            SizeMode::AutoFit
        } else if self.stretch {
            SizeMode::Stretch
        } else if self.scale_x.is_some() || self.scale_y.is_some() {
            SizeMode::Axes {
                x: self.scale_x.unwrap_or(1.0),
                y: self.scale_y.unwrap_or(2.0),
            }
        } else {
            SizeMode::Scale(self.scale)
        }
    }

    fn charset(&self) -> Charset {
        if self.extended {
            Charset::Blocks
        } else if self.basic {
            Charset::Short
        } else {
            Charset::Long
        }
    }
}

fn run(cli: Cli) -> img2ascii::error::Result<()> {
    let location = source::resolve_location(cli.filename.as_deref(), cli.clipboard)?;
    let input = source::load(&location)?;

    let config = RenderConfig {
        mode: cli.size_mode(),
        charset: cli.charset(),
        reversed: cli.reverse,
        color: cli.color,
        delay: Duration::from_secs_f32(cli.delay),
    };
    let term = terminal::size_or_default();
    log::debug!(
        "input {location:?}: {} frame(s), {} palette, terminal {}x{}",
        input.frame_count(),
        config.charset.name(),
        term.0,
        term.1
    );

    // Every frame is rendered before anything is emitted, so a geometry or
    // sampling failure surfaces before output starts.
    let frames = input.into_frames(cli.one_frame);
    let rendered = frames
        .iter()
        .map(|frame| ascii::render_frame(frame, &config, term))
        .collect::<img2ascii::error::Result<Vec<String>>>()?;

    if rendered.len() == 1 {
        player::write_static(&rendered[0], cli.output.as_deref())
    } else {
        if cli.output.is_none() {
            player::setup_ctrlc_handler()?;
        }
        player::play(&rendered, cli.output.as_deref(), config.delay)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
