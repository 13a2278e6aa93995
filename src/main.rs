use clap::{Parser, Subcommand};
use favipress::imaging::{CropRect, EncodeFormat, ImageBackend, RasterBackend};
use favipress::output;
use favipress::session::{Artifact, EditingSession};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Shared flags for commands that can crop before exporting.
#[derive(clap::Args, Clone)]
struct CropArgs {
    /// Crop selection as x,y,width,height (display-space pixels)
    #[arg(long, value_name = "X,Y,W,H")]
    crop: Option<String>,

    /// Size of the preview box the selection was drawn on, as WxH.
    /// Defaults to the image's natural size (selection taken as source pixels)
    #[arg(long, value_name = "WxH")]
    display: Option<String>,
}

#[derive(Parser)]
#[command(name = "favipress")]
#[command(about = "Crop images, convert to WebP, and press favicon sets")]
#[command(long_about = "\
Crop images, convert to WebP, and press favicon sets

One image in, one artifact out:

  favipress info photo.jpg
  favipress convert photo.jpg --format webp
  favipress convert photo.jpg --crop 10,20,200,100 --display 400x200
  favipress favicons logo.png
  favipress ico logo.png

Crop selections are given in display-space pixels (the coordinates a crop
widget reports over a scaled preview); pass --display to declare the preview
size and favipress maps the selection back to source pixels per axis. Without
--display the selection is taken as source pixels directly.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the pixel dimensions of an image
    Info { input: PathBuf },
    /// Re-encode an image into another format (WebP by default)
    Convert {
        input: PathBuf,
        /// Target format: webp, png, jpeg, gif, bmp, tiff
        #[arg(long, default_value = "webp")]
        format: String,
        /// Output path (default: edited-image.<ext>)
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        crop: CropArgs,
    },
    /// Extract a crop selection as a PNG
    Crop {
        input: PathBuf,
        /// Crop selection as x,y,width,height (display-space pixels)
        #[arg(long, value_name = "X,Y,W,H")]
        crop: String,
        /// Preview box size as WxH (defaults to the natural size)
        #[arg(long, value_name = "WxH")]
        display: Option<String>,
        /// Output path
        #[arg(long, default_value = "cropped.png")]
        output: PathBuf,
    },
    /// Generate favicon PNGs (16–192 px) zipped as favicons.zip
    Favicons {
        input: PathBuf,
        #[arg(long, default_value = "favicons.zip")]
        output: PathBuf,
        #[command(flatten)]
        crop: CropArgs,
    },
    /// Generate a multi-resolution favicon.ico
    Ico {
        input: PathBuf,
        #[arg(long, default_value = "favicon.ico")]
        output: PathBuf,
        #[command(flatten)]
        crop: CropArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Info { input } => {
            let bytes = std::fs::read(&input)?;
            let dims = RasterBackend::new().identify(&bytes)?;
            output::print_dimensions(&input, dims);
        }
        Command::Convert {
            input,
            format,
            output: out_path,
            crop,
        } => {
            let encode_format = EncodeFormat::from_name(&format)
                .ok_or_else(|| format!("unknown target format {format:?}"))?;
            let mut session = new_session(&input)?;
            apply_crop_args(&mut session, &crop)?;
            let mut artifact = session.export_converted(encode_format)?;
            let out_path = out_path.unwrap_or_else(|| PathBuf::from(&artifact.filename));
            if let Some(name) = out_path.file_name() {
                artifact.filename = name.to_string_lossy().into_owned();
            }
            write_artifact(&artifact, &out_path)?;
        }
        Command::Crop {
            input,
            crop,
            display,
            output: out_path,
        } => {
            let mut session = new_session(&input)?;
            let rect = parse_crop_spec(&crop)?;
            let displayed = resolve_display(&session, display.as_deref())?;
            if !session.confirm_crop(rect, displayed)? {
                return Err("crop selection has zero area".into());
            }
            let bytes = session
                .cropped_image()
                .ok_or("crop selection has zero area")?
                .to_vec();
            std::fs::write(&out_path, &bytes)?;
            let artifact = Artifact {
                filename: out_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                bytes,
            };
            output::print_artifact(&artifact, &out_path);
        }
        Command::Favicons {
            input,
            output: out_path,
            crop,
        } => {
            let mut session = new_session(&input)?;
            apply_crop_args(&mut session, &crop)?;
            let artifact = session.export_favicons()?;
            write_artifact(&artifact, &out_path)?;
        }
        Command::Ico {
            input,
            output: out_path,
            crop,
        } => {
            let mut session = new_session(&input)?;
            apply_crop_args(&mut session, &crop)?;
            let artifact = session.export_ico()?;
            write_artifact(&artifact, &out_path)?;
        }
    }

    Ok(())
}

fn new_session(input: &Path) -> Result<EditingSession<RasterBackend>, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(input)?;
    let mut session = EditingSession::new(RasterBackend::new());
    session.load(bytes)?;
    Ok(session)
}

/// Apply optional --crop/--display flags: confirm the crop when given,
/// otherwise export the canonical image.
fn apply_crop_args(
    session: &mut EditingSession<RasterBackend>,
    args: &CropArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match &args.crop {
        Some(spec) => {
            let rect = parse_crop_spec(spec)?;
            let displayed = resolve_display(session, args.display.as_deref())?;
            if !session.confirm_crop(rect, displayed)? {
                return Err("crop selection has zero area".into());
            }
            session.set_apply_crop(true);
        }
        None => session.set_apply_crop(false),
    }
    Ok(())
}

fn resolve_display(
    session: &EditingSession<RasterBackend>,
    display: Option<&str>,
) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    match display {
        Some(spec) => parse_display_spec(spec),
        None => {
            let dims = session
                .canonical_dimensions()
                .ok_or("no image loaded")?;
            Ok((dims.width, dims.height))
        }
    }
}

/// Parse `x,y,w,h` into a display-space crop rectangle.
fn parse_crop_spec(spec: &str) -> Result<CropRect, Box<dyn std::error::Error>> {
    let parts: Vec<f64> = spec
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid crop spec {spec:?}, expected x,y,w,h"))?;
    if parts.len() != 4 {
        return Err(format!("invalid crop spec {spec:?}, expected x,y,w,h").into());
    }
    Ok(CropRect::new(parts[0], parts[1], parts[2], parts[3]))
}

/// Parse `WxH` into displayed dimensions.
fn parse_display_spec(spec: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| format!("invalid display spec {spec:?}, expected WxH"))?;
    let w = w.trim().parse::<u32>()?;
    let h = h.trim().parse::<u32>()?;
    Ok((w, h))
}

fn write_artifact(artifact: &Artifact, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, &artifact.bytes)?;
    output::print_artifact(artifact, path);
    Ok(())
}
