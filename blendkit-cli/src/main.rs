use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blendkit", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Alpha-composite a foreground image over a background image.
    Composite(CompositeArgs),
    /// Print the 3x3 matrix for a 2D scale, rotation and translation.
    Transform2d(Transform2dArgs),
    /// Print the matrices and draw uniforms for a 3D frame config.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Composite job JSON (replaces --bg/--fg/--out/--opacity/--x/--y).
    #[arg(long, conflicts_with_all = ["bg", "fg", "out", "opacity", "x", "y"])]
    config: Option<PathBuf>,

    /// Background image.
    #[arg(long, required_unless_present = "config")]
    bg: Option<PathBuf>,

    /// Foreground image.
    #[arg(long, required_unless_present = "config")]
    fg: Option<PathBuf>,

    /// Output image (format chosen from the extension).
    #[arg(long, required_unless_present = "config")]
    out: Option<PathBuf>,

    /// Foreground opacity multiplier.
    #[arg(long, default_value_t = 1.0)]
    opacity: f32,

    /// Horizontal foreground offset in pixels.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    x: i32,

    /// Vertical foreground offset in pixels.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y: i32,
}

#[derive(Parser, Debug)]
struct Transform2dArgs {
    /// Translation along x.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    x: f32,

    /// Translation along y.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    y: f32,

    /// Rotation in degrees.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rotation: f32,

    /// Uniform scale.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input frame config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Composite(args) => cmd_composite(args),
        Command::Transform2d(args) => cmd_transform2d(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let job = match (args.config, args.bg, args.fg, args.out) {
        (Some(path), ..) => blendkit::CompositeConfig::from_path(&path)?,
        (None, Some(background), Some(foreground), Some(out)) => blendkit::CompositeConfig {
            background,
            foreground,
            out,
            opacity: args.opacity,
            offset: blendkit::Offset::new(args.x, args.y),
        },
        _ => anyhow::bail!("composite needs either --config or all of --bg, --fg and --out"),
    };

    let mut background = load_rgba(&job.background)?;
    let foreground = load_rgba(&job.foreground)?;
    blendkit::composite(&mut background, &foreground, job.opacity, job.offset);

    if let Some(parent) = job.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    background
        .into_rgba_image()?
        .save(&job.out)
        .with_context(|| format!("write image '{}'", job.out.display()))?;

    eprintln!("wrote {}", job.out.display());
    Ok(())
}

fn load_rgba(path: &Path) -> anyhow::Result<blendkit::Image> {
    let img = image::open(path)
        .with_context(|| format!("decode image '{}'", path.display()))?
        .to_rgba8();
    tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded image");
    Ok(blendkit::Image::try_from(img)?)
}

fn cmd_transform2d(args: Transform2dArgs) -> anyhow::Result<()> {
    let transform = blendkit::Transform2D {
        position: [args.x, args.y],
        rotation_deg: args.rotation,
        scale: args.scale,
    };
    let out = serde_json::json!({
        "transform": transform,
        "matrix": transform.matrix(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = blendkit::FrameConfig::from_path(&args.in_path)?;
    let uniforms = cfg.uniforms()?;
    println!("{}", serde_json::to_string_pretty(&uniforms)?);
    Ok(())
}
