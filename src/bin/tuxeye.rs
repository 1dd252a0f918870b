use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tuxeye::{InMemorySurface, PixelBuffer, Point, ThemeSpec, farbfeld};

#[derive(Parser, Debug)]
#[command(name = "tuxeye", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of a theme for a pointer position.
    Frame(FrameArgs),
    /// Print the resolved theme (paths and mover parameters) as JSON.
    Theme(ThemeArgs),
    /// Print the dimensions of a farbfeld file.
    Info(InfoArgs),
    /// Write a uniformly cleared farbfeld image.
    Clear(ClearArgs),
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// Directory containing one sub-directory per theme.
    #[arg(long, default_value = "themes")]
    themes: PathBuf,

    /// Theme name.
    #[arg(long, default_value = "tux")]
    theme: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    theme: ThemeArgs,

    /// Pointer position in canvas coordinates, as `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pointer: Point,

    /// Output farbfeld path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the frame as a 16-bit PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Also write the window stencil as a binary PBM.
    #[arg(long)]
    mask: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Farbfeld file to inspect.
    path: PathBuf,
}

#[derive(Parser, Debug)]
struct ClearArgs {
    #[arg(long)]
    width: u32,

    #[arg(long)]
    height: u32,

    /// Uniform alpha in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    alpha: f64,

    /// Output farbfeld path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Theme(args) => cmd_theme(args),
        Command::Info(args) => cmd_info(args),
        Command::Clear(args) => cmd_clear(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("bad x in '{s}'"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("bad y in '{s}'"))?;
    Ok(Point::new(x, y))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let spec = ThemeSpec::resolve(&args.theme.themes, &args.theme.theme)?;
    let mut scene = tuxeye::Scene::from_theme(spec.load()?)?;

    let mut surface = if args.mask.is_some() {
        InMemorySurface::new()
    } else {
        InMemorySurface::without_shape()
    };
    scene.present(args.pointer, &mut surface)?;
    tracing::info!(
        placements = ?scene.stats().last_placements,
        "rendered frame"
    );

    let canvas = scene.canvas();
    ensure_parent_dir(&args.out)?;
    farbfeld::save(&args.out, canvas)
        .with_context(|| format!("write farbfeld '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png) = &args.png {
        write_png(png, canvas)?;
        eprintln!("wrote {}", png.display());
    }

    if let Some(mask_path) = &args.mask {
        let mask = surface
            .mask()
            .context("surface did not receive a stencil")?;
        ensure_parent_dir(mask_path)?;
        std::fs::write(mask_path, mask.to_pbm())
            .with_context(|| format!("write mask '{}'", mask_path.display()))?;
        eprintln!("wrote {}", mask_path.display());
    }
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let spec = ThemeSpec::resolve(&args.themes, &args.theme)?;
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(&args.path).with_context(|| format!("read '{}'", args.path.display()))?;
    let (width, height) = farbfeld::peek_dimensions(&bytes)?;
    println!("{width}x{height}");
    Ok(())
}

fn cmd_clear(args: ClearArgs) -> anyhow::Result<()> {
    let mut buf = PixelBuffer::new(args.width, args.height)?;
    tuxeye::clear(&mut buf, args.alpha);
    ensure_parent_dir(&args.out)?;
    farbfeld::save(&args.out, &buf)
        .with_context(|| format!("write farbfeld '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(path: &Path, canvas: &PixelBuffer) -> anyhow::Result<()> {
    let img = image::ImageBuffer::<image::Rgba<u16>, Vec<u16>>::from_raw(
        canvas.width(),
        canvas.height(),
        canvas.pixels().to_vec(),
    )
    .context("canvas does not fit an RGBA16 image")?;
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
