use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sunset", version, about = "Animated beach-sunset scene generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an animated (SMIL) SVG document.
    Svg(SvgArgs),
    /// Render a single instant as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence.
    Frames(FramesArgs),
    /// Dump the generated scene as JSON.
    Scene(SceneArgs),
}

#[derive(Args, Debug)]
struct SceneOpts {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Seed for reproducible scenes (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON scene config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Scene time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length of the sequence in seconds.
    #[arg(long, default_value_t = 2.0)]
    seconds: f64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

/// Mount a host on a fixed viewport and take one render pass.
fn build_scene(opts: &SceneOpts) -> anyhow::Result<sunset::Scene> {
    let mut config = match &opts.config {
        Some(path) => sunset::SceneConfig::from_path(path)?,
        None => sunset::SceneConfig::default(),
    };
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }

    let viewport = sunset::Viewport::new(opts.width, opts.height)?;
    let mut host = sunset::SceneHost::new(config);
    host.mount(&sunset::FixedViewport(viewport));
    let scene = host
        .render()
        .context("scene host rendered nothing for the requested viewport")?;
    host.unmount();
    Ok(scene)
}

fn write_text(path: &std::path::Path, text: &str) -> anyhow::Result<()> {
    sunset::ensure_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args.scene)?;
    write_text(&args.out, &sunset::render_animated_svg(&scene)?)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args.scene)?;
    let frame = sunset::render_frame(&scene, args.time)?;
    sunset::write_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args.scene)?;
    let fps = sunset::Fps::new(args.fps, 1)?;
    let range = sunset::range_for_secs(fps, args.seconds)?;
    let threading = sunset::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let frames = sunset::render_frames(&scene, fps, range, &threading)?;
    let paths = sunset::write_png_sequence(&frames, &args.out_dir)?;
    eprintln!("wrote {} frames to {}", paths.len(), args.out_dir.display());
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args.scene)?;
    let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
    write_text(&args.out, &json)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
