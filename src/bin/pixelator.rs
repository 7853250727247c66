use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pixelator::{
    FfmpegFrameReader, FrameSource, PixelatorConfig, PixelatorSession, PresenterKind, Rgb8,
    create_presenter,
};

#[derive(Parser, Debug)]
#[command(name = "pixelator", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a video as pixel art (windowed builds need the `sdl` feature).
    Play(PlayArgs),
    /// Render a single frame as pixel art and write it as JPEG.
    Frame(FrameArgs),
}

/// Settings shared by every subcommand. Flags override the config file.
#[derive(Args, Debug)]
struct PipelineArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input video.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Cell size in pixels.
    #[arg(long)]
    grid_step: Option<u32>,

    /// Quantization levels per channel (2..=256).
    #[arg(long)]
    levels: Option<u32>,

    /// Background color shown through black cells (#RRGGBB or a color name).
    #[arg(long)]
    background: Option<Rgb8>,

    /// JPEG quality for written images (1..=100).
    #[arg(long)]
    jpeg_quality: Option<u8>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Preview window size relative to the source, in (0, 1].
    #[arg(long)]
    preview_scale: Option<f64>,

    /// Display rate cap (0 = uncapped).
    #[arg(long)]
    fps: Option<u32>,

    /// Where the `S` key writes the current frame.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Run without opening windows.
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JPEG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &PipelineArgs) -> anyhow::Result<PixelatorConfig> {
    let mut cfg = match &args.config {
        Some(path) => PixelatorConfig::from_path(path)?,
        None => PixelatorConfig::default(),
    };
    if let Some(p) = &args.in_path {
        cfg.source = p.clone();
    }
    if let Some(g) = args.grid_step {
        cfg.grid_step = g;
    }
    if let Some(l) = args.levels {
        cfg.levels = l;
    }
    if let Some(bg) = args.background {
        cfg.background = bg;
    }
    if let Some(q) = args.jpeg_quality {
        cfg.jpeg_quality = q;
    }
    Ok(cfg)
}

fn open_session(
    cfg: PixelatorConfig,
) -> anyhow::Result<PixelatorSession<FfmpegFrameReader>> {
    cfg.validate()?;
    let reader = FfmpegFrameReader::open(&cfg.source)
        .with_context(|| format!("open video '{}'", cfg.source.display()))?;
    tracing::debug!(dimensions = ?reader.dimensions(), "opened video source");
    Ok(PixelatorSession::new(cfg, reader)?)
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.pipeline)?;
    if let Some(s) = args.preview_scale {
        cfg.preview_scale = s;
    }
    if let Some(fps) = args.fps {
        cfg.target_fps = fps;
    }
    if let Some(p) = args.snapshot {
        cfg.snapshot_path = p;
    }

    let mut session = open_session(cfg)?;
    let kind = if args.headless {
        PresenterKind::Headless
    } else {
        PresenterKind::Sdl
    };
    let surface = session.surface();
    let preview = session.preview();
    let mut presenter = create_presenter(
        kind,
        (surface.width(), surface.height()),
        (preview.width(), preview.height()),
        args.max_frames,
    )?;

    let stats = session.run(presenter.as_mut())?;
    eprintln!(
        "played {} frames ({} snapshots)",
        stats.frames_rendered, stats.snapshots_saved
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.pipeline)?;
    let mut session = open_session(cfg)?;
    session.advance_to(args.frame)?;
    session
        .save_snapshot_to(&args.out)
        .with_context(|| format!("write jpeg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
