use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "accrue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a directory of PNG frames through the temporal filter.
    Filter(FilterArgs),
    /// Print the jitter offsets for one pixel as JSON.
    Jitter(JitterArgs),
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Directory of input PNG frames, processed in file-name order.
    #[arg(long)]
    frames: PathBuf,

    /// Output directory; frames keep their file names.
    #[arg(long)]
    out: PathBuf,

    /// Directory of grayscale depth PNGs named like the colour frames.
    #[arg(long)]
    depth: Option<PathBuf>,

    /// Filter config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host frame time in milliseconds.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_time_ms: f32,

    /// Override the jitter pattern (grid, random, halton, poisson, sobol).
    #[arg(long)]
    pattern: Option<accrue::JitterPattern>,

    /// Override the temporal filter strength.
    #[arg(long)]
    strength: Option<f32>,

    /// Override the sharpening strength.
    #[arg(long)]
    sharpening: Option<f32>,

    /// Run the per-pixel passes on a rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct JitterArgs {
    /// Pixel column.
    #[arg(long)]
    x: u32,

    /// Pixel row.
    #[arg(long)]
    y: u32,

    /// Number of frames, starting at frame 0.
    #[arg(long)]
    frames: u64,

    /// Jitter pattern.
    #[arg(long, default_value_t = accrue::JitterPattern::Sobol)]
    pattern: accrue::JitterPattern,

    /// Render-target width.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Render-target height.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Jitter strength in pixels.
    #[arg(long, default_value_t = 1.0)]
    strength: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Filter(args) => cmd_filter(args),
        Command::Jitter(args) => cmd_jitter(args),
    }
}

fn list_pngs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("read frames dir '{}'", dir.display()))?
    {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => accrue::FilterConfig::from_path(path)?,
        None => accrue::FilterConfig::default(),
    };
    if let Some(p) = args.pattern {
        config.pattern = p;
    }
    if let Some(s) = args.strength {
        config.strength = s;
    }
    if let Some(s) = args.sharpening {
        config.sharpening = s;
    }
    let opts = accrue::FilterOpts {
        parallel: args.parallel,
        threads: args.threads,
    };

    let frames = list_pngs(&args.frames)?;
    if frames.is_empty() {
        anyhow::bail!("no png frames in '{}'", args.frames.display());
    }
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut filter: Option<accrue::TemporalFilter> = None;
    for path in &frames {
        let color = accrue::load_color(path)?;
        let resolution = color.resolution();
        let depth = match &args.depth {
            Some(dir) => {
                let name = path.file_name().context("frame path has no file name")?;
                accrue::load_depth(&dir.join(name))?
            }
            // No depth: a flat far plane keeps the disocclusion mask open.
            None => accrue::Texture::filled(resolution, 1.0)?,
        };
        let motion = accrue::Texture::filled(resolution, accrue::Vec2::ZERO)?;
        let inputs = accrue::FrameInputs::new(color, depth, motion, args.frame_time_ms)?;

        let f = match filter.take() {
            Some(mut f) => {
                if f.resolution() != resolution {
                    f.resize(resolution.width, resolution.height)?;
                }
                f
            }
            None => accrue::TemporalFilter::new(resolution, config, opts)?,
        };
        let out = filter.insert(f).process(&inputs)?;

        let name = path.file_name().context("frame path has no file name")?;
        accrue::save_rgb8(&out.color, &args.out.join(name))?;
        tracing::info!(
            frame = out.stats.frame.0,
            mean_weight = out.stats.mean_weight,
            disoccluded = out.stats.disoccluded,
            "filtered {}",
            path.display()
        );
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out.display());
    Ok(())
}

fn cmd_jitter(args: JitterArgs) -> anyhow::Result<()> {
    let resolution = accrue::Resolution::new(args.width, args.height)?;
    let jitter = accrue::Jitter::new(args.pattern, args.strength, resolution);
    let offsets = jitter.offsets(args.x, args.y, accrue::FrameIndex(0), args.frames);
    let doc = serde_json::json!({
        "pattern": args.pattern,
        "resolution": resolution,
        "x": args.x,
        "y": args.y,
        "offsets": offsets,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&doc).context("serialize jitter offsets")?
    );
    Ok(())
}
