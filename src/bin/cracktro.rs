use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cracktro", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Advance a project some frames and write the last one as a PNG.
    Frame(FrameArgs),
    /// Write a numbered PNG sequence.
    Frames(FramesArgs),
    /// Write a new project built from a template.
    New(NewArgs),
    /// Export a project as a standalone HTML page.
    Html(HtmlArgs),
    /// List the built-in templates.
    Templates,
}

#[derive(Args, Debug)]
struct RenderFlags {
    /// Seed for effect randomness. Unseeded runs differ between invocations.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the 50px editor grid above all effects.
    #[arg(long)]
    grid: bool,

    /// Darken every other row.
    #[arg(long)]
    scanlines: bool,

    /// How per-pixel fields (plasma, checkerboard, rotozoom) are evaluated.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,

    /// Worker threads for the shader backend.
    #[arg(long)]
    threads: Option<usize>,

    /// Start paused: effects are painted but never advanced.
    #[arg(long)]
    paused: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Frames to advance before capturing (the captured frame is the last).
    #[arg(long, default_value_t = 1)]
    frames: u32,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames to write.
    #[arg(long)]
    count: u32,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Template id (see `cracktro templates`).
    #[arg(long)]
    template: String,

    /// Output project JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct HtmlArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
    Shader,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::New(args) => cmd_new(args),
        Command::Html(args) => cmd_html(args),
        Command::Templates => cmd_templates(),
    }
}

fn read_project_json(path: &Path) -> anyhow::Result<cracktro::Project> {
    let f = File::open(path).with_context(|| format!("open project '{}'", path.display()))?;
    let r = BufReader::new(f);
    let project: cracktro::Project =
        serde_json::from_reader(r).with_context(|| "parse project JSON")?;
    project.validate()?;
    Ok(project)
}

fn make_session(flags: &RenderFlags, in_path: &Path) -> anyhow::Result<cracktro::RenderSession> {
    let opts = cracktro::RenderSessionOpts {
        seed: flags.seed,
        field_backend: match flags.backend {
            BackendChoice::Cpu => cracktro::FieldBackend::Cpu,
            BackendChoice::Shader => cracktro::FieldBackend::Shader,
        },
        threads: flags.threads,
        overlays: cracktro::Overlays {
            grid: flags.grid,
            scanlines: flags.scanlines,
        },
        asset_root: Some(
            in_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
        ),
        ..cracktro::RenderSessionOpts::default()
    };
    let clock = cracktro::PlaybackClock::new(!flags.paused);
    Ok(cracktro::RenderSession::with_clock(opts, clock)?)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(path: &Path, frame: &cracktro::FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let project = read_project_json(&args.in_path)?;
    let mut session = make_session(&args.render, &args.in_path)?;
    let frame = session.render_after(&project, args.frames)?;

    ensure_parent(&args.out)?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.count == 0 {
        anyhow::bail!("--count must be >= 1");
    }
    let project = read_project_json(&args.in_path)?;
    let mut session = make_session(&args.render, &args.in_path)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for i in 0..args.count {
        let frame = session.render_frame(&project)?;
        write_png(&args.out_dir.join(format!("frame_{i:05}.png")), &frame)?;
    }

    let stats = session.stats();
    eprintln!(
        "wrote {} frames to {} ({} layers painted, {} reseeds)",
        args.count,
        args.out_dir.display(),
        stats.layers_painted,
        stats.reseeds
    );
    Ok(())
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let template = cracktro::template(&args.template).with_context(|| {
        format!(
            "unknown template '{}' (run `cracktro templates`)",
            args.template
        )
    })?;
    let project = template.instantiate()?;
    let json = cracktro::export_json(&project)?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write project '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_html(args: HtmlArgs) -> anyhow::Result<()> {
    let project = read_project_json(&args.in_path)?;
    let html = cracktro::standalone_html(&project)?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_templates() -> anyhow::Result<()> {
    for t in cracktro::templates() {
        println!("{:<20} {:<22} {}", t.id, t.name, t.description);
    }
    Ok(())
}
