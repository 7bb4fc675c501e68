use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use objview::app::App;
use objview::config::{ViewerConfig, WINDOW_HEIGHT, WINDOW_WIDTH};
use objview::logging::init_tracing;
use objview::objects::{self, find_mesh, Mesh, MeshCollection, ParseOptions};
use objview::render::{HeadlessRenderer, Topology};

#[derive(Parser)]
#[command(name = "objview")]
#[command(version, about = "View and rewrite Wavefront OBJ meshes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window for one mesh
    ///
    /// No GPU backend is wired in yet: the mesh is triangulated and handed to
    /// the headless renderer, so the window itself stays blank.
    View(ViewCmd),

    /// List the meshes of a file and check their face indices
    Info(InfoCmd),

    /// Write one mesh of a file to a new OBJ file
    Convert(ConvertCmd),
}

#[derive(Args)]
struct SourceArgs {
    /// OBJ file to read
    file: PathBuf,

    /// Reject malformed `v` and `f` records instead of patching them
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct ViewCmd {
    #[command(flatten)]
    source: SourceArgs,

    /// Mesh position or name
    #[arg(short, long, default_value = "0")]
    mesh: String,

    /// Fan-triangulate faces instead of drawing their indices as a list
    #[arg(long)]
    fan: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: u32,
}

#[derive(Args)]
struct InfoCmd {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args)]
struct ConvertCmd {
    #[command(flatten)]
    source: SourceArgs,

    /// Destination file, overwritten if present
    output: PathBuf,

    /// Mesh position or name
    #[arg(short, long, default_value = "0")]
    mesh: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "info",
    };
    init_tracing(level)?;

    match cli.command {
        Commands::View(cmd) => view(cmd),
        Commands::Info(cmd) => info(cmd),
        Commands::Convert(cmd) => convert(cmd),
    }
}

fn load(source: &SourceArgs) -> Result<MeshCollection> {
    let options = ParseOptions {
        strict: source.strict,
    };
    let meshes = objects::parse_with(&source.file, &options)
        .with_context(|| format!("Failed to load {}", source.file.display()))?;

    if meshes.is_empty() {
        bail!("{} contains no mesh with both vertices and faces", source.file.display());
    }

    return Ok(meshes);
}

fn select<'a>(meshes: &'a [Mesh], selector: &str, file: &Path) -> Result<&'a Mesh> {
    return find_mesh(meshes, selector).with_context(|| format!("in {}", file.display()));
}

fn view(cmd: ViewCmd) -> Result<()> {
    let meshes = load(&cmd.source)?;
    let mesh = select(&meshes, &cmd.mesh, &cmd.source.file)?;

    if let Err(e) = mesh.validate() {
        warn!("{}", e);
    }

    let topology = if cmd.fan {
        Topology::TriangleFan
    } else {
        Topology::TriangleList
    };
    let title = format!("OBJ Viewer - {}", mesh.name);
    let config = ViewerConfig::default()
        .with_size(cmd.width, cmd.height)
        .with_title(&title)
        .with_topology(topology);

    let renderer = App::new(config, mesh, HeadlessRenderer::new(cmd.width, cmd.height)).run()?;
    info!(frames = renderer.frames(), "viewer closed");

    return Ok(());
}

fn info(cmd: InfoCmd) -> Result<()> {
    let meshes = load(&cmd.source)?;

    println!("{}: {} mesh(es)", cmd.source.file.display(), meshes.len());
    for (position, mesh) in meshes.iter().enumerate() {
        println!(
            "  [{}] {}: {} vertices, {} faces, {} triangles",
            position,
            mesh.name,
            mesh.vertices.len(),
            mesh.faces.len(),
            mesh.triangle_count()
        );

        for dangling in mesh.dangling_indices() {
            println!(
                "      face {} corner {}: index {} is outside 0..{}",
                dangling.face,
                dangling.corner,
                dangling.index,
                mesh.vertices.len()
            );
        }
    }

    return Ok(());
}

fn convert(cmd: ConvertCmd) -> Result<()> {
    let meshes = load(&cmd.source)?;
    let mesh = select(&meshes, &cmd.mesh, &cmd.source.file)?;

    objects::serialize(mesh, &cmd.output)
        .with_context(|| format!("Failed to write {}", cmd.output.display()))?;
    info!(mesh = %mesh.name, output = %cmd.output.display(), "mesh written");

    return Ok(());
}
