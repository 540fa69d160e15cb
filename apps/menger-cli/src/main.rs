use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec3;
use menger_common::Aabb;
use menger_geometry::{MengerSponge, box_count};
use menger_input::{InputEvent, InputMapper};
use menger_render::{DebugTextRenderer, Renderer};
use menger_viewer::{ViewerConfig, ViewerState};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menger-cli", about = "Menger sponge viewer core tools")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Viewer config file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Generate a sponge mesh and report its size
    Generate {
        /// Nesting level, 0 to 4
        #[arg(short, long, default_value = "1")]
        level: u32,
        /// Minimum corner as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        min: Option<Vec3>,
        /// Maximum corner as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        max: Option<Vec3>,
        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a scripted input session and print the final frame
    Replay {
        /// Script file (YAML)
        script: PathBuf,
        /// Viewport aspect ratio used for the projection
        #[arg(long, default_value = "1.3333")]
        aspect: f32,
    },
}

/// Scripted session: frames of input events, each stamped with a clock value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReplayScript {
    frames: Vec<ScriptFrame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScriptFrame {
    /// Seconds since start.
    time: f32,
    events: Vec<InputEvent>,
}

#[derive(Debug, Serialize)]
struct MeshStats {
    level: u32,
    boxes: usize,
    vertices: usize,
    triangles: usize,
    vertex_bytes: usize,
    index_bytes: usize,
    bounds: Option<Aabb>,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got {} components", parts.len())),
    }
}

fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = ViewerConfig::from_yaml_str(&text)
        .with_context(|| format!("loading config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

fn generate(
    config: &ViewerConfig,
    level: u32,
    min: Option<Vec3>,
    max: Option<Vec3>,
    json: bool,
) -> Result<()> {
    if level > menger_geometry::MAX_NESTING_LEVEL {
        anyhow::bail!(
            "level {level} is out of range (0..={})",
            menger_geometry::MAX_NESTING_LEVEL
        );
    }
    let bounds = Aabb::new(
        min.unwrap_or(config.bounds.min),
        max.unwrap_or(config.bounds.max),
    );
    let mut sponge = MengerSponge::try_new(bounds)?;
    sponge.set_nesting_level(level);
    let mesh = sponge.generate_geometry();

    let stats = MeshStats {
        level,
        boxes: box_count(level),
        vertices: mesh.vertex_count(),
        triangles: mesh.face_count(),
        vertex_bytes: mesh.vertex_bytes().len(),
        index_bytes: mesh.index_bytes().len(),
        bounds: mesh.bounds(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Sponge level {}: {} boxes", stats.level, stats.boxes);
        println!("  vertices={} triangles={}", stats.vertices, stats.triangles);
        println!(
            "  upload size: {} vertex bytes, {} index bytes",
            stats.vertex_bytes, stats.index_bytes
        );
        if let Some(b) = stats.bounds {
            println!("  bounds: {} .. {}", b.min, b.max);
        }
    }
    Ok(())
}

fn replay(config: ViewerConfig, script: &Path, aspect: f32) -> Result<()> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("reading script {}", script.display()))?;
    let script: ReplayScript = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing script {}", script.display()))?;

    let mut viewer = ViewerState::new(config)?;
    let mut mapper = InputMapper::default();

    'frames: for (i, frame) in script.frames.iter().enumerate() {
        let _span = tracing::debug_span!("frame", index = i, time = frame.time).entered();
        viewer.advance(frame.time);
        for event in &frame.events {
            for action in mapper.map(*event) {
                if !viewer.apply(action) {
                    tracing::info!("quit requested at frame {i}");
                    break 'frames;
                }
            }
        }
        if let Some(mesh) = viewer.sync_geometry() {
            tracing::info!(
                vertex_bytes = mesh.vertex_bytes().len(),
                index_bytes = mesh.index_bytes().len(),
                "geometry upload"
            );
        }
    }
    viewer.sync_geometry();

    let uniforms = viewer.frame(aspect);
    let out = DebugTextRenderer::new().render(&viewer.render_frame(&uniforms));
    print!("{out}");
    println!(
        "Frames: {}  Regenerations: {}  Mode: {:?}",
        script.frames.len(),
        viewer.regenerations(),
        viewer.camera().mode()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("menger-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", menger_common::crate_info());
            println!("geometry: {}", menger_geometry::crate_info());
            println!("camera: {}", menger_camera::crate_info());
            println!("input: {}", menger_input::crate_info());
            println!("render: {}", menger_render::crate_info());
            println!("viewer: {}", menger_viewer::crate_info());
        }
        Commands::Generate {
            level,
            min,
            max,
            json,
        } => generate(&config, level, min, max, json)?,
        Commands::Replay { script, aspect } => replay(config, &script, aspect)?,
    }

    Ok(())
}
