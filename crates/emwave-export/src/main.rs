use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use emwave_scenes::{Scene, SphericalScene, WaveFrame};
use log::info;

/// Render wave scene frames to JSON for an external renderer
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Built-in scene to render
    #[arg(short, long, value_enum, default_value = "plane")]
    scene: Preset,

    /// JSON scene file; overrides --scene
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the selected scene description instead of its frames
    #[arg(long)]
    dump_scene: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    Plane,
    Spherical,
    /// Flat concentric circles at full base opacity
    Circular,
    Dielectric,
}

impl Preset {
    fn scene(self) -> Scene {
        match self {
            Preset::Plane => Scene::plane_wave(),
            Preset::Spherical => Scene::spherical_wave(),
            Preset::Circular => Scene::SphericalWave(SphericalScene::circular()),
            Preset::Dielectric => Scene::dielectric(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let scene = match &args.config {
        Some(path) => Scene::load(path).with_context(|| format!("loading scene {path:?}"))?,
        None => args.scene.scene(),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {path:?}"))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.dump_scene {
        writer.write_all(scene.to_json()?.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        return Ok(());
    }

    let frames = scene
        .frames()
        .with_context(|| format!("rendering {} scene", scene.name()))?;
    info!("Rendered {} frames of the {} scene", frames.len(), scene.name());

    write_frames(&mut writer, &frames, args.pretty)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        info!("Frames written to {:?}", path);
    }
    Ok(())
}

fn write_frames(writer: &mut impl Write, frames: &[WaveFrame], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, frames)?;
    } else {
        serde_json::to_writer(&mut *writer, frames)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
