use std::time::{Duration, Instant};

use anyhow::Result;
use beam_scene::SceneWatcher;
use beam_tracer::{Camera, Color, PixelBuffer, Scene};
use clap::Parser;

mod cli;
mod config;
mod output;

use cli::Args;
use config::RenderSettings;
use output::save_png;

/// Trace one frame and write it to disk.
fn render_frame(
    scene: &Scene,
    camera: &Camera,
    sky_color: Color,
    buffer: &mut PixelBuffer,
    args: &Args,
) -> Result<()> {
    let start = Instant::now();
    scene.trace(camera, sky_color, buffer);
    log::info!(
        "Frame time: {} ms ({} shapes)",
        start.elapsed().as_millis(),
        scene.len()
    );
    save_png(buffer, &args.output)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Beam");

    let settings = RenderSettings::resolve(&args)?;
    log::info!(
        "Image resolution: {}x{}, fov {}",
        settings.width,
        settings.height,
        settings.fov
    );

    let camera = settings.camera();
    let sky_color = settings.sky_color();
    let mut buffer = PixelBuffer::new(settings.width as usize, settings.height as usize);

    let mut scene = Scene::new();
    let mut watcher = SceneWatcher::new(&args.scene);
    if let Err(err) = watcher.load(&mut scene) {
        // The scene is left cleared; the frame shows only the background
        log::error!("Failed to load {}: {err}", args.scene.display());
    }

    render_frame(&scene, &camera, sky_color, &mut buffer, &args)?;

    if !args.watch {
        return Ok(());
    }

    log::info!("Watching {} for changes", watcher.path().display());
    let interval = Duration::from_millis(args.poll_ms);
    let mut frames = 1;
    while args.frames.map_or(true, |limit| frames < limit) {
        std::thread::sleep(interval);

        match watcher.poll(&mut scene) {
            Ok(false) => continue,
            Ok(true) => log::info!("Reloaded {} shapes", scene.len()),
            // Already logged by the watcher; render the cleared scene
            Err(_) => {}
        }

        render_frame(&scene, &camera, sky_color, &mut buffer, &args)?;
        frames += 1;
    }

    Ok(())
}
