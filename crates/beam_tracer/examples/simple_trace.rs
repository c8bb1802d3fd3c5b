//! Simple ray casting example.
//!
//! Builds a scene in code, traces one frame and saves it in PPM format.

use beam_tracer::{color_to_rgba8, Camera, Color, Material, PixelBuffer, Scene, Vec3};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Beam - Simple Trace Example");
    println!("===========================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?} ({} shapes)", start.elapsed(), scene.len());

    let (width, height) = (800, 450);
    let camera = Camera::new(
        width as f32 / height as f32,
        70.0,
        Vec3::new(0.0, 2.0, -8.0), // position
        Vec3::new(0.0, -0.2, 1.0), // direction
        1.0,                       // focal distance
        0.0,                       // aperture
    );
    let sky = Color::new(0.5, 0.7, 1.0, 1.0);

    let mut buffer = PixelBuffer::new(width, height);
    let start = std::time::Instant::now();
    scene.trace(&camera, sky, &mut buffer);
    println!("Traced {}x{} in {:?}", width, height, start.elapsed());

    let filename = "output.ppm";
    save_ppm(&buffer, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn diffuse(r: f32, g: f32, b: f32) -> Material {
    Material::diffuse(Color::new(r, g, b, 1.0), 0.0)
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground
    scene.add_plane(diffuse(0.5, 0.5, 0.5), Vec3::Y, 0.0);

    // Three main spheres
    scene.add_sphere(diffuse(0.9, 0.9, 0.9), Vec3::new(0.0, 1.0, 0.0), 1.0);
    scene.add_sphere(diffuse(0.4, 0.2, 0.1), Vec3::new(-2.5, 1.0, 0.5), 1.0);
    scene.add_sphere(diffuse(0.7, 0.6, 0.5), Vec3::new(2.5, 1.0, 0.5), 1.0);

    // Backdrop triangle
    scene.add_triangle(
        diffuse(0.8, 0.1, 0.1),
        Vec3::new(-6.0, 0.0, 8.0),
        Vec3::new(0.0, 6.0, 8.0),
        Vec3::new(6.0, 0.0, 8.0),
    );

    // Row of small spheres with graded colors
    for i in -5..=5 {
        let t = (i + 5) as f32 / 10.0;
        scene.add_sphere(diffuse(t, 1.0 - t, 0.5), Vec3::new(i as f32 * 0.8, 0.2, -2.5), 0.2);
    }

    scene
}

fn save_ppm(buffer: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;

    for v in 0..buffer.height() {
        for u in 0..buffer.width() {
            let rgba = color_to_rgba8(buffer.get(u, v));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
