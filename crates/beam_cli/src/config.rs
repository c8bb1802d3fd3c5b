//! Render settings: image size, camera placement and background.

use std::path::Path;

use anyhow::{Context, Result};
use beam_math::{Vec3, Vec4};
use beam_tracer::{Camera, Color, WORLD_UP};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Settings for one render. Missing JSON keys take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub camera_position: [f32; 3],
    pub camera_direction: [f32; 3],
    pub focal_distance: f32,
    pub aperture_radius: f32,
    /// Background RGBA for rays that hit nothing
    pub sky_color: [f32; 4],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 80.0,
            camera_position: [0.0, 0.0, -3.0],
            camera_direction: [0.0, 0.0, 1.0],
            focal_distance: 5.0,
            aperture_radius: 0.1,
            sky_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl RenderSettings {
    /// Read settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings {}", path.display()))
    }

    /// Settings file (if any) with command line overrides applied.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(width) = args.width {
            settings.width = width;
        }
        if let Some(height) = args.height {
            settings.height = height;
        }
        if let Some(fov) = args.fov {
            settings.fov = fov;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would produce an empty image or an undefined camera basis.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "Image size must be non-zero, got {}x{}",
            self.width,
            self.height
        );

        let direction = Vec3::from_array(self.camera_direction).normalize_or_zero();
        anyhow::ensure!(
            WORLD_UP.cross(direction).length_squared() > 1e-12,
            "Camera direction must be non-zero and not parallel to world up, got {:?}",
            self.camera_direction
        );
        Ok(())
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn sky_color(&self) -> Color {
        Vec4::from_array(self.sky_color)
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            self.aspect(),
            self.fov,
            Vec3::from_array(self.camera_position),
            Vec3::from_array(self.camera_direction),
            self.focal_distance,
            self.aperture_radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "width": 320, "sky_color": [0.1, 0.2, 0.3, 1.0] }"#)
                .expect("settings should parse");

        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 480);
        assert_eq!(settings.sky_color(), Vec4::new(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn test_camera_from_defaults() {
        let settings = RenderSettings::default();
        let camera = settings.camera();

        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(camera.forward(), Vec3::Z);
        assert!((camera.aspect() - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(camera.focal_distance(), 5.0);
    }

    #[test]
    fn test_flags_override_file() {
        let path = std::env::temp_dir().join(format!("beam_settings_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "width": 100, "height": 50, "fov": 45 }"#).expect("write settings");

        let args = Args::try_parse_from([
            "beam",
            "scene.json",
            "--config",
            path.to_str().expect("temp path is utf-8"),
            "--height",
            "75",
        ])
        .expect("args should parse");
        let settings = RenderSettings::resolve(&args).expect("settings should resolve");

        assert_eq!(settings.width, 100);
        assert_eq!(settings.height, 75);
        assert_eq!(settings.fov, 45.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_zero_size_rejected() {
        let args = Args::try_parse_from(["beam", "scene.json", "--width", "0"]).expect("args should parse");
        assert!(RenderSettings::resolve(&args).is_err());
    }

    #[test]
    fn test_degenerate_camera_direction_rejected() {
        for direction in [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, -2.5, 0.0]] {
            let settings = RenderSettings {
                camera_direction: direction,
                ..RenderSettings::default()
            };
            assert!(settings.validate().is_err(), "{direction:?} should be rejected");
        }

        let tilted = RenderSettings {
            camera_direction: [0.0, 1.0, 0.01],
            ..RenderSettings::default()
        };
        assert!(tilted.validate().is_ok());
    }

    #[test]
    fn test_vertical_direction_in_file_rejected() {
        let path = std::env::temp_dir().join(format!("beam_settings_up_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "camera_direction": [0, 1, 0] }"#).expect("write settings");

        let args = Args::try_parse_from([
            "beam",
            "scene.json",
            "--config",
            path.to_str().expect("temp path is utf-8"),
        ])
        .expect("args should parse");
        assert!(RenderSettings::resolve(&args).is_err());

        std::fs::remove_file(&path).ok();
    }
}
