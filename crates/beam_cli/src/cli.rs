use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "beam")]
#[command(about = "Casts one ray per pixel into a JSON scene and writes the image")]
pub struct Args {
    /// Scene description file (JSON)
    pub scene: PathBuf,

    /// Render settings file (JSON); flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Output PNG path
    #[arg(short, long, default_value = "beam.png")]
    pub output: PathBuf,

    /// Keep running and re-render whenever the scene file changes
    #[arg(short, long)]
    pub watch: bool,

    /// Scene file polling interval in watch mode
    #[arg(long, default_value_t = 250)]
    pub poll_ms: u64,

    /// Stop watch mode after this many rendered frames
    #[arg(long)]
    pub frames: Option<u32>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
