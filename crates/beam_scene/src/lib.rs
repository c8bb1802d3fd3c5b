//! Beam scene - JSON scene descriptions for the tracer.
//!
//! This crate provides:
//!
//! - **Loading**: `parse_scene` / `load_scene` turn a description into a
//!   [`beam_tracer::Scene`], reporting every malformed input as a [`LoadError`]
//! - **Reloading**: `reload_scene` replaces a live scene, leaving it cleared
//!   when the new description is rejected
//! - **Hot reload**: [`SceneWatcher`] polls a file and reloads on change
//!
//! # Example
//!
//! ```ignore
//! use beam_scene::load_scene;
//!
//! let scene = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} shapes", scene.len());
//! ```

mod loader;
mod watcher;

pub use loader::{load_scene, parse_scene, reload_scene, LoadError, LoadResult};
pub use watcher::SceneWatcher;
