//! File-modification polling for scene hot reload.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use beam_tracer::Scene;

use crate::loader::{reload_scene, LoadResult};

/// Reloads a scene whenever its description file changes on disk.
///
/// Polling is driven by the host loop; nothing happens between calls.
#[derive(Debug, Clone)]
pub struct SceneWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl SceneWatcher {
    /// Watch `path`. No file access happens until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file unconditionally and remember its modification time.
    ///
    /// On failure `scene` is left cleared.
    pub fn load(&mut self, scene: &mut Scene) -> LoadResult<()> {
        self.last_modified = self.modified_time();
        let result = std::fs::read_to_string(&self.path)
            .map_err(Into::into)
            .and_then(|text| reload_scene(scene, &text));
        if result.is_err() {
            scene.clear();
        }
        result
    }

    /// Reload if the file was modified since the last load or poll.
    ///
    /// Returns `Ok(true)` when the scene was replaced. A missing file is not
    /// an error and leaves the scene untouched.
    pub fn poll(&mut self, scene: &mut Scene) -> LoadResult<bool> {
        let Some(modified) = self.modified_time() else {
            return Ok(false);
        };
        if self.last_modified.is_some_and(|last| modified <= last) {
            return Ok(false);
        }

        log::info!("Scene file {} changed, reloading", self.path.display());
        match self.load(scene) {
            Ok(()) => Ok(true),
            Err(err) => {
                log::warn!("Rejected scene reload: {err}");
                Err(err)
            }
        }
    }

    fn modified_time(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .ok()
    }
}
