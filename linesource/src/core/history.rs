use std::path::{Path, PathBuf};

use tracing::debug;

use super::engine::LineEngine;

/// Optional on-disk history and the absorb-all-failures policy around it.
///
/// Load and save failures are never surfaced: a missing file at start-up
/// means an empty history, and an unwritable path at close means the
/// session's history is simply not persisted. Orderly engine shutdown must
/// not depend on history I/O.
///
/// The file format belongs to the engine; this type only decides when to
/// round-trip it.
#[derive(Debug, Clone, Default)]
pub struct HistoryFile {
    path: Option<PathBuf>,
}

impl HistoryFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// The configured location, if persistence is enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Fill the engine's history store from disk.
    pub fn load<E: LineEngine>(&self, engine: &mut E) {
        if let Some(path) = &self.path {
            if let Err(err) = engine.load_history(path) {
                debug!(path = %path.display(), %err, "no history loaded");
            }
        }
    }

    /// Write the engine's history store to disk, creating or truncating
    /// the file.
    pub fn save<E: LineEngine>(&self, engine: &mut E) {
        if let Some(path) = &self.path {
            if let Err(err) = engine.save_history(path) {
                debug!(path = %path.display(), %err, "history not persisted");
            }
        }
    }
}
