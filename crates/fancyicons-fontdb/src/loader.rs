//! Resource loaders: where font bytes come from
//!
//! [`DirectoryLoader`] reads fonts from a directory on disk.
//! [`MemoryLoader`] serves blobs that are already in memory, typically
//! `include_bytes!` data compiled into the application.

use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use fancyicons_core::{FontHandle, FontLoadError, ResourceLoader};

use crate::config::LoaderConfig;
use crate::face::IconFontFace;

/// Reads `<font_dir>/<file_name>` and parses it with `read-fonts`
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    config: LoaderConfig,
}

impl DirectoryLoader {
    pub fn new(font_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(LoaderConfig::default().with_font_dir(font_dir))
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loader configured from `FANCYICONS_FONT_DIR` / `FANCYICONS_MAX_FONT_SIZE`
    pub fn from_env() -> Self {
        Self::with_config(LoaderConfig::from_env())
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Where `file_name` would be read from.
    ///
    /// Names that try to leave the font directory resolve to `None`.
    pub fn resolve_path(&self, file_name: &str) -> Option<PathBuf> {
        let relative = Path::new(file_name);
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        (stays_inside && !file_name.is_empty()).then(|| self.config.font_dir.join(relative))
    }
}

impl ResourceLoader for DirectoryLoader {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn load_font_bytes(&self, file_name: &str) -> Result<Vec<u8>, FontLoadError> {
        let path = self
            .resolve_path(file_name)
            .ok_or_else(|| FontLoadError::ResourceNotFound(file_name.to_string()))?;

        let io_error = |source| FontLoadError::Io {
            name: file_name.to_string(),
            source,
        };

        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FontLoadError::ResourceNotFound(path.display().to_string()),
            _ => io_error(e),
        })?;

        // Validate file size against limit
        let size = file.metadata().map_err(io_error)?.len();
        let max = self.config.max_font_size;
        if size > max {
            return Err(FontLoadError::TooLarge {
                name: file_name.to_string(),
                size,
                max,
            });
        }

        let bytes = read_limited(file, file_name, size, max)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn build_font(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Arc<dyn FontHandle>, FontLoadError> {
        Ok(Arc::new(IconFontFace::from_data(file_name, bytes)?))
    }
}

/// Reads at most `max` bytes of `reader`, failing with `TooLarge` if more
/// are available. `expected` only sizes the buffer; the file may have grown
/// since it was measured.
fn read_limited(
    reader: impl Read,
    file_name: &str,
    expected: u64,
    max: u64,
) -> Result<Vec<u8>, FontLoadError> {
    let mut bytes = Vec::with_capacity(expected.min(max) as usize);
    reader
        .take(max.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|source| FontLoadError::Io {
            name: file_name.to_string(),
            source,
        })?;

    let size = bytes.len() as u64;
    if size > max {
        return Err(FontLoadError::TooLarge {
            name: file_name.to_string(),
            size,
            max,
        });
    }
    Ok(bytes)
}

/// Serves font blobs registered under their file names
#[derive(Default)]
pub struct MemoryLoader {
    blobs: RwLock<HashMap<String, Arc<[u8]>>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `bytes` available as `file_name`, replacing any earlier blob
    pub fn insert(&self, file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.blobs.write().insert(file_name.into(), bytes.into());
    }

    /// Chainable [`insert`](Self::insert) for `'static` data
    pub fn with_static(self, file_name: &str, bytes: &'static [u8]) -> Self {
        self.insert(file_name, bytes);
        self
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.blobs.read().contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceLoader for MemoryLoader {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load_font_bytes(&self, file_name: &str) -> Result<Vec<u8>, FontLoadError> {
        self.blobs
            .read()
            .get(file_name)
            .map(|blob| blob.to_vec())
            .ok_or_else(|| FontLoadError::ResourceNotFound(file_name.to_string()))
    }

    fn build_font(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Arc<dyn FontHandle>, FontLoadError> {
        Ok(Arc::new(IconFontFace::from_data(file_name, bytes)?))
    }
}

impl std::fmt::Debug for MemoryLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<String> = self.blobs.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("MemoryLoader").field("blobs", &names).finish()
    }
}
