//! Loader configuration
//!
//! Defaults suit a development checkout: fonts are read from `./fonts`.
//! Two environment variables override them:
//!
//! ```bash
//! FANCYICONS_FONT_DIR=~/.local/share/fancyicons/fonts   # `~` and `$VAR` are expanded
//! FANCYICONS_MAX_FONT_SIZE=1048576                      # bytes
//! ```

use std::path::PathBuf;

/// Environment variable naming the font directory
pub const FONT_DIR_ENV: &str = "FANCYICONS_FONT_DIR";

/// Environment variable capping the size of a font file, in bytes
pub const MAX_FONT_SIZE_ENV: &str = "FANCYICONS_MAX_FONT_SIZE";

/// Maximum font file size (50MB) to prevent resource exhaustion.
pub const DEFAULT_MAX_FONT_SIZE: u64 = 50 * 1024 * 1024;

/// Where fonts live and how large they may be
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub font_dir: PathBuf,
    pub max_font_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("fonts"),
            max_font_size: DEFAULT_MAX_FONT_SIZE,
        }
    }
}

impl LoaderConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Values that can't be used are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(FONT_DIR_ENV) {
            match shellexpand::full(&raw) {
                Ok(expanded) => config.font_dir = PathBuf::from(expanded.as_ref()),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", FONT_DIR_ENV, raw, e),
            }
        }

        if let Some(raw) = lookup(MAX_FONT_SIZE_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(size) if size > 0 => config.max_font_size = size,
                _ => log::warn!("Ignoring {}={:?}: not a positive byte count", MAX_FONT_SIZE_ENV, raw),
            }
        }

        log::debug!("Loader config: {:?}", config);
        config
    }

    pub fn with_font_dir(mut self, font_dir: impl Into<PathBuf>) -> Self {
        self.font_dir = font_dir.into();
        self
    }

    pub fn with_max_font_size(mut self, max_font_size: u64) -> Self {
        self.max_font_size = max_font_size.max(1);
        self
    }
}
