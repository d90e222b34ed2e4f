//! Typeface providers: a catalog, its metadata, and a lazily loaded font
//!
//! The font cache is a once-cell per typeface. Concurrent first calls run the
//! loader at most once; the others wait for its result. Only successes are
//! kept, so a failed load is retried on the next call:
//!
//! ```text
//! Unloaded -> Loading -> Loaded   (terminal)
//!                     \-> Failed  (back to Unloaded)
//! ```

use once_cell::sync::OnceCell;

use crate::catalog::{IconCatalog, IconEntry};
use crate::error::{IconError, Result};
use crate::font::{FallbackPolicy, FontAsset};
use crate::traits::ResourceLoader;

/// Descriptive data for one icon font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypefaceMetadata {
    pub family_name: &'static str,
    /// Short tag that identifies the family among all registered families
    pub mapping_prefix: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub homepage_url: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub license_url: &'static str,
}

/// One icon font: catalog, metadata and the cached font asset
pub struct Typeface {
    metadata: TypefaceMetadata,
    font_file: &'static str,
    catalog: IconCatalog,
    font: OnceCell<FontAsset>,
}

impl Typeface {
    /// Builds a typeface whose glyphs live in the bundled resource `font_file`.
    ///
    /// Fails if the mapping prefix is empty or not ASCII alphanumeric, or if
    /// `icons` defines a name twice.
    pub fn new(
        metadata: TypefaceMetadata,
        font_file: &'static str,
        icons: &[(&'static str, char)],
    ) -> Result<Self> {
        let prefix = metadata.mapping_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IconError::InvalidPrefix(prefix.to_string()));
        }

        let catalog = IconCatalog::new(prefix, icons)?;
        log::debug!(
            "Defined typeface {} ({}) with {} icons",
            metadata.family_name,
            prefix,
            catalog.count()
        );

        Ok(Self {
            metadata,
            font_file,
            catalog,
            font: OnceCell::new(),
        })
    }

    /// Looks `name` up in this family's catalog
    pub fn icon(&self, name: &str) -> Result<IconEntry> {
        self.catalog.lookup(name)
    }

    pub fn metadata(&self) -> &TypefaceMetadata {
        &self.metadata
    }

    pub fn mapping_prefix(&self) -> &'static str {
        self.metadata.mapping_prefix
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Name of the bundled font resource
    pub fn font_file(&self) -> &'static str {
        self.font_file
    }

    /// True once a load has succeeded
    pub fn is_font_loaded(&self) -> bool {
        self.font.get().is_some()
    }

    /// Returns the family's font, loading it through `loader` on first use.
    ///
    /// A successful load is cached for the lifetime of the typeface and the
    /// loader is not consulted again. A failure is returned as
    /// [`IconError::FontLoadFailure`] and not cached.
    pub fn resolve_font(&self, loader: &dyn ResourceLoader) -> Result<FontAsset> {
        if let Some(font) = self.font.get() {
            log::trace!("Font cache hit for {}", self.mapping_prefix());
            return Ok(font.clone());
        }

        self.font
            .get_or_try_init(|| self.load_font(loader))
            .cloned()
    }

    /// [`resolve_font`](Self::resolve_font) with an explicit failure policy
    pub fn resolve_font_with(
        &self,
        loader: &dyn ResourceLoader,
        policy: &FallbackPolicy,
    ) -> Result<FontAsset> {
        match (self.resolve_font(loader), policy) {
            (Ok(font), _) => Ok(font),
            (Err(err), FallbackPolicy::UseFont(fallback)) => {
                log::warn!(
                    "Using fallback font {} for {}: {}",
                    fallback.file_name(),
                    self.metadata.family_name,
                    err
                );
                Ok(fallback.clone())
            },
            (Err(err), FallbackPolicy::Propagate) => Err(err),
        }
    }

    fn load_font(&self, loader: &dyn ResourceLoader) -> Result<FontAsset> {
        log::debug!(
            "Loading {} for {} via {} loader",
            self.font_file,
            self.metadata.family_name,
            loader.name()
        );

        let to_failure = |source| IconError::FontLoadFailure {
            family: self.metadata.family_name.to_string(),
            source,
        };

        let bytes = loader.load_font_bytes(self.font_file).map_err(to_failure)?;
        let handle = loader
            .build_font(self.font_file, bytes)
            .map_err(to_failure)?;
        let font = FontAsset::new(self.font_file, handle);

        log::info!(
            "Loaded {} ({} bytes) for {}",
            font.file_name(),
            font.byte_len(),
            self.metadata.family_name
        );
        Ok(font)
    }
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("family_name", &self.metadata.family_name)
            .field("mapping_prefix", &self.metadata.mapping_prefix)
            .field("font_file", &self.font_file)
            .field("icons", &self.catalog.count())
            .field("font_loaded", &self.is_font_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FontLoadError;
    use crate::traits::FontHandle;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const OCTICONS: TypefaceMetadata = TypefaceMetadata {
        family_name: "Octicons",
        mapping_prefix: "OCTI",
        version: "3.1.0",
        author: "GitHub",
        homepage_url: "https://octicons.github.com",
        description: "GitHub's icon font",
        license: "SIL OFL 1.1",
        license_url: "http://scripts.sil.org/OFL",
    };

    const ICONS: &[(&str, char)] = &[("OCTI_HOME", '\u{f08d}'), ("OCTI_BUG", '\u{f091}')];

    struct TestFont(Vec<u8>);

    impl FontHandle for TestFont {
        fn data(&self) -> &[u8] {
            &self.0
        }

        fn units_per_em(&self) -> u16 {
            1000
        }

        fn glyph_id(&self, ch: char) -> Option<u32> {
            (ch == '\u{f08d}').then_some(1)
        }
    }

    /// Fails the first `failures` calls, then succeeds; counts every call
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        failures: usize,
        delay: Duration,
    }

    impl CountingLoader {
        fn new(failures: usize) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                failures,
                delay: Duration::ZERO,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ResourceLoader for CountingLoader {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn load_font_bytes(&self, file_name: &str) -> std::result::Result<Vec<u8>, FontLoadError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
            if call < self.failures {
                return Err(FontLoadError::Io {
                    name: file_name.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::Interrupted, "flaky"),
                });
            }
            Ok(vec![0u8; 64])
        }

        fn build_font(
            &self,
            _file_name: &str,
            bytes: Vec<u8>,
        ) -> std::result::Result<Arc<dyn FontHandle>, FontLoadError> {
            Ok(Arc::new(TestFont(bytes)))
        }
    }

    fn octicons() -> Typeface {
        Typeface::new(OCTICONS, "octicons.ttf", ICONS).unwrap()
    }

    #[test]
    fn test_icon_delegates_to_catalog() {
        let typeface = octicons();
        assert_eq!(typeface.icon("OCTI_HOME").unwrap().code_point(), '\u{f08d}');
        assert!(typeface.icon("HOME").unwrap_err().is_not_found());
        assert_eq!(typeface.metadata().family_name, "Octicons");
        assert_eq!(typeface.mapping_prefix(), "OCTI");
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        for prefix in ["", "OC TI", "OCTI_", "ÖCTI"] {
            let metadata = TypefaceMetadata {
                mapping_prefix: prefix,
                ..OCTICONS
            };
            let err = Typeface::new(metadata, "octicons.ttf", ICONS).unwrap_err();
            assert!(matches!(err, IconError::InvalidPrefix(_)), "{prefix:?}");
        }
    }

    #[test]
    fn test_successful_load_is_cached() {
        let typeface = octicons();
        let loader = CountingLoader::new(0);
        assert!(!typeface.is_font_loaded());

        let first = typeface.resolve_font(&loader).unwrap();
        let second = typeface.resolve_font(&loader).unwrap();

        assert_eq!(loader.calls(), 1);
        assert!(first.ptr_eq(&second));
        assert!(typeface.is_font_loaded());
        assert_eq!(first.file_name(), "octicons.ttf");
        assert_eq!(first.byte_len(), 64);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let typeface = octicons();
        let loader = CountingLoader::new(1);

        let err = typeface.resolve_font(&loader).unwrap_err();
        assert!(matches!(
            err,
            IconError::FontLoadFailure { ref family, source: FontLoadError::Io { .. } } if family == "Octicons"
        ));
        assert!(!typeface.is_font_loaded());

        let font = typeface.resolve_font(&loader).unwrap();
        assert_eq!(loader.calls(), 2);

        let again = typeface.resolve_font(&loader).unwrap();
        assert_eq!(loader.calls(), 2);
        assert!(font.ptr_eq(&again));
    }

    #[test]
    fn test_concurrent_first_use_loads_once() {
        let typeface = octicons();
        let loader = CountingLoader {
            delay: Duration::from_millis(20),
            ..CountingLoader::new(0)
        };

        let fonts: Vec<FontAsset> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| typeface.resolve_font(&loader).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(loader.calls(), 1);
        assert!(fonts.windows(2).all(|pair| pair[0].ptr_eq(&pair[1])));
    }

    #[test]
    fn test_fallback_policy_substitutes_without_caching() {
        let typeface = octicons();
        let loader = CountingLoader::new(1);
        let fallback = FontAsset::new("system.ttf", Arc::new(TestFont(vec![1, 2, 3])));
        let policy = FallbackPolicy::UseFont(fallback.clone());

        let font = typeface.resolve_font_with(&loader, &policy).unwrap();
        assert!(font.ptr_eq(&fallback));
        assert!(!typeface.is_font_loaded());

        // The family's own font still loads on the next attempt
        let font = typeface.resolve_font_with(&loader, &policy).unwrap();
        assert_eq!(font.file_name(), "octicons.ttf");
        assert!(typeface.is_font_loaded());
    }

    #[test]
    fn test_propagate_policy_returns_error() {
        let typeface = octicons();
        let loader = CountingLoader::new(1);
        let result = typeface.resolve_font_with(&loader, &FallbackPolicy::Propagate);
        assert!(matches!(result, Err(IconError::FontLoadFailure { .. })));
    }

    #[test]
    fn test_loaded_font_reports_glyph_presence() {
        let typeface = octicons();
        let font = typeface.resolve_font(&CountingLoader::new(0)).unwrap();
        assert!(font.has_glyph(&typeface.icon("OCTI_HOME").unwrap()));
        assert!(!font.has_glyph(&typeface.icon("OCTI_BUG").unwrap()));
    }
}
