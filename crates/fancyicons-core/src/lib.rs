//! Fancyicons Core: icon fonts as data
//!
//! Icon fonts map names to code points and ship a font file that draws them.
//! This crate holds the three pieces that turn a name into something you can
//! render:
//!
//! 1. **Catalog** - [`IconCatalog`], one family's frozen name → code point table
//! 2. **Typeface** - [`Typeface`], a catalog plus metadata and a lazily loaded [`FontAsset`]
//! 3. **Registry** - [`FontRegistry`], every typeface, searchable by icon name
//!
//! ## Find an icon and its font
//!
//! ```rust
//! use std::sync::Arc;
//! use fancyicons_core::{FontLoadError, FontHandle, FontRegistry, ResourceLoader, Typeface, TypefaceMetadata};
//!
//! # struct Blank(Vec<u8>);
//! # impl FontHandle for Blank {
//! #     fn data(&self) -> &[u8] { &self.0 }
//! #     fn units_per_em(&self) -> u16 { 1000 }
//! #     fn glyph_id(&self, _: char) -> Option<u32> { Some(1) }
//! # }
//! # struct Bundled;
//! # impl ResourceLoader for Bundled {
//! #     fn name(&self) -> &'static str { "bundled" }
//! #     fn load_font_bytes(&self, _: &str) -> Result<Vec<u8>, FontLoadError> { Ok(vec![0; 4]) }
//! #     fn build_font(&self, _: &str, bytes: Vec<u8>) -> Result<Arc<dyn FontHandle>, FontLoadError> {
//! #         Ok(Arc::new(Blank(bytes)))
//! #     }
//! # }
//! let glyphicons = Typeface::new(
//!     TypefaceMetadata {
//!         family_name: "Glyphicons Halflings",
//!         mapping_prefix: "GLYI",
//!         version: "1.9",
//!         author: "Jan Kovařík",
//!         homepage_url: "http://glyphicons.com/",
//!         description: "Bootstrap's glyph set",
//!         license: "MIT",
//!         license_url: "http://opensource.org/licenses/mit-license.html",
//!     },
//!     "glyphicons-halflings-regular.ttf",
//!     &[("GLYI_HOME", '\u{e021}')],
//! )?;
//!
//! let registry = FontRegistry::new();
//! registry.register(glyphicons);
//!
//! let home = registry.icon("GLYI_HOME")?;
//! let font = registry.resolve_font_for(&home, &Bundled)?;
//! assert_eq!(font.file_name(), "glyphicons-halflings-regular.ttf");
//! # Ok::<(), fancyicons_core::IconError>(())
//! ```
//!
//! Loading the font file itself is delegated to a [`ResourceLoader`];
//! `fancyicons-fontdb` ships loaders for directories and in-memory blobs.

pub mod catalog;
pub mod error;
pub mod font;
pub mod registry;
pub mod traits;
pub mod typeface;

pub use catalog::{IconCatalog, IconEntry};
pub use error::{FontLoadError, IconError, Result};
pub use font::{FallbackPolicy, FontAsset};
pub use registry::FontRegistry;
pub use traits::{FontHandle, ResourceLoader};
pub use typeface::{Typeface, TypefaceMetadata};
