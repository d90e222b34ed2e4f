//! Where icon fonts come from: loaders and font parsing for fancyicons
//!
//! `fancyicons-core` only knows the [`ResourceLoader`] contract. This crate
//! provides the stock implementations:
//!
//! - [`DirectoryLoader`] - font files in a directory, configured by [`LoaderConfig`]
//! - [`MemoryLoader`] - blobs already in memory (`include_bytes!` and friends)
//!
//! Both validate bytes with `read-fonts` and hand back an [`IconFontFace`].
//!
//! [`ResourceLoader`]: fancyicons_core::ResourceLoader

pub mod config;
pub mod face;
pub mod loader;

pub use config::LoaderConfig;
pub use face::IconFontFace;
pub use loader::{DirectoryLoader, MemoryLoader};
