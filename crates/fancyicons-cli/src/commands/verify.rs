//! Verify command implementation
//!
//! Loads every registered family's font from disk and counts how many of the
//! catalog's code points the font can actually draw.

use std::io::Write;

use anyhow::Result;
use fancyicons_core::{FontRegistry, ResourceLoader};
use fancyicons_fontdb::{DirectoryLoader, LoaderConfig};

use crate::cli::VerifyArgs;

pub fn loader_for(args: &VerifyArgs) -> DirectoryLoader {
    let config = LoaderConfig::from_env();
    let config = match &args.font_dir {
        Some(dir) => config.with_font_dir(dir),
        None => config,
    };
    DirectoryLoader::with_config(config)
}

pub fn run(registry: &FontRegistry, loader: &dyn ResourceLoader, out: &mut dyn Write) -> Result<bool> {
    let typefaces = registry.typefaces();
    let mut failures = 0;

    for typeface in &typefaces {
        let prefix = typeface.mapping_prefix();
        match typeface.resolve_font(loader) {
            Ok(font) => {
                let catalog = typeface.catalog();
                let present = catalog.iter().filter(|icon| font.has_glyph(icon)).count();
                writeln!(
                    out,
                    "{:<6} ok      {}/{} glyphs  {} ({} bytes)",
                    prefix,
                    present,
                    catalog.count(),
                    font.file_name(),
                    font.byte_len()
                )?;
            },
            Err(err) => {
                failures += 1;
                let cause = std::error::Error::source(&err)
                    .map(|source| source.to_string())
                    .unwrap_or_else(|| err.to_string());
                writeln!(out, "{:<6} FAILED  {}", prefix, cause)?;
            },
        }
    }

    writeln!(
        out,
        "{} of {} fonts loaded",
        typefaces.len() - failures,
        typefaces.len()
    )?;
    Ok(failures == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fancyicons_fontdb::MemoryLoader;

    #[test]
    fn test_missing_fonts_are_reported() {
        let registry = fancyicons_families::default_registry().unwrap();
        let loader = DirectoryLoader::new(std::env::temp_dir().join("fancyicons-no-such-dir"));
        let mut out = Vec::new();

        assert!(!run(&registry, &loader, &mut out).unwrap());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("OCTI   FAILED  Font resource not found"));
        assert!(output.ends_with("0 of 11 fonts loaded\n"));
    }

    const MINI_ICONS: &[u8] =
        include_bytes!("../../../fancyicons-fontdb/tests/fixtures/mini-icons.ttf");

    #[test]
    fn test_glyph_coverage_is_reported() {
        let registry = fancyicons_families::default_registry().unwrap();
        let loader = MemoryLoader::new();
        for typeface in registry.typefaces() {
            loader.insert(typeface.font_file(), MINI_ICONS);
        }
        let mut out = Vec::new();

        assert!(run(&registry, &loader, &mut out).unwrap());

        let output = String::from_utf8(out).unwrap();
        let iconic = registry.family("OPNI").unwrap();
        let count = iconic.catalog().count();
        // every Open Iconic code point sits in U+E000..U+E0FF
        assert!(output.contains(&format!(
            "OPNI   ok      {count}/{count} glyphs  open-iconic.ttf ({} bytes)",
            MINI_ICONS.len()
        )));
        // Foundation lives at U+F1xx, outside the font's cmap
        let foundation = registry.family("FOUI").unwrap().catalog().count();
        assert!(output.contains(&format!("FOUI   ok      0/{foundation} glyphs")));
        assert!(output.ends_with("11 of 11 fonts loaded\n"));
    }

    #[test]
    fn test_font_dir_flag_overrides_env() {
        let args = VerifyArgs {
            font_dir: Some("/opt/fonts".into()),
        };
        assert_eq!(
            loader_for(&args).config().font_dir,
            std::path::PathBuf::from("/opt/fonts")
        );
    }
}
