//! Families command implementation

use std::io::Write;

use anyhow::Result;
use fancyicons_core::FontRegistry;
use serde::Serialize;

use crate::cli::FamiliesArgs;

#[derive(Debug, Serialize)]
struct FamilyRow {
    prefix: &'static str,
    name: &'static str,
    version: &'static str,
    author: &'static str,
    license: &'static str,
    homepage: &'static str,
    font_file: &'static str,
    icons: usize,
}

pub fn run(registry: &FontRegistry, args: &FamiliesArgs, out: &mut dyn Write) -> Result<bool> {
    let rows: Vec<FamilyRow> = registry
        .typefaces()
        .iter()
        .map(|typeface| {
            let meta = typeface.metadata();
            FamilyRow {
                prefix: meta.mapping_prefix,
                name: meta.family_name,
                version: meta.version,
                author: meta.author,
                license: meta.license,
                homepage: meta.homepage_url,
                font_file: typeface.font_file(),
                icons: typeface.catalog().count(),
            }
        })
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(true);
    }

    writeln!(out, "{:<6} {:<22} {:<8} {:>5}  LICENSE", "PREFIX", "FAMILY", "VERSION", "ICONS")?;
    for row in &rows {
        writeln!(
            out,
            "{:<6} {:<22} {:<8} {:>5}  {}",
            row.prefix, row.name, row.version, row.icons, row.license
        )?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(json: bool) -> String {
        let registry = fancyicons_families::default_registry().unwrap();
        let mut out = Vec::new();
        assert!(run(&registry, &FamiliesArgs { json }, &mut out).unwrap());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_lists_every_family() {
        let table = run_to_string(false);
        assert!(table.starts_with("PREFIX"));
        assert_eq!(table.lines().count(), 12);
        assert!(table.contains("GLYI   Glyphicons Halflings"));
    }

    #[test]
    fn test_json_output() {
        let json: serde_json::Value = serde_json::from_str(&run_to_string(true)).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0]["prefix"], "DEVI");
        assert_eq!(rows[7]["name"], "Octicons");
        assert!(rows.iter().all(|row| row["icons"].as_u64().unwrap() > 0));
    }
}
