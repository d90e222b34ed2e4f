//! List command implementation

use std::io::Write;

use anyhow::Result;
use fancyicons_core::FontRegistry;

use super::code_point_label;
use crate::cli::ListArgs;

pub fn run(registry: &FontRegistry, args: &ListArgs, out: &mut dyn Write) -> Result<bool> {
    let prefix = args.prefix.to_ascii_uppercase();
    let Some(typeface) = registry.family(&prefix) else {
        writeln!(out, "{}: no such family", args.prefix)?;
        return Ok(false);
    };

    for icon in typeface.catalog().iter() {
        writeln!(
            out,
            "{:<28} {:<8} {}",
            icon.name(),
            code_point_label(icon.code_point()),
            icon
        )?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_definition_order() {
        let registry = fancyicons_families::default_registry().unwrap();
        let mut out = Vec::new();
        let args = ListArgs {
            prefix: "meti".to_string(),
        };
        assert!(run(&registry, &args, &mut out).unwrap());

        let output = String::from_utf8(out).unwrap();
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("METI_SUNRISE"));
        assert!(first.contains("U+0041"));
        assert_eq!(
            output.lines().count(),
            registry.family("METI").unwrap().catalog().count()
        );
    }

    #[test]
    fn test_list_unknown_family() {
        let registry = fancyicons_families::default_registry().unwrap();
        let mut out = Vec::new();
        let args = ListArgs {
            prefix: "NOPE".to_string(),
        };
        assert!(!run(&registry, &args, &mut out).unwrap());
    }
}
