//! Find command implementation

use std::io::Write;

use anyhow::Result;
use fancyicons_core::FontRegistry;

use super::code_point_label;
use crate::cli::FindArgs;

pub fn run(registry: &FontRegistry, args: &FindArgs, out: &mut dyn Write) -> Result<bool> {
    let Some(icon) = registry.find_icon(&args.name) else {
        log::debug!("{} is not in any of {} families", args.name, registry.len());
        writeln!(out, "{}: not found", args.name)?;
        return Ok(false);
    };

    let family = registry
        .family(icon.family())
        .map(|typeface| typeface.metadata().family_name)
        .unwrap_or(icon.family());

    writeln!(
        out,
        "{}  {}  {}  ({})",
        icon.name(),
        code_point_label(icon.code_point()),
        icon,
        family
    )?;

    let aliases: Vec<&str> = registry
        .family(icon.family())
        .map(|typeface| typeface.catalog().find_by_code_point(icon.code_point()))
        .unwrap_or_default()
        .iter()
        .map(|entry| entry.name())
        .filter(|&name| name != icon.name())
        .collect();
    if !aliases.is_empty() {
        writeln!(out, "aliases: {}", aliases.join(", "))?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> (bool, String) {
        let registry = fancyicons_families::default_registry().unwrap();
        let mut out = Vec::new();
        let found = run(&registry, &FindArgs { name: name.to_string() }, &mut out).unwrap();
        (found, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_find_existing_icon() {
        let (found, output) = find("GLYI_HOME");
        assert!(found);
        assert!(output.starts_with("GLYI_HOME  U+E021"));
        assert!(output.contains("(Glyphicons Halflings)"));
    }

    #[test]
    fn test_find_reports_aliases() {
        let (found, output) = find("GLYI_EURO");
        assert!(found);
        assert!(output.contains("aliases: GLYI_EUR"));
    }

    #[test]
    fn test_find_missing_icon() {
        let (found, output) = find("HOME");
        assert!(!found);
        assert_eq!(output, "HOME: not found\n");
    }
}
