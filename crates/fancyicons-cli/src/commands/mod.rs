//! Subcommand implementations
//!
//! Every command writes to the supplied writer and reports whether it
//! succeeded, so `main` owns the process exit code.

pub mod families;
pub mod find;
pub mod list;
pub mod verify;

/// Formats a code point the way Unicode charts do
pub fn code_point_label(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_label() {
        assert_eq!(code_point_label('\u{e021}'), "U+E021");
        assert_eq!(code_point_label('A'), "U+0041");
        assert_eq!(code_point_label('\u{1f600}'), "U+1F600");
    }
}
