//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fancyicons - browse and verify bundled icon fonts
#[derive(Parser, Debug)]
#[command(name = "fancyicons")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging (overrides RUST_LOG's default level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered icon font families
    #[command(alias = "f")]
    Families(FamiliesArgs),

    /// Look up an icon by its exact name
    Find(FindArgs),

    /// List the icons of one family
    #[command(alias = "ls")]
    List(ListArgs),

    /// Load every family's font and check its glyphs
    Verify(VerifyArgs),
}

/// Arguments for the families command
#[derive(Parser, Debug)]
pub struct FamiliesArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the find command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Icon name, e.g. GLYI_HOME
    pub name: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Mapping prefix of the family, e.g. OCTI
    pub prefix: String,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Directory holding the font files (defaults to $FANCYICONS_FONT_DIR, then ./fonts)
    #[arg(long = "font-dir")]
    pub font_dir: Option<PathBuf>,
}
