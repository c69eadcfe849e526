pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// sheetglue - sprite sheet generator for per-frame image trees
#[derive(Parser, Debug)]
#[command(name = "sheetglue")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Glue frame folders into sprite sheets and frame-index maps
    Generate(generate::GenerateArgs),

    /// Show how a directory tree will be scanned, without composing
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
