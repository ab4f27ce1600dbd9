use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Generate a linkable table of contents from a Markdown file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown file to scan (defaults to ./README.md)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Emit a top-level "Table Of Content" entry above the list
    #[arg(short = 'd', long = "toc-heading", default_value_t = false)]
    pub toc_heading: bool,

    /// A string used as indent
    #[arg(short = 's', long = "indent", value_name = "STRING", default_value = "  ")]
    pub indent: String,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}
