pub mod types;
pub mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{debug, error};

use crate::toc::{TocBuilder, TocOptions};
use crate::utils::error::{BoxResult, MdtocError};

const DEFAULT_FILE: &str = "./README.md";

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));
    let options = TocOptions {
        toc_heading: cli.toc_heading,
        indent: cli.indent.clone(),
    };

    debug!("building table of contents for {}", path.display());
    match generate(&path, &options) {
        Ok(toc) => print!("{}", toc),
        Err(e) => {
            error!(
                "failed to build table of contents from {}: {}",
                path.display(),
                e
            );
            process::exit(1);
        }
    }
}

/// Read the markdown file and build its TOC
fn generate(path: &Path, options: &TocOptions) -> BoxResult<String> {
    let content = fs::read_to_string(path).map_err(MdtocError::Io)?;
    let builder = TocBuilder::new(options);
    Ok(builder.build(content.lines())?)
}
