mod anchor;
mod builder;

pub use anchor::{canonical_anchor, canonical_heading};
pub use builder::{TocBuilder, TOC_HEADING_TEXT};

/// Options for table of contents generation
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Whether to emit a synthetic top-level "Table Of Content" entry
    pub toc_heading: bool,
    /// String repeated to indent nested entries
    pub indent: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            toc_heading: false,
            indent: "  ".to_string(),
        }
    }
}
