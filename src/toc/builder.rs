use log::warn;

use crate::toc::anchor::{canonical_anchor, canonical_heading};
use crate::toc::TocOptions;
use crate::utils::error::MdtocError;

/// Text of the synthetic top-level entry
pub const TOC_HEADING_TEXT: &str = "Table Of Content";

const FENCE_MARKER: &str = "```";

/// Assembles a table of contents from a stream of markdown lines.
///
/// One call to [`build`](TocBuilder::build) performs one forward pass over
/// the lines; the fence state and output buffer live only for that call.
pub struct TocBuilder<'a> {
    options: &'a TocOptions,
}

impl<'a> TocBuilder<'a> {
    pub fn new(options: &'a TocOptions) -> Self {
        Self { options }
    }

    /// Scan `lines` once and render the TOC.
    ///
    /// Headings inside fenced code blocks are ignored. Fails with
    /// [`MdtocError::NoHeadings`] when the pass produces no entries.
    pub fn build<'s, I>(&self, lines: I) -> Result<String, MdtocError>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut buf = String::new();

        if self.options.toc_heading {
            self.push_entry(&mut buf, 0, TOC_HEADING_TEXT);
        }

        let mut in_fence = false;
        for line in lines {
            // Fence markers toggle the state and are never emitted
            if line.starts_with(FENCE_MARKER) {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }
            if let Some(level) = self.heading_level(line) {
                match line.split_once(' ') {
                    Some((_, text)) => self.push_entry(&mut buf, level, text),
                    // `#intro` style lines have no extractable text
                    None => warn!("skipping heading line without text: {:?}", line),
                }
            }
        }

        if buf.is_empty() {
            return Err(MdtocError::NoHeadings);
        }
        Ok(buf)
    }

    /// Nesting level of a `#`-prefixed line, or `None` for other lines.
    ///
    /// `#` is level 0, `##` is level 1, and so on. When the synthetic top
    /// entry is enabled every heading shifts down one level to leave it
    /// room at level 0.
    fn heading_level(&self, line: &str) -> Option<usize> {
        if !line.starts_with('#') {
            return None;
        }
        let mut level = line.bytes().skip(1).take_while(|&b| b == b'#').count();
        if self.options.toc_heading {
            level += 1;
        }
        Some(level)
    }

    /// Render one bullet-list entry, three indent units per level
    fn push_entry(&self, buf: &mut String, level: usize, text: &str) {
        let indent = self.options.indent.repeat(level * 3);
        buf.push_str(&format!(
            "{}* [{}](#{})\n",
            indent,
            canonical_heading(text),
            canonical_anchor(text)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(markdown: &str, options: &TocOptions) -> Result<String, MdtocError> {
        TocBuilder::new(options).build(markdown.lines())
    }

    #[test]
    fn test_nested_headings() {
        let markdown = "# Top\n\nText here.\n\n## Sub One\n\n## Sub Two\n\n### Deep";
        let toc = build(markdown, &TocOptions::default()).unwrap();

        let expected = "\
* [Top](#top)
      * [Sub One](#sub-one)
      * [Sub Two](#sub-two)
            * [Deep](#deep)
";
        assert_eq!(toc, expected);
    }

    #[test]
    fn test_entry_count_matches_heading_count() {
        let markdown = "# A\n\ntext\n\n## B\n\n### C\n\nmore text\n\n## D";
        let toc = build(markdown, &TocOptions::default()).unwrap();
        assert_eq!(toc.lines().count(), 4);
    }

    #[test]
    fn test_fenced_headings_ignored() {
        let markdown = "```\n# Not A Heading\n```\n# Real Heading";
        let toc = build(markdown, &TocOptions::default()).unwrap();
        assert_eq!(toc, "* [Real Heading](#real-heading)\n");
    }

    #[test]
    fn test_unterminated_fence_suppresses_rest() {
        let markdown = "# Before\n```\n# After";
        let toc = build(markdown, &TocOptions::default()).unwrap();
        assert_eq!(toc, "* [Before](#before)\n");
    }

    #[test]
    fn test_no_headings_is_an_error() {
        let err = build("just text\n\nmore text", &TocOptions::default()).unwrap_err();
        assert!(matches!(err, MdtocError::NoHeadings));
    }

    #[test]
    fn test_all_headings_fenced_is_an_error() {
        let err = build("```\n# Hidden\n```", &TocOptions::default()).unwrap_err();
        assert!(matches!(err, MdtocError::NoHeadings));
    }

    #[test]
    fn test_toc_heading_shifts_levels() {
        let options = TocOptions {
            toc_heading: true,
            indent: "  ".to_string(),
        };
        let toc = build("# Title", &options).unwrap();

        let expected = "\
* [Table Of Content](#table-of-content)
      * [Title](#title)
";
        assert_eq!(toc, expected);
    }

    #[test]
    fn test_toc_heading_alone_is_not_an_error() {
        let options = TocOptions {
            toc_heading: true,
            indent: "  ".to_string(),
        };
        let toc = build("no headings here", &options).unwrap();
        assert_eq!(toc, "* [Table Of Content](#table-of-content)\n");
    }

    #[test]
    fn test_custom_indent() {
        let options = TocOptions {
            toc_heading: false,
            indent: "\t".to_string(),
        };
        let toc = build("## Title", &options).unwrap();
        assert_eq!(toc, "\t\t\t* [Title](#title)\n");
    }

    #[test]
    fn test_heading_without_space_is_skipped() {
        let toc = build("#intro\n# Real", &TocOptions::default()).unwrap();
        assert_eq!(toc, "* [Real](#real)\n");
    }

    #[test]
    fn test_split_at_first_space() {
        // the hash run is not space-separated, so the remainder after the
        // first space becomes the heading text
        let toc = build("#foo bar", &TocOptions::default()).unwrap();
        assert_eq!(toc, "* [bar](#bar)\n");
    }

    #[test]
    fn test_escaped_link_text() {
        let toc = build("# Foo & \"Bar\"", &TocOptions::default()).unwrap();
        assert_eq!(toc, "* [Foo &amp; &#34;Bar&#34;](#foo--bar)\n");
    }
}
