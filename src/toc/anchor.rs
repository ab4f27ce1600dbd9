use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // One level of parenthesized groups; nesting is not handled
    static ref PAREN_GROUP: Regex = Regex::new(r"\(([^\(]+?)\)").unwrap();

    static ref SPECIAL_CHARS: Regex = Regex::new(r#"[\[\]\(\)':\.?><&"]"#).unwrap();
}

/// Derive the anchor slug a Markdown renderer would generate for a heading
pub fn canonical_anchor(text: &str) -> String {
    // (inner) => inner
    let text = PAREN_GROUP.replace_all(text, "$1");

    // Foo Bar Baz => foo bar baz
    let text = text.to_lowercase();

    let text = text.trim();

    // removes []()':.?><&"
    let text = SPECIAL_CHARS.replace_all(text, "");

    let text = text.replace('`', "");

    // replace middle whitespaces with -
    text.replace(' ', "-")
}

/// Make heading text safe to embed as link text.
///
/// Ampersands are escaped first so the other substitutions are not
/// escaped twice; backticks are stripped after escaping.
pub fn canonical_heading(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
        .replace('`', "")
}
