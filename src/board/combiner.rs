use super::fragments::GroupTexts;

/// Separator between fragments in the combined document.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Whitespace stripped from fragment edges: Unicode `White_Space` except
/// U+0085 (NEL), plus U+FEFF (BOM). Same set as JavaScript's `String.prototype.trim`,
/// so the board combines exactly what browser clients show.
fn is_fragment_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Strip fragment whitespace from both ends.
pub fn trim_fragment(text: &str) -> &str {
    text.trim_matches(is_fragment_whitespace)
}

/// Join the trimmed, non-empty fragments in registry order.
pub fn combine(snapshot: &GroupTexts) -> String {
    snapshot
        .iter()
        .map(|(_, text)| trim_fragment(text))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}
