//! Prompt text normalisation.
//!
//! Enumerated prompts such as `"Match these: 1) a 2) b"` are split into an
//! introductory line followed by one line per item.

/// Token marking the start of an enumerated list.
const LIST_MARKER: &str = "1)";

/// Split prompt text into display lines.
///
/// If the list marker is absent or at the very start, the text is a single
/// line. Otherwise the text before the marker becomes the (trimmed) intro
/// line and the rest is cut immediately before every `<digit>)` token, each
/// fragment trimmed and empty fragments dropped.
///
/// # Example
///
/// ```rust
/// use trizzle::question::prompt_lines;
///
/// let lines = prompt_lines("Rank them: 1) Rome 2) Paris 3) Oslo");
/// assert_eq!(lines, vec!["Rank them:", "1) Rome", "2) Paris", "3) Oslo"]);
///
/// assert_eq!(prompt_lines("1) starts with a list"), vec!["1) starts with a list"]);
/// ```
pub fn prompt_lines(text: &str) -> Vec<String> {
    let split_at = match text.find(LIST_MARKER) {
        Some(position) if position > 0 => position,
        _ => return vec![text.to_string()],
    };

    let (intro, items) = text.split_at(split_at);
    let mut lines = vec![intro.trim().to_string()];
    lines.extend(
        split_items(items)
            .into_iter()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string),
    );
    lines
}

/// Cut `items` before each ASCII digit that is directly followed by `)`.
fn split_items(items: &str) -> Vec<&str> {
    let bytes = items.as_bytes();
    let mut fragments = Vec::new();
    let mut start = 0;

    for index in 1..bytes.len().saturating_sub(1) {
        if bytes[index].is_ascii_digit() && bytes[index + 1] == b')' {
            fragments.push(&items[start..index]);
            start = index;
        }
    }
    fragments.push(&items[start..]);
    fragments
}
