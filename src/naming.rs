///
/// Placeholder used wherever a book has no usable title
///
pub const UNKNOWN_TITLE: &str = "Unknown Title";

// Applied in order, as literal substring replacements
const REPLACEMENTS: [(&str, &str); 9] = [
    (":", " -"),
    ("/", "-"),
    ("\\", "-"),
    ("*", ""),
    ("?", ""),
    ("\"", "'"),
    ("<", ""),
    (">", ""),
    ("|", "-"),
];

///
/// Converts a book title into a string safe to use as a single path segment.
///
pub fn sanitize_title(title: Option<&str>) -> String {
    let title = match title {
        Some(title) if !title.is_empty() => title,
        _ => return UNKNOWN_TITLE.to_string(),
    };

    let sanitized = REPLACEMENTS.iter()
        .fold(title.to_string(), |acc, (from, to)| acc.replace(from, to));

    let sanitized = sanitized.trim();
    if sanitized.is_empty() {
        UNKNOWN_TITLE.to_string()
    } else {
        sanitized.to_string()
    }
}

///
/// The narrower rule used when a record has no book-level title and its
/// per-record title is used instead: only `:` is rewritten.
///
pub fn fallback_title(title: &str) -> String {
    title.replace(':', " -")
}
