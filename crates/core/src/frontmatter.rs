/// Extracts the page title from a heading line.
///
/// Strips the leading run of `#` markers and surrounding whitespace.
pub fn title_from_heading(line: &str) -> &str {
    line.trim_start().trim_start_matches('#').trim()
}

/// Replaces the first line of `text` with a YAML frontmatter block carrying
/// its heading text as `title`.
///
/// Must run after every other pass: line 1 is taken as the authoritative
/// heading and is dropped from the body. The block follows the heading's
/// line ending.
pub fn apply_frontmatter(text: &str) -> String {
    let (first_line, body) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };
    let eol = if first_line.ends_with('\r') { "\r\n" } else { "\n" };
    let title = title_from_heading(first_line.trim_end_matches('\r'));

    let mut out = String::with_capacity(text.len() + 16);
    for part in ["---", eol, "title: ", title, eol, "---", eol, body] {
        out.push_str(part);
    }
    out
}
