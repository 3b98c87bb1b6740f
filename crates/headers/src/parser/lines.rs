//! Splits a raw header block into candidate `name: value` lines.

/// A line that looks like a header field, with name and value trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeaderLine<'a> {
    /// 1-based line number within the block
    pub(crate) number: usize,
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
}

/// Yields every candidate header line of `raw`.
///
/// Lines are separated by CRLF, a bare LF is accepted as well. Blank lines, lines
/// without a `:` and lines with an empty name are not candidates. Everything after the
/// first `:` is the value, so values may themselves contain colons.
///
/// Only SP and HTAB are trimmed. Any other whitespace, Unicode or control, stays in
/// the name or value and is left for the grammar to reject.
pub(crate) fn header_lines(raw: &str) -> impl Iterator<Item = HeaderLine<'_>> {
    raw.lines().enumerate().filter_map(|(index, line)| {
        let (name, value) = line.split_once(':')?;
        let name = trim_blanks(name);
        if name.is_empty() {
            return None;
        }
        // a lone CR at the very end survives `lines()`
        let value = trim_blanks(value.strip_suffix('\r').unwrap_or(value));
        Some(HeaderLine { number: index + 1, name, value })
    })
}

// OWS = *( SP / HTAB )
fn trim_blanks(text: &str) -> &str {
    text.trim_matches([' ', '\t'])
}
