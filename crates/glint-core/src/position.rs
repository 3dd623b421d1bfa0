//! Offset and position helpers shared by the validators.
//!
//! Lines are the `\n`-separated segments of the text, so a trailing newline
//! opens an (empty) final line. A lone `\r` is ordinary line content.
//! Columns count `char`s, not bytes, and the widest valid column on a line is
//! its length plus one (the end-of-line position).

/// Convert a byte offset into a 1-based `(line, column)`.
///
/// Offsets past the end of the text clamp to the end; offsets that fall
/// inside a multi-byte character round down to its start.
pub fn offset_to_position(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let prefix = &text[..offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |idx| idx + 1);
    let column = prefix[line_start..].chars().count() + 1;
    (line, column)
}

/// Number of `\n`-separated segments (at least one, even for empty text).
pub fn segment_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Character length of the 1-based `line`, or `None` if out of range.
pub fn line_char_len(text: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    text.split('\n').nth(line - 1).map(|l| l.chars().count())
}

/// Clamp a 1-based position onto the text.
///
/// Guarantees `1 <= line <= segment_count` and
/// `1 <= column <= line length + 1`.
pub fn clamp_position(text: &str, line: usize, column: usize) -> (usize, usize) {
    let line = line.clamp(1, segment_count(text));
    let max_column = line_char_len(text, line).unwrap_or(0) + 1;
    (line, column.clamp(1, max_column))
}

/// Byte offset where the 1-based `line` starts, or `None` if out of range.
pub(crate) fn line_start_offset(text: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    if line == 1 {
        return Some(0);
    }
    text.match_indices('\n')
        .nth(line - 2)
        .map(|(idx, _)| idx + 1)
}

/// Char column of a byte index inside a single line, 1-based.
pub(crate) fn column_of(line: &str, byte_idx: usize) -> usize {
    let (_, column) = offset_to_position(line, byte_idx);
    column
}

/// End-of-line column for a line: its char length plus one.
pub(crate) fn end_of_line(line: &str) -> usize {
    line.chars().count() + 1
}
