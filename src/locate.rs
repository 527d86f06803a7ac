//! Offset to line/column translation for diagnostics.

/// Returns the 1-based line and column of a byte offset. Only `\n` starts a
/// new line; a `\r\n` pair therefore counts once.
pub fn locate(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (index, ch) in source.char_indices() {
        if index >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
