/// Count the visible columns of a string's leading whitespace
///
/// Spaces count one column, a tab advances to the next multiple of
/// `tab_size` and carriage returns are skipped. The scan stops at the first
/// other character, so anything after the indentation is irrelevant.
pub fn num_columns(text: &str, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut col = 0;

    for ch in text.chars() {
        match ch {
            ' ' => col += 1,
            '\t' => col += tab_size - (col % tab_size),
            '\r' => continue,
            _ => break,
        }
    }

    col
}
