//! Common utility functions shared across the codebase.

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
///
/// Equivalent to counting the newlines before `offset`, plus one.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Text around `start..end` extended by up to `radius` characters on each
/// side, with line breaks collapsed to spaces.
///
/// Offsets must lie on char boundaries.
///
/// # Examples
///
/// ```
/// use glotsync::utils::context_window;
///
/// let source = "let a = 1;\nconst title = \"Đơn hàng\";\nlet b = 2;";
/// let start = source.find('"').unwrap();
/// let end = source.rfind('"').unwrap() + 1;
/// assert_eq!(context_window(source, start, end, 8), "title = \"Đơn hàng\"; let b");
/// ```
pub fn context_window(content: &str, start: usize, end: usize, radius: usize) -> String {
    let window_start = if radius == 0 {
        start
    } else {
        content[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let window_end = content[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(content.len());

    content[window_start..window_end]
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
