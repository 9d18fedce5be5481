//! Splitting an assembled byte buffer into trimmed text lines.

use memchr::memchr_iter;

/// Split `data` on line-feed bytes into trimmed strings.
///
/// The output is pre-sized from the line-feed count to avoid reallocation.
/// Every line is lossily decoded as UTF-8 and trimmed of surrounding
/// whitespace, which also strips a trailing carriage return. A final line
/// not terminated by a line feed is still emitted, while a terminating line
/// feed on the last line does not produce a phantom empty line.
///
/// With `allow_empty_lines` set to `false`, lines that are empty after
/// trimming are dropped entirely and do not count toward the output length.
#[must_use]
pub fn split_lines(data: &[u8], allow_empty_lines: bool) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }

    let estimated = memchr_iter(b'\n', data).count() + 1;
    let mut lines = Vec::with_capacity(estimated);

    // A trailing line feed terminates the last line rather than opening a
    // new empty one.
    let data = match data.last() {
        Some(b'\n') => &data[..data.len() - 1],
        _ => data,
    };

    let mut start = 0usize;
    for end in memchr_iter(b'\n', data).chain(std::iter::once(data.len())) {
        let raw = &data[start..end];
        start = end + 1;

        let decoded = String::from_utf8_lossy(raw);
        let trimmed = decoded.trim();

        if allow_empty_lines || !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_empty_lines_when_disallowed() {
        assert_eq!(split_lines(b"a\n\nb\n", false), vec!["a", "b"]);
    }

    #[test]
    fn keeps_empty_lines_when_allowed() {
        assert_eq!(split_lines(b"a\n\nb\n", true), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_buffer_yields_no_lines() {
        assert!(split_lines(b"", true).is_empty());
        assert!(split_lines(b"", false).is_empty());
    }

    #[test]
    fn unterminated_final_line_is_emitted() {
        assert_eq!(split_lines(b"a\nb", true), vec!["a", "b"]);
    }

    #[test]
    fn lone_newline_is_one_empty_line() {
        assert_eq!(split_lines(b"\n", true), vec![""]);
        assert!(split_lines(b"\n", false).is_empty());
    }

    #[test]
    fn trims_carriage_returns_and_whitespace() {
        assert_eq!(
            split_lines(b"  first\r\n\tsecond \nthird\r", true),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn whitespace_only_line_counts_as_empty() {
        assert_eq!(split_lines(b"a\n   \nb", false), vec!["a", "b"]);
        assert_eq!(split_lines(b"a\n   \nb", true), vec!["a", "", "b"]);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let lines = split_lines(b"ok\n\xff\xfe\n", true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ok");
        assert!(!lines[1].is_empty());
    }
}
