//! 行内容の取り出し

use crate::buffer::{Buffer, Span};
use crate::error::region::Result;

/// 範囲の先頭行から終端行までの内容（改行文字を含まない）
///
/// `LineSpan` も `Span` に変換して渡せる。
pub fn lines(buffer: &Buffer, span: impl Into<Span>) -> Result<Vec<String>> {
    let span = span.into();
    let (start_char, end_char) = buffer.check_span(span)?;
    let start = buffer.line_of_offset(start_char)?;
    let end = buffer.line_of_offset(end_char)?;

    (start..=end).map(|line| buffer.line_text(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use crate::region::snap::to_lines;

    #[test]
    fn test_lines_of_line_span() {
        let buffer = Buffer::new("one\n\ttwo\nthree\n");
        let line_span = to_lines(&buffer, Span::new(5, 4)).unwrap();
        assert_eq!(lines(&buffer, line_span).unwrap(), vec!["\ttwo"]);
    }

    #[test]
    fn test_lines_of_raw_span_include_end_line() {
        let buffer = Buffer::new("one\ntwo\nthree");
        // 終端が行頭でも、そのまま渡せば行に含まれる
        assert_eq!(
            lines(&buffer, Span::new(0, 4)).unwrap(),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_full_buffer_with_trailing_newline() {
        let buffer = Buffer::new("a\nb\n");
        assert_eq!(
            lines(&buffer, Span::new(0, buffer.len())).unwrap(),
            vec!["a", "b", ""]
        );
    }

    #[test]
    fn test_out_of_range() {
        let buffer = Buffer::new("a\nb");
        assert_eq!(
            lines(&buffer, Span::new(1, 3)),
            Err(RegionError::OutOfRange { offset: 1, length: 3 })
        );
    }
}
