//! 選択範囲を行単位に広げる

use crate::buffer::{Buffer, LineSpan, Span};
use crate::error::region::Result;

/// 範囲の先頭が属する行番号（0始まり）
pub fn line_number(buffer: &Buffer, span: Span) -> Result<usize> {
    buffer.line_of_offset(span.offset)
}

/// 範囲が触れているすべての行を覆う `LineSpan` に変換
pub fn to_lines(buffer: &Buffer, span: Span) -> Result<LineSpan> {
    let (start_char, end_char) = buffer.check_span(span)?;
    let start_line = buffer.line_info_of_offset(start_char)?;
    let mut end_line = buffer.line_info_of_offset(end_char)?;
    if start_line.offset == end_line.offset {
        return Ok(LineSpan::new(start_line.offset, start_line.offset + start_line.length));
    }

    // 範囲の終端が行頭ちょうど -> 一行戻す
    if end_line.offset == end_char {
        end_line = buffer.line_info_of_offset(end_char - 1)?;
    }

    Ok(LineSpan::new(start_line.offset, end_line.offset + end_line.length))
}
