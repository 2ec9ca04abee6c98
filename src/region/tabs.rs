//! 水平タブの展開

use crate::error::{region::Result, RegionError};

/// 各行のタブを次のタブ位置までの空白に置き換える
///
/// 列は行ごとに 0 から数え直す。タブ以外の文字は常に1列進む。
pub fn expand_tabs(lines: &[String], tab_width: usize) -> Result<Vec<String>> {
    if tab_width == 0 {
        return Err(RegionError::InvalidArgument {
            name: "tab_width",
            value: tab_width.to_string(),
        });
    }
    Ok(lines
        .iter()
        .map(|line| expand_line(line, tab_width))
        .collect())
}

fn expand_line(line: &str, tab_width: usize) -> String {
    let mut buf = String::with_capacity(line.len());
    let mut column = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let count = tab_width - column % tab_width;
            buf.extend(std::iter::repeat(' ').take(count));
            column += count;
        } else {
            buf.push(ch);
            column += 1;
        }
    }
    buf
}
