//! テキストバッファ
//!
//! ファイル内容の不変スナップショット。文字オフセットと行番号の両方で参照できる。
//! 行区切りは `\n`、`\r\n`、`\r` を認識する。

pub mod span;

pub use span::{LineSpan, Span};

use crate::error::{region::Result, RegionError};

/// 行情報を保持した読み取り専用テキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    chars: Vec<char>,
    line_starts: Vec<usize>,
    line_lengths: Vec<usize>,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut line_starts = vec![0];
        let mut line_lengths = Vec::new();
        let mut current_len = 0usize;

        let mut idx = 0;
        while idx < chars.len() {
            let delimiter = match chars[idx] {
                '\r' if chars.get(idx + 1) == Some(&'\n') => 2,
                '\r' | '\n' => 1,
                _ => 0,
            };
            if delimiter == 0 {
                current_len += 1;
                idx += 1;
                continue;
            }
            line_lengths.push(current_len);
            line_starts.push(idx + delimiter);
            current_len = 0;
            idx += delimiter;
        }

        // 末尾が改行の場合は空の最終行になる
        line_lengths.push(current_len);

        Self {
            chars,
            line_starts,
            line_lengths,
        }
    }

    /// 文字数
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// 行数（空バッファでも1行）
    pub fn line_count(&self) -> usize {
        self.line_lengths.len()
    }

    /// オフセットを含む行番号
    pub fn line_of_offset(&self, offset: usize) -> Result<usize> {
        if offset > self.len() {
            return Err(RegionError::OutOfRange { offset, length: 0 });
        }

        // offset 以下の最大の行頭を二分探索
        Ok(match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        })
    }

    /// 行の開始位置と長さ（改行文字を含まない）
    pub fn line_info(&self, line: usize) -> Result<Span> {
        match (self.line_starts.get(line), self.line_lengths.get(line)) {
            (Some(&start), Some(&length)) => Ok(Span::new(start, length)),
            _ => Err(RegionError::InvalidArgument {
                name: "line",
                value: line.to_string(),
            }),
        }
    }

    /// オフセットを含む行の情報
    pub fn line_info_of_offset(&self, offset: usize) -> Result<Span> {
        let line = self.line_of_offset(offset)?;
        self.line_info(line)
    }

    /// 範囲がバッファ内にあることを確認し `(start, end)` を返す
    pub fn check_span(&self, span: Span) -> Result<(usize, usize)> {
        match span.end() {
            Some(end) if end <= self.len() => Ok((span.offset, end)),
            _ => Err(RegionError::OutOfRange {
                offset: span.offset,
                length: span.length,
            }),
        }
    }

    /// 範囲内の文字列
    pub fn text(&self, span: Span) -> Result<String> {
        let (start, end) = self.check_span(span)?;
        Ok(self.chars[start..end].iter().collect())
    }

    /// 行の内容（改行文字を含まない）
    pub fn line_text(&self, line: usize) -> Result<String> {
        let info = self.line_info(line)?;
        self.text(info)
    }
}

impl From<&str> for Buffer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
