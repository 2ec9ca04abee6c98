//! ログエントリのテンプレート
//!
//! 正規化した行リストに位置情報と言語ヒントを付け、フェンス付きコードブロックとして整形する。

use crate::buffer::{Buffer, Span};
use crate::error::region::Result;
use crate::file::{lowercase_extension, to_portable_string, LineBreak};
use crate::region;
use std::path::{Path, PathBuf};

/// コードブロックの区切り
pub const FENCE: &str = "```";
/// エントリ間の区切り行
pub const SEPARATOR: &str = "********";

/// スニペットの取得元
#[derive(Debug, Clone)]
pub struct SnippetSource {
    /// 表示用のパス（任意）
    pub path: Option<PathBuf>,
    pub buffer: Buffer,
    /// 選択範囲（テキスト選択がない場合は `None`）
    pub span: Option<Span>,
}

impl SnippetSource {
    pub fn new(path: Option<PathBuf>, buffer: Buffer, span: Option<Span>) -> Self {
        Self { path, buffer, span }
    }

    /// 位置情報・言語・正規化済みの行からテンプレートを作る
    pub fn template(&self, tab_width: usize) -> Result<LogEntry> {
        let location = match &self.path {
            Some(path) => Some(location(path, &self.buffer, self.span)?),
            None => None,
        };
        let lines = match self.span {
            Some(span) => Some(region::normalize(&self.buffer, span, tab_width)?),
            None => None,
        };
        let language = self.path.as_deref().and_then(language);
        Ok(LogEntry::template(
            location.as_deref(),
            lines.as_deref(),
            language.as_deref(),
        ))
    }
}

/// `path:L<行番号>` 形式の位置文字列（行番号は1始まり）
pub fn location(path: &Path, buffer: &Buffer, span: Option<Span>) -> Result<String> {
    let path = to_portable_string(path);
    match span {
        Some(span) => {
            let line = region::line_number(buffer, span)?;
            Ok(format!("{}:L{}", path, line + 1))
        }
        None => Ok(path),
    }
}

/// 拡張子から言語ヒントを推定
pub fn language(path: &Path) -> Option<String> {
    lowercase_extension(path)
}

/// 追記するログエントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    lines: Vec<String>,
}

impl LogEntry {
    /// 先頭の空行はコメント欄として残す
    pub fn template(
        location: Option<&str>,
        lines: Option<&[String]>,
        language: Option<&str>,
    ) -> Self {
        let mut results = vec![String::new()];
        if location.is_some() || lines.is_some() {
            results.push(String::new());
            match language {
                Some(language) => results.push(format!("{}{}", FENCE, language)),
                None => results.push(FENCE.to_string()),
            }
            if let Some(location) = location {
                results.push(format!("// {}", location));
            }
            if let Some(lines) = lines {
                results.extend(lines.iter().cloned());
            }
            results.push(FENCE.to_string());
            results.push(String::new());
        }
        results.push(SEPARATOR.to_string());
        Self { lines: results }
    }

    /// 先頭のコメント欄を置き換える（改行区切りで複数行可）
    pub fn with_comment(mut self, text: &str) -> Self {
        if text.is_empty() {
            return self;
        }
        let comment = Buffer::new(text);
        let mut lines: Vec<String> = (0..comment.line_count())
            .filter_map(|line| comment.line_text(line).ok())
            .collect();
        lines.extend(self.lines.drain(1..));
        self.lines = lines;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 各行の後に改行を付けた文字列
    pub fn render(&self, line_break: LineBreak) -> String {
        let separator = line_break.as_str();
        self.lines.iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push_str(separator);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_template() {
        let body = lines(&["x++;"]);
        let entry = LogEntry::template(Some("proj/Main.java:L2"), Some(&body), Some("java"));
        assert_eq!(
            entry.lines(),
            lines(&["", "", "```java", "// proj/Main.java:L2", "x++;", "```", "", "********"])
        );
    }

    #[test]
    fn test_template_without_language_or_location() {
        let body = lines(&["a"]);
        let entry = LogEntry::template(None, Some(&body), None);
        assert_eq!(entry.lines(), lines(&["", "", "```", "a", "```", "", "********"]));
    }

    #[test]
    fn test_template_without_content() {
        let entry = LogEntry::template(None, None, Some("rs"));
        assert_eq!(entry.lines(), lines(&["", "********"]));
    }

    #[test]
    fn test_comment_replaces_first_line() {
        let entry = LogEntry::template(None, None, None).with_comment("why?\r\nbecause");
        assert_eq!(entry.lines(), lines(&["why?", "because", "********"]));
    }

    #[test]
    fn test_empty_comment_keeps_placeholder() {
        let entry = LogEntry::template(None, None, None).with_comment("");
        assert_eq!(entry.lines(), lines(&["", "********"]));
    }

    #[test]
    fn test_render() {
        let entry = LogEntry::template(None, None, None).with_comment("note");
        assert_eq!(entry.render(LineBreak::CrLf), "note\r\n********\r\n");
    }

    #[test]
    fn test_source_template() {
        let source = SnippetSource::new(
            Some(PathBuf::from("demo/Loop.C")),
            Buffer::new("  for (i) {\n    x++;\n  }\n"),
            Some(Span::new(16, 4)),
        );
        let entry = source.template(4).unwrap();
        assert_eq!(
            entry.lines(),
            lines(&["", "", "```c", "// demo/Loop.C:L2", "x++;", "```", "", "********"])
        );
    }

    #[test]
    fn test_source_without_selection() {
        let source = SnippetSource::new(Some(PathBuf::from("README")), Buffer::new("text"), None);
        let entry = source.template(4).unwrap();
        assert_eq!(entry.lines(), lines(&["", "", "```", "// README", "```", "", "********"]));
    }

    #[test]
    fn test_location_out_of_range() {
        let buffer = Buffer::new("ab");
        assert!(location(Path::new("a.rs"), &buffer, Some(Span::caret(3))).is_err());
    }
}
