//! 文字オフセット範囲
//!
//! `Span` は半開区間 `[offset, offset + length)`。長さ 0 はキャレット位置を表す。

/// バッファ内の半開区間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// 開始オフセット（文字単位、0始まり）
    pub offset: usize,
    /// 文字数
    pub length: usize,
}

impl Span {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// キャレット位置（長さ0）
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, 0)
    }

    /// 終端オフセット（オーバーフロー時は `None`）
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[offset: {}, length: {}]", self.offset, self.length)
    }
}

/// 行境界に揃った範囲
///
/// 先頭行の開始位置から最終行の末尾（改行文字を含まない）までを覆う。
/// `region::to_lines` だけが生成する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan(Span);

impl LineSpan {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self(Span::new(start, end - start))
    }

    pub fn offset(&self) -> usize {
        self.0.offset
    }

    pub fn length(&self) -> usize {
        self.0.length
    }

    /// 終端オフセット（構築時に検証済みなのでオーバーフローしない）
    pub fn end(&self) -> usize {
        self.0.offset + self.0.length
    }

    pub fn as_span(&self) -> Span {
        self.0
    }
}

impl From<LineSpan> for Span {
    fn from(value: LineSpan) -> Self {
        value.0
    }
}
