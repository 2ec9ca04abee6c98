//! テキスト領域の正規化
//!
//! 選択範囲を行単位に広げて取り出し、タブを展開し、共通インデントを除去する。
//! 各段は前段の結果だけに依存し、新しい行リストを返す。

pub mod extract;
pub mod indent;
pub mod snap;
pub mod tabs;

pub use extract::lines;
pub use indent::trim_common_indent;
pub use snap::{line_number, to_lines};
pub use tabs::expand_tabs;

use crate::buffer::{Buffer, Span};
use crate::error::region::Result;

/// 選択範囲からテンプレートにそのまま使える行リストを作る
pub fn normalize(buffer: &Buffer, span: Span, tab_width: usize) -> Result<Vec<String>> {
    let block = to_lines(buffer, span)?;
    log::debug!("selection {} snapped to {}", span, block.as_span());

    let raw = lines(buffer, block)?;
    let expanded = expand_tabs(&raw, tab_width)?;
    let trimmed = trim_common_indent(&expanded);
    log::debug!("normalized {} lines into {}", raw.len(), trimmed.len());
    Ok(trimmed)
}
