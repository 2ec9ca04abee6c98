//! codereading - コードリーディング記録ツール
//!
//! ソースファイルの選択範囲を行単位で取り出して整形し、ログファイルへ追記する

// コアモジュール
pub mod error;
pub mod logging;

// データ層
pub mod buffer;

// 正規化
pub mod region;

// 出力
pub mod file;
pub mod snippet;

// 設定・起動
pub mod cli;
pub mod config;

// 公開API
pub use buffer::{Buffer, LineSpan, Span};
pub use error::{CodeReadingError, Result};
pub use region::normalize;
pub use snippet::{LogEntry, SnippetSource};
