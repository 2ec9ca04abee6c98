//! ファイル操作モジュール
//!
//! - ログファイルは追記のみ（既存内容は書き換えない）
//! - 親ディレクトリは自動作成、失敗時はエラー
//! - 改行コードと文字エンコーディングは設定で切り替え

pub mod format;
pub mod io;
pub mod path;

pub use format::{LineBreak, LogEncoding, LogFormat};
pub use io::{append_lines, create_parent_dirs, file_exists};
pub use path::{expand_path, lowercase_extension, to_portable_string};
