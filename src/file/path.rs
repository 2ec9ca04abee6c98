//! パス処理ユーティリティ
//!
//! ユーザー指定パスの展開と、ログに書き出す位置文字列の整形

use crate::error::{file::Result, FileError};
use std::path::{Path, PathBuf};

/// `~` と環境変数を展開
pub fn expand_path(path: &str) -> Result<PathBuf> {
    if path.trim().is_empty() {
        return Err(FileError::InvalidPath {
            path: path.to_string(),
        });
    }

    match shellexpand::full(path) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => Err(FileError::InvalidPath {
            path: format!("{} ({})", path, e),
        }),
    }
}

/// 区切り文字を `/` に統一したパス文字列
pub fn to_portable_string<P: AsRef<Path>>(path: P) -> String {
    let text = path.as_ref().to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// 拡張子（小文字）
pub fn lowercase_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
